use sqlx::FromRow;

/// Row of the `login` table
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    #[sqlx(rename = "password")]
    pub password_hash: String,
}

/// Administrator about to be inserted; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewAdmin {
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
}
