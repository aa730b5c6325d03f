use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::validation::ClientRegistration;

/// Row of the `clients` table, serialized as-is on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Client {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub age: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClient {
    pub full_name: String,
    pub email: String,
    pub age: i32,
}

impl From<ClientRegistration> for NewClient {
    fn from(payload: ClientRegistration) -> Self {
        Self {
            full_name: payload.full_name,
            email: payload.email,
            age: payload.age,
        }
    }
}
