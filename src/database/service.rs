use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::manager::DatabaseError;
use crate::database::models::{Admin, Client, NewAdmin, NewClient};
use crate::database::repository::{ClientRegistry, CredentialStore};

/// Postgres implementation of both stores, sharing one pool
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PgStore {
    async fn insert_admin(&self, admin: NewAdmin) -> Result<i64, DatabaseError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO login (full_name, email, password)
             VALUES ($1, $2, $3)
             RETURNING id",
        )
        .bind(&admin.full_name)
        .bind(&admin.email)
        .bind(&admin.password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn find_admin_by_email(&self, email: &str) -> Result<Option<Admin>, DatabaseError> {
        let admin = sqlx::query_as::<_, Admin>(
            "SELECT id, full_name, email, password
             FROM login
             WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(admin)
    }
}

#[async_trait]
impl ClientRegistry for PgStore {
    async fn list_clients(&self) -> Result<Vec<Client>, DatabaseError> {
        let clients = sqlx::query_as::<_, Client>(
            "SELECT id, full_name, email, age FROM clients ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(clients)
    }

    async fn insert_client(&self, client: NewClient) -> Result<i64, DatabaseError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO clients (full_name, email, age)
             VALUES ($1, $2, $3)
             RETURNING id",
        )
        .bind(&client.full_name)
        .bind(&client.email)
        .bind(client.age)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn find_client(&self, id: i64) -> Result<Option<Client>, DatabaseError> {
        let client = sqlx::query_as::<_, Client>(
            "SELECT id, full_name, email, age FROM clients WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(client)
    }

    async fn delete_client(&self, id: i64) -> Result<bool, DatabaseError> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
