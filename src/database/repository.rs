use async_trait::async_trait;

use crate::database::manager::DatabaseError;
use crate::database::models::{Admin, Client, NewAdmin, NewClient};

/// Administrator accounts (`login` table)
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Insert and return the store-assigned id. Fails if the email is taken.
    async fn insert_admin(&self, admin: NewAdmin) -> Result<i64, DatabaseError>;

    async fn find_admin_by_email(&self, email: &str) -> Result<Option<Admin>, DatabaseError>;
}

/// Client records (`clients` table)
#[async_trait]
pub trait ClientRegistry: Send + Sync {
    async fn list_clients(&self) -> Result<Vec<Client>, DatabaseError>;

    /// Insert and return the store-assigned id
    async fn insert_client(&self, client: NewClient) -> Result<i64, DatabaseError>;

    async fn find_client(&self, id: i64) -> Result<Option<Client>, DatabaseError>;

    /// Returns whether a row was removed
    async fn delete_client(&self, id: i64) -> Result<bool, DatabaseError>;
}
