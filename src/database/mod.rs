pub mod manager;
pub mod models;
pub mod repository;
pub mod service;

pub use manager::{DatabaseError, DatabaseManager};
pub use models::{Admin, Client, NewAdmin, NewClient};
pub use repository::{ClientRegistry, CredentialStore};
pub use service::PgStore;
