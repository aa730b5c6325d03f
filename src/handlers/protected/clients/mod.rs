// handlers/protected/clients/mod.rs - client registry endpoints

pub mod create; // POST /clients
pub mod delete; // DELETE /clients/:id
pub mod list; // GET /clients

pub use create::clients_post;
pub use delete::client_delete;
pub use list::clients_get;
