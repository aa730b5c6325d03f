// handlers/public/auth/mod.rs - Public authentication handlers

pub mod login; // POST /login - verify credentials, issue session token
pub mod register; // POST /register - create administrator, issue token

pub use login::login_post;
pub use register::register_post;
