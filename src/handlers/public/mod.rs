// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Token acquisition endpoints. There is no trusted user context here, so every
// body goes through the validation layer before anything touches the store.

pub mod auth;

pub use auth::*;
