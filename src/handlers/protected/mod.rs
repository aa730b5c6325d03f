// handlers/protected/mod.rs - Protected handlers (bearer token required)
//
// Every route here sits behind `require_bearer`. Any valid token grants access
// to all of them; there are no roles.

pub mod clients; // Client registry CRUD
pub mod root; // Token check endpoint
