// handlers/mod.rs - two-tier handler layout
//
// Public (no auth) → Protected (bearer token checked by `middleware::require_bearer`).
// Routing lives in `app.rs`; each handler file owns one endpoint.

pub mod protected; // Tier 2: valid bearer token required (/, /clients/*)
pub mod public; // Tier 1: no authentication (/register, /login)
