use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::auth::AuthCodec;
use crate::database::{ClientRegistry, CredentialStore};
use crate::middleware::require_bearer;

/// Shared handles injected into every handler
#[derive(Clone)]
pub struct AppState {
    pub credentials: Arc<dyn CredentialStore>,
    pub clients: Arc<dyn ClientRegistry>,
    pub codec: Arc<AuthCodec>,
}

impl AppState {
    /// Use one store for both administrators and clients
    pub fn new<S>(store: S, codec: AuthCodec) -> Self
    where
        S: CredentialStore + ClientRegistry + 'static,
    {
        let store = Arc::new(store);
        Self {
            credentials: store.clone(),
            clients: store,
            codec: Arc::new(codec),
        }
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        // Public auth routes
        .merge(auth_public_routes())
        // Protected API
        .merge(protected_routes(state.clone()))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn auth_public_routes() -> Router<AppState> {
    use crate::handlers::public::auth;

    Router::new()
        .route("/register", post(auth::register_post))
        .route("/login", post(auth::login_post))
}

fn protected_routes(state: AppState) -> Router<AppState> {
    use crate::handlers::protected::{clients, root};

    Router::new()
        .route("/", get(root::root_get))
        .route("/clients", get(clients::clients_get).post(clients::clients_post))
        .route("/clients/:id", delete(clients::client_delete))
        .route_layer(middleware::from_fn_with_state(state, require_bearer))
}
