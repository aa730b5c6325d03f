use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::app::{app, AppState};
use crate::auth::{AuthCodec, SessionClaims, MIN_BCRYPT_COST};
use crate::database::{
    Admin, Client, ClientRegistry, CredentialStore, DatabaseError, NewAdmin, NewClient,
};

#[derive(Default)]
struct Tables {
    admins: Vec<Admin>,
    clients: Vec<Client>,
    next_admin_id: i64,
    next_client_id: i64,
}

/// In-memory stand-in for the Postgres store.
///
/// Ids start at 1 and are never reused, admin emails are unique. A failing
/// store answers every call with an error, like an unreachable database.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    failing: bool,
}

impl MemoryStore {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn admins(&self) -> Vec<Admin> {
        self.lock().admins.clone()
    }

    pub fn clients(&self) -> Vec<Client> {
        self.lock().clients.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap()
    }

    fn check(&self) -> Result<(), DatabaseError> {
        if self.failing {
            return Err(sqlx::Error::PoolTimedOut.into());
        }
        Ok(())
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn insert_admin(&self, admin: NewAdmin) -> Result<i64, DatabaseError> {
        self.check()?;
        let mut tables = self.lock();
        if tables.admins.iter().any(|a| a.email == admin.email) {
            return Err(sqlx::Error::Protocol(format!(
                "duplicate key value violates unique constraint: {}",
                admin.email
            ))
            .into());
        }

        tables.next_admin_id += 1;
        let id = tables.next_admin_id;
        tables.admins.push(Admin {
            id,
            full_name: admin.full_name,
            email: admin.email,
            password_hash: admin.password_hash,
        });
        Ok(id)
    }

    async fn find_admin_by_email(&self, email: &str) -> Result<Option<Admin>, DatabaseError> {
        self.check()?;
        Ok(self.lock().admins.iter().find(|a| a.email == email).cloned())
    }
}

#[async_trait]
impl ClientRegistry for MemoryStore {
    async fn list_clients(&self) -> Result<Vec<Client>, DatabaseError> {
        self.check()?;
        Ok(self.clients())
    }

    async fn insert_client(&self, client: NewClient) -> Result<i64, DatabaseError> {
        self.check()?;
        let mut tables = self.lock();
        tables.next_client_id += 1;
        let id = tables.next_client_id;
        tables.clients.push(Client {
            id,
            full_name: client.full_name,
            email: client.email,
            age: client.age,
        });
        Ok(id)
    }

    async fn find_client(&self, id: i64) -> Result<Option<Client>, DatabaseError> {
        self.check()?;
        Ok(self.lock().clients.iter().find(|c| c.id == id).cloned())
    }

    async fn delete_client(&self, id: i64) -> Result<bool, DatabaseError> {
        self.check()?;
        let mut tables = self.lock();
        let before = tables.clients.len();
        tables.clients.retain(|c| c.id != id);
        Ok(tables.clients.len() < before)
    }
}

/// Router wired to a [`MemoryStore`], driven with `oneshot`
pub struct TestApp {
    router: Router,
    store: Arc<MemoryStore>,
    codec: AuthCodec,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_store(MemoryStore::default())
    }

    pub fn failing() -> Self {
        Self::with_store(MemoryStore::failing())
    }

    /// Admins live in a fresh [`MemoryStore`], clients in `clients`
    pub fn with_clients(clients: Arc<dyn ClientRegistry>) -> Self {
        Self::build(Arc::new(MemoryStore::default()), clients)
    }

    fn with_store(store: MemoryStore) -> Self {
        let store = Arc::new(store);
        Self::build(store.clone(), store)
    }

    fn build(store: Arc<MemoryStore>, clients: Arc<dyn ClientRegistry>) -> Self {
        let codec = AuthCodec::new("test-secret", MIN_BCRYPT_COST).unwrap();
        let state = AppState {
            credentials: store.clone(),
            clients,
            codec: Arc::new(codec.clone()),
        };

        Self {
            router: app(state),
            store,
            codec,
        }
    }

    pub fn store(&self) -> &MemoryStore {
        &self.store
    }

    pub fn codec(&self) -> &AuthCodec {
        &self.codec
    }

    /// Register through the API and return the issued token
    pub async fn register(&self, full_name: &str, email: &str, password: &str) -> String {
        let (status, body) = self
            .post(
                "/register",
                None,
                json!({
                    "full_name": full_name,
                    "email": email,
                    "password": password,
                    "repeatPassword": password,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "registration failed: {}", body);
        body["token"].as_str().unwrap().to_string()
    }

    pub async fn admin_token(&self) -> String {
        self.register("Test Admin", "admin@example.com", "admin-password")
            .await
    }

    /// Valid token without touching the store
    pub fn admin_token_unchecked(&self) -> String {
        self.codec
            .sign(&SessionClaims::new("admin@example.com", 1).into())
            .unwrap()
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::GET, uri, token, Body::empty(), None).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, token, Body::empty(), None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        let body = Body::from(body.to_string());
        self.send(Method::POST, uri, token, body, Some("application/json"))
            .await
    }

    /// POST a body that is not declared as JSON
    pub async fn post_raw(&self, uri: &str, body: &str) -> (StatusCode, Value) {
        let body = Body::from(body.to_string());
        self.send(
            Method::POST,
            uri,
            None,
            body,
            Some("application/x-www-form-urlencoded"),
        )
        .await
    }

    async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Body,
        content_type: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, body)
    }
}
