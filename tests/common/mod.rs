#![allow(dead_code)]

use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::{json, Value};
use sqlx::Executor;

static SCHEMA: tokio::sync::OnceCell<()> = tokio::sync::OnceCell::const_new();

pub const JWT_SECRET: &str = "integration-test-secret";

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    child: Child,
}

impl TestServer {
    fn spawn(database_url: &str) -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let mut cmd = Command::new(env!("CARGO_BIN_EXE_client-registry-api"));
        cmd.env("PORT", port.to_string())
            .env("DATABASE_URL", database_url)
            .env("JWT_SECRET", JWT_SECRET)
            .env("BCRYPT_COST", "4")
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self { port, base_url, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            // An unauthenticated GET / answers 401 once the server is up
            if let Ok(resp) = client.get(format!("{}/", self.base_url)).send().await {
                if resp.status() == StatusCode::UNAUTHORIZED {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        // Reap the child so no server outlives the test holding its port and pool
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

async fn apply_schema(database_url: &str) -> Result<()> {
    let pool = sqlx::PgPool::connect(database_url)
        .await
        .context("failed to connect to DATABASE_URL")?;
    pool.execute(include_str!("../../sql/schema.sql"))
        .await
        .context("failed to apply sql/schema.sql")?;
    pool.close().await;
    Ok(())
}

/// Start a server against the database in DATABASE_URL; it is stopped when dropped.
///
/// Returns `None` when DATABASE_URL is not set, so the suite can run without Postgres.
pub async fn ensure_server() -> Result<Option<TestServer>> {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping end-to-end test");
        return Ok(None);
    };

    // Concurrent CREATE TABLE IF NOT EXISTS can still collide, apply once per binary
    SCHEMA
        .get_or_try_init(|| apply_schema(&database_url))
        .await?;
    let server = TestServer::spawn(&database_url)?;
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(Some(server))
}

/// Email that no earlier run has registered
pub fn unique_email(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    format!("{}-{}@example.com", prefix, nanos)
}

pub async fn register(server: &TestServer, email: &str, password: &str) -> Result<String> {
    let res = reqwest::Client::new()
        .post(format!("{}/register", server.base_url))
        .json(&json!({
            "full_name": "Integration Admin",
            "email": email,
            "password": password,
            "repeatPassword": password,
        }))
        .send()
        .await?;
    anyhow::ensure!(res.status() == StatusCode::CREATED, "register failed: {}", res.status());

    let body: Value = res.json().await?;
    body["token"]
        .as_str()
        .map(str::to_string)
        .context("register response has no token")
}
