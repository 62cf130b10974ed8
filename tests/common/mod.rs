#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use apexcore::chat::{GenerateError, TextGenerator};
use apexcore::config::{Config, GeminiConfig};

/// A running test server backed by a private in-memory database.
pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: SqlitePool,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// POST a JSON contact form, return (body, status).
    pub async fn submit_json(&self, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/submit"))
            .json(data)
            .send()
            .await
            .expect("submit json failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// POST a form-urlencoded contact form, return (body, status).
    pub async fn submit_form(&self, data: &[(&str, &str)]) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/submit"))
            .form(data)
            .send()
            .await
            .expect("submit form failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// POST a chat message as JSON, return (body, status).
    pub async fn chat(&self, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/chatbot"))
            .json(data)
            .send()
            .await
            .expect("chat request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn submission_count(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM submissions")
            .fetch_one(&self.pool)
            .await
            .expect("count failed")
    }
}

/// Generator stub that records every prompt and answers with a fixed reply.
pub struct RecordingGenerator {
    reply: String,
    prompts: Mutex<Vec<String>>,
}

impl RecordingGenerator {
    pub fn new(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.to_string(),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for RecordingGenerator {
    fn name(&self) -> &str {
        "recording"
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.reply.clone())
    }
}

/// Generator stub that always fails with a recognizable message.
pub struct FailingGenerator;

pub const UPSTREAM_SECRET_ERROR: &str = "quota exceeded for key sk-test-123";

#[async_trait]
impl TextGenerator for FailingGenerator {
    fn name(&self) -> &str {
        "failing"
    }

    async fn generate(&self, _prompt: &str) -> Result<String, GenerateError> {
        Err(UPSTREAM_SECRET_ERROR.into())
    }
}

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        static_dir: "static".to_string(),
        max_body_size: 64 * 1024,
        log_level: "warn".to_string(),
        gemini: GeminiConfig {
            api_key: None,
            model: "gemini-pro".to_string(),
            api_base: "http://127.0.0.1:9".to_string(),
        },
    }
}

/// Spawn a test app with a fresh in-memory database and the given generator.
pub async fn spawn_app(generator: Option<Arc<dyn TextGenerator>>) -> TestApp {
    // One connection that never expires, so the in-memory database lives as
    // long as the pool.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    apexcore::db::migrate(&pool)
        .await
        .expect("Failed to run migrations on test database");

    let app = apexcore::build_app(pool.clone(), &test_config(), generator);

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp { addr, pool, client }
}

/// Spawn a test app whose chat proxy answers every prompt with `reply`.
pub async fn spawn_app_with_reply(reply: &str) -> (TestApp, Arc<RecordingGenerator>) {
    let generator = RecordingGenerator::new(reply);
    let shared: Arc<dyn TextGenerator> = generator.clone();
    let app = spawn_app(Some(shared)).await;
    (app, generator)
}

pub fn jane() -> Value {
    json!({
        "firstName": "Jane",
        "lastName": "Doe",
        "email": "jane@x.com",
        "phone": "555-0100",
        "message": "Hi"
    })
}
