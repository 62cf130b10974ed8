pub mod config;
pub mod error;
pub mod state;
pub mod db;
pub mod models;
pub mod routes;
pub mod views;
pub mod chat;
pub mod submission;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use sqlx::SqlitePool;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::chat::gemini::GeminiClient;
use crate::chat::TextGenerator;
use crate::config::Config;
use crate::state::{AppState, SharedState};

/// Build the upstream text generator from config, if a credential is set.
pub fn text_generator(config: &Config) -> Option<Arc<dyn TextGenerator>> {
    match GeminiClient::from_config(&config.gemini) {
        Some(client) => {
            tracing::info!("Chat proxy using model {}", config.gemini.model);
            Some(Arc::new(client))
        }
        None => {
            tracing::warn!("GEMINI_API_KEY not set, chat proxy disabled");
            None
        }
    }
}

pub fn build_app(
    pool: SqlitePool,
    config: &Config,
    generator: Option<Arc<dyn TextGenerator>>,
) -> Router {
    let state: SharedState = Arc::new(AppState { pool, generator });

    Router::new()
        .merge(routes::api_routes())
        .merge(views::view_routes())
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .route("/health", axum::routing::get(health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(config.max_body_size)),
        )
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
