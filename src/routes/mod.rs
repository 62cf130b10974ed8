pub mod chatbot;
pub mod submit;

use axum::routing::post;
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/submit", post(submit::submit))
        .route("/chatbot", post(chatbot::chatbot))
}
