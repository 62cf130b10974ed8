use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde_json::{json, Value};

use crate::chat::prompt;
use crate::error::ChatError;
use crate::state::SharedState;
use crate::submission::parser;

pub async fn chatbot(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, ChatError> {
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok());

    let user_input = parser::parse_body(content_type, &body)
        .ok()
        .and_then(|v| v.get("user_input").and_then(|s| s.as_str()).map(str::to_string))
        .filter(|s| !s.is_empty())
        .ok_or(ChatError::MissingInput)?;

    let generator = state.generator.as_ref().ok_or(ChatError::Unavailable)?;

    let prompt = prompt::compose(&user_input);
    tracing::debug!("Sending chat prompt to {}", generator.name());
    let text = generator.generate(&prompt).await?;

    Ok(Json(json!({ "response": text })))
}
