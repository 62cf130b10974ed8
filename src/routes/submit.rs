use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde_json::{json, Value};

use crate::db;
use crate::error::{SubmitError, MSG_SUBMITTED};
use crate::state::SharedState;
use crate::submission::form::ContactForm;
use crate::submission::parser;

pub async fn submit(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, SubmitError> {
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok());

    let raw = parser::parse_body(content_type, &body).map_err(SubmitError::InvalidBody)?;
    let form = ContactForm::from_value(raw).map_err(SubmitError::InvalidBody)?;
    let new = form.validate().map_err(SubmitError::MissingRequiredField)?;

    let submission = db::submissions::create(&state.pool, &new).await?;
    tracing::info!("Stored submission {}", submission.id);

    Ok(Json(json!({
        "success": true,
        "message": MSG_SUBMITTED,
    })))
}
