use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::chat::GenerateError;

pub const MSG_MISSING_FIELDS: &str = "Please fill in all required fields.";
pub const MSG_INVALID_BODY: &str = "Invalid request body.";
pub const MSG_SUBMIT_FAILED: &str = "Failed to submit form.";
pub const MSG_SUBMITTED: &str = "Form submitted successfully!";

pub const MSG_MISSING_INPUT: &str = "Please provide a message.";
pub const MSG_CHAT_FAILED: &str = "I'm sorry, I'm having trouble processing your request right now.";
pub const MSG_CHAT_UNAVAILABLE: &str =
    "I'm sorry, the chatbot service is currently unavailable. Please contact our support team directly.";

#[derive(Debug)]
pub enum AppError {
    Internal(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Internal(msg) => write!(f, "Internal Error: {msg}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Internal(msg) => tracing::error!("Internal error: {msg}"),
        }

        let body = json!({ "error": "Internal server error" });
        (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}

impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        AppError::Internal(format!("Template render failed: {err}"))
    }
}

/// Failures of `POST /submit`. Bodies use the `{success, message}` shape.
#[derive(Debug)]
pub enum SubmitError {
    InvalidBody(String),
    MissingRequiredField(Vec<&'static str>),
    Persistence(sqlx::Error),
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitError::InvalidBody(msg) => write!(f, "Invalid body: {msg}"),
            SubmitError::MissingRequiredField(fields) => {
                write!(f, "Missing required fields: {}", fields.join(", "))
            }
            SubmitError::Persistence(err) => write!(f, "Database Error: {err}"),
        }
    }
}

impl IntoResponse for SubmitError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            SubmitError::InvalidBody(msg) => {
                tracing::debug!("Rejected submission body: {msg}");
                (StatusCode::BAD_REQUEST, MSG_INVALID_BODY)
            }
            SubmitError::MissingRequiredField(fields) => {
                tracing::debug!("Submission missing fields: {fields:?}");
                (StatusCode::BAD_REQUEST, MSG_MISSING_FIELDS)
            }
            SubmitError::Persistence(err) => {
                tracing::error!("Failed to store submission: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_SUBMIT_FAILED)
            }
        };

        let body = json!({ "success": false, "message": message });
        (status, axum::Json(body)).into_response()
    }
}

impl From<sqlx::Error> for SubmitError {
    fn from(err: sqlx::Error) -> Self {
        SubmitError::Persistence(err)
    }
}

/// Failures of `POST /chatbot`. Bodies use the `{response}` shape and never
/// carry the upstream error.
#[derive(Debug)]
pub enum ChatError {
    MissingInput,
    Unavailable,
    Upstream(GenerateError),
}

impl std::fmt::Display for ChatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatError::MissingInput => write!(f, "Missing user_input"),
            ChatError::Unavailable => write!(f, "No text generator configured"),
            ChatError::Upstream(err) => write!(f, "Upstream Error: {err}"),
        }
    }
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ChatError::MissingInput => (StatusCode::BAD_REQUEST, MSG_MISSING_INPUT),
            ChatError::Unavailable => {
                tracing::warn!("Chat request received but no API key is configured");
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_CHAT_UNAVAILABLE)
            }
            ChatError::Upstream(err) => {
                tracing::error!("Text generation failed: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_CHAT_FAILED)
            }
        };

        let body = json!({ "response": message });
        (status, axum::Json(body)).into_response()
    }
}

impl From<GenerateError> for ChatError {
    fn from(err: GenerateError) -> Self {
        ChatError::Upstream(err)
    }
}
