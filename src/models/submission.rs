use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A contact-form submission as stored.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Submission {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: String,
    pub message: String,
    /// UTC, set by the store.
    pub created_at: NaiveDateTime,
}

/// A validated submission that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: String,
    pub message: String,
}
