use std::sync::Arc;

use sqlx::SqlitePool;

use crate::chat::TextGenerator;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub pool: SqlitePool,
    /// `None` when no upstream credential is configured.
    pub generator: Option<Arc<dyn TextGenerator>>,
}
