pub mod gemini;
pub mod prompt;

use async_trait::async_trait;

#[derive(Debug)]
pub struct GenerateError {
    pub message: String,
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for GenerateError {}

impl From<String> for GenerateError {
    fn from(s: String) -> Self {
        GenerateError { message: s }
    }
}

impl From<&str> for GenerateError {
    fn from(s: &str) -> Self {
        GenerateError {
            message: s.to_string(),
        }
    }
}

/// An upstream service that turns a prompt into text.
///
/// One call per chat request; implementations must not retry.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    fn name(&self) -> &str;
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError>;
}
