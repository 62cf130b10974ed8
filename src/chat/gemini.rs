use async_trait::async_trait;
use serde_json::{json, Value};

use crate::config::GeminiConfig;

use super::{GenerateError, TextGenerator};

/// Client for the Gemini `generateContent` REST call.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl GeminiClient {
    /// Returns `None` when no API key is configured.
    pub fn from_config(config: &GeminiConfig) -> Option<Self> {
        let api_key = config.api_key.clone()?;
        Some(Self::new(&config.api_base, &config.model, api_key))
    }

    pub fn new(api_base: &str, model: &str, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            model: model.to_string(),
            endpoint: format!(
                "{}/models/{}:generateContent",
                api_base.trim_end_matches('/'),
                model
            ),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn name(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let resp = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body(prompt))
            .send()
            .await
            .map_err(|e| GenerateError::from(format!("Gemini request failed: {e}")))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| GenerateError::from(format!("Failed to read Gemini response: {e}")))?;

        if !status.is_success() {
            let snippet: String = text.chars().take(500).collect();
            return Err(format!("Gemini API error ({status}): {snippet}").into());
        }

        let body: Value = serde_json::from_str(&text)
            .map_err(|e| GenerateError::from(format!("Invalid Gemini response JSON: {e}")))?;

        parse_response(&body)
    }
}

fn request_body(prompt: &str) -> Value {
    json!({
        "contents": [
            { "parts": [ { "text": prompt } ] }
        ]
    })
}

/// Joins the text parts of the first candidate.
fn parse_response(body: &Value) -> Result<String, GenerateError> {
    if let Some(error) = body.get("error") {
        let msg = error
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or("unknown error");
        return Err(format!("Gemini API error: {msg}").into());
    }

    let candidate = body
        .get("candidates")
        .and_then(|c| c.as_array())
        .and_then(|c| c.first())
        .ok_or("No candidates in Gemini response")?;

    let parts = candidate
        .get("content")
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array())
        .ok_or("No content.parts in Gemini response")?;

    let text: String = parts
        .iter()
        .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
        .collect();

    if text.is_empty() {
        return Err("Gemini response contained no text".into());
    }

    Ok(text)
}
