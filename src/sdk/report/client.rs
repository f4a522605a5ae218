use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::json;

use super::error::{OllamaErrorPayload, ReportError};
use crate::sdk::config::OllamaConfig;

/// Returned in place of a report when the model sends no message back.
pub const NO_CONTENT_SENTINEL: &str = "No content received";

#[derive(Deserialize)]
struct ChatResponse {
    message: Option<ChatMessage>,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

/// Client for the locally hosted chat model that turns symptom journals
/// into medical reports.
pub struct ReportClient {
    client: Client,
    base_url: String,
    model: String,
}

impl ReportClient {
    pub fn new(config: OllamaConfig) -> Self {
        Self {
            // Generation on CPU-only hosts can take a while.
            client: Client::builder()
                .timeout(Duration::from_secs(120))
                .build()
                .unwrap(),
            base_url: config.base_url,
            model: config.model,
        }
    }

    /// Sends the journal to the chat model and returns the generated report.
    /// A response carrying no message yields the sentinel string, not an error.
    pub fn generate(&self, journal: &str) -> Result<String, ReportError> {
        let url = format!("{}/api/chat", self.base_url);
        let body = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": journal }],
            "stream": false
        });
        log::debug!("[CLIENT] Requesting report from model \"{}\"", self.model);

        let response = self.client.post(&url).json(&body).send()?;
        let status = response.status();
        let text = response.text()?;

        if !status.is_success() {
            // Try to parse the structured error first
            if let Ok(payload) = serde_json::from_str::<OllamaErrorPayload>(&text) {
                return Err(ReportError::ApiError(payload.error));
            }
            log::error!(
                "Model API returned non-success status: {}. Unparseable Body: {}",
                status,
                text
            );
            return Err(ReportError::RawApiError(text));
        }

        parse_report(&text)
    }
}

fn parse_report(text: &str) -> Result<String, ReportError> {
    let chat: ChatResponse = serde_json::from_str(text)?;
    Ok(chat
        .message
        .map(|m| m.content)
        .unwrap_or_else(|| NO_CONTENT_SENTINEL.to_string()))
}
