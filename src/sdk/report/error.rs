use serde::Deserialize;
use thiserror::Error;

// Ollama reports failures as a bare {"error": "..."} body.
#[derive(Deserialize, Debug)]
pub struct OllamaErrorPayload {
    pub error: String,
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Model API error: {0}")]
    ApiError(String),

    #[error("Unstructured API error: {0}")]
    RawApiError(String),

    #[error("Underlying request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),
}
