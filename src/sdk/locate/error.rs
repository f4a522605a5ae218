use serde::Deserialize;
use thiserror::Error;

// Helper structs to parse the JSON error payload IPStack returns, still with
// a 200 status, when a request is rejected.
#[derive(Deserialize, Debug)]
pub struct IpStackErrorDetail {
    pub code: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub info: String,
}

#[derive(Deserialize, Debug)]
pub struct IpStackErrorPayload {
    pub error: IpStackErrorDetail,
}

#[derive(Error, Debug)]
pub enum LocateError {
    #[error("API Error (Code {code}): {info}")]
    ApiError { code: u32, info: String },

    // A fallback for when we get an error that isn't in the expected JSON format
    #[error("Unstructured API error: {0}")]
    RawApiError(String),

    #[error("Lookup response carried no usable coordinates")]
    MissingCoordinates,

    #[error("Underlying request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),
}
