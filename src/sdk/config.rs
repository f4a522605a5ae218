use std::env;
use std::error::Error;

/// Settings for the IPStack geolocation API.
#[derive(Debug, Clone)]
pub struct IpStackConfig {
    pub access_key: String,
}

impl IpStackConfig {
    pub fn from_env() -> Result<Self, Box<dyn Error>> {
        let access_key =
            env::var("IPSTACK_ACCESS_KEY").map_err(|_| "IPSTACK_ACCESS_KEY is not set")?;
        Ok(Self { access_key })
    }
}

/// Settings for the local Ollama instance serving the report model.
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    pub base_url: String,
    pub model: String,
}

impl OllamaConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("OLLAMA_URL")
                .unwrap_or_else(|_| "http://localhost:11434".to_string()),
            model: env::var("MEDREPORT_MODEL").unwrap_or_else(|_| "medreport".to_string()),
        }
    }
}
