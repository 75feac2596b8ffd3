use std::path::PathBuf;

use anyhow::Context;

/// Service configuration, resolved from the environment once at startup.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Secret for the remote completion service.
    pub openai_api_key: String,
    /// Path to the tesseract binary used for image OCR.
    pub tesseract_cmd: PathBuf,
    pub host: String,
    pub port: u16,
}

impl ServiceConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let openai_api_key = std::env::var("OPENAI_API_KEY")
            .context("OPENAI_API_KEY must be set before the first request")?;

        let tesseract_cmd = std::env::var_os("TESSERACT_CMD")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("tesseract"));

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().context("PORT must be a number")?,
            Err(_) => 8001,
        };

        Ok(Self {
            openai_api_key,
            tesseract_cmd,
            host,
            port,
        })
    }
}
