mod openai;
mod prompt;

pub use openai::OpenAiClient;
pub use prompt::build_prompt;

use std::sync::Arc;

use tracing::debug;

use crate::error::{Error, Result};
use crate::schema::ExtractionMode;

/// Transport seam for the remote completion service, so handler tests can
/// substitute a canned client.
#[async_trait::async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
}

pub type CompletionHandle = Arc<dyn CompletionClient>;

/// Builds the extraction prompt for a mode and relays it to the
/// completion service, returning the model's reply text verbatim.
pub struct FieldExtractionClient {
    inner: CompletionHandle,
}

impl FieldExtractionClient {
    #[must_use]
    pub fn new(inner: CompletionHandle) -> Self {
        Self { inner }
    }

    pub async fn extract_fields(&self, text: &str, mode: ExtractionMode) -> Result<String> {
        let prompt = build_prompt(mode, text);
        debug!(mode = ?mode, prompt_chars = prompt.len(), "requesting field extraction");
        self.inner.complete(&prompt).await
    }
}

/// Parse the model's reply as a JSON field mapping. The reply is taken on
/// faith otherwise; no schema validation happens downstream of this.
pub fn parse_fields(raw: &str) -> Result<serde_json::Value> {
    serde_json::from_str(raw).map_err(Error::ResponseParse)
}
