use std::sync::Arc;

use tokio::sync::RwLock;

use fieldrelay_core::{
    CompletionHandle, ExtractionMode, FieldExtractionClient, OcrEngine, OpenAiClient,
    TextExtractor,
};

use crate::config::ServiceConfig;

/// Application state shared across all requests.
///
/// The extraction mode is sticky process-wide state: unset at startup, set
/// by `/set-type`, shared by every subsequent upload. Uploads snapshot it
/// once at the start of the request, so a concurrent `/set-type` cannot
/// change the behavior of an upload already in flight.
#[derive(Clone)]
pub struct AppState {
    pub mode: Arc<RwLock<Option<ExtractionMode>>>,
    pub extractor: Arc<TextExtractor>,
    pub fields: Arc<FieldExtractionClient>,
}

impl AppState {
    pub fn new(config: &ServiceConfig) -> Self {
        let client = Arc::new(OpenAiClient::new(config.openai_api_key.clone()));
        Self::with_client(config, client)
    }

    /// Build state around an arbitrary completion transport; handler tests
    /// inject a canned client here.
    pub fn with_client(config: &ServiceConfig, client: CompletionHandle) -> Self {
        let ocr = OcrEngine::new(config.tesseract_cmd.clone());
        Self {
            mode: Arc::new(RwLock::new(None)),
            extractor: Arc::new(TextExtractor::new(ocr)),
            fields: Arc::new(FieldExtractionClient::new(client)),
        }
    }
}
