pub mod error;
pub mod extract;
pub mod llm;
pub mod schema;

pub use error::{Error, Result};
pub use extract::{DocumentFormat, OcrEngine, TextExtractor};
pub use llm::{
    parse_fields, CompletionClient, CompletionHandle, FieldExtractionClient, OpenAiClient,
};
pub use schema::{ExtractionMode, PERSONAL_FIELDS, VEHICLE_FIELDS};
