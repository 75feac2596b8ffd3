use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to read {filename}: {message}")]
    ExtractionFailed { filename: String, message: String },

    #[error("Please set extraction type first. Use /set-type endpoint.")]
    NotConfigured,

    #[error("Type must be 1 or 2")]
    InvalidMode(i64),

    #[error("No text extracted from the file")]
    EmptyDocument,

    #[error("Completion request failed: {0}")]
    RemoteService(String),

    #[error("Failed to parse completion reply as JSON: {0}")]
    ResponseParse(#[source] serde_json::Error),
}

impl Error {
    /// True for the conditions reported as bad requests: an unset mode,
    /// an invalid type id, or a document with no extractable text. Every
    /// other failure, an unrecognized format tag included, is a server
    /// error at the boundary.
    #[must_use]
    pub const fn is_bad_request(&self) -> bool {
        matches!(
            self,
            Self::NotConfigured | Self::InvalidMode(_) | Self::EmptyDocument
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
