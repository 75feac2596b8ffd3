mod docx;
mod ocr;
mod pdf;

pub use ocr::OcrEngine;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Error, Result};

/// Supported upload formats, selected by file-name suffix only. No byte
/// sniffing is done; a mismatched extension dispatches to the wrong reader
/// and surfaces as an extraction failure from that reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    Docx,
    Pdf,
    Jpeg,
    Png,
}

impl DocumentFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "docx" => Some(Self::Docx),
            "pdf" => Some(Self::Pdf),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            _ => None,
        }
    }

    /// Derive the format tag from a file name: the substring after the
    /// last `.`, lower-cased. A name without a dot is its own tag.
    pub fn from_file_name(file_name: &str) -> Result<Self> {
        let tag = file_name.rsplit('.').next().unwrap_or(file_name);
        Self::from_extension(tag).ok_or_else(|| Error::UnsupportedFormat(tag.to_lowercase()))
    }
}

/// Turns an uploaded file into plain text via the reader matching its
/// format tag.
pub struct TextExtractor {
    ocr: OcrEngine,
}

impl TextExtractor {
    #[must_use]
    pub const fn new(ocr: OcrEngine) -> Self {
        Self { ocr }
    }

    /// Extract plain text from `bytes`, dispatching on the file-name suffix.
    ///
    /// Fails with [`Error::UnsupportedFormat`] for an unrecognized tag and
    /// [`Error::ExtractionFailed`] when the underlying reader rejects the
    /// payload.
    pub async fn extract(&self, file_name: &str, bytes: &[u8]) -> Result<String> {
        let format = DocumentFormat::from_file_name(file_name)?;

        let result = match format {
            DocumentFormat::Docx => docx::read_text(bytes),
            DocumentFormat::Pdf => pdf::read_text(bytes),
            DocumentFormat::Jpeg | DocumentFormat::Png => self.ocr.recognize(bytes).await,
        };

        match &result {
            Ok(text) => info!(file_name, chars = text.len(), "extracted text"),
            Err(e) => warn!(file_name, error = %e, "text extraction failed"),
        }

        result.map_err(|e| match e {
            Error::ExtractionFailed { message, .. } => Error::ExtractionFailed {
                filename: file_name.to_string(),
                message,
            },
            other => other,
        })
    }
}
