use std::path::PathBuf;
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use crate::error::{Error, Result};

/// Optical character recognition over a raster image, backed by an
/// external tesseract binary.
///
/// The binary path comes from configuration (`TESSERACT_CMD`); the image is
/// decoded first so undecodable payloads fail before a process is spawned.
pub struct OcrEngine {
    cmd: PathBuf,
}

impl OcrEngine {
    pub fn new(cmd: impl Into<PathBuf>) -> Self {
        Self { cmd: cmd.into() }
    }

    /// Decode `bytes` as a raster image and return the recognized text
    /// as-is, with no layout post-processing.
    pub async fn recognize(&self, bytes: &[u8]) -> Result<String> {
        let img = image::load_from_memory(bytes).map_err(|e| failed(e.to_string()))?;

        let dir = tempfile::tempdir().map_err(|e| failed(e.to_string()))?;
        let img_path = dir.path().join("upload.png");
        img.save(&img_path).map_err(|e| failed(e.to_string()))?;

        debug!(cmd = %self.cmd.display(), "running OCR");
        let out = Command::new(&self.cmd)
            .arg(&img_path)
            .arg("stdout")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| failed(format!("failed to spawn {}: {e}", self.cmd.display())))?;

        if !out.status.success() {
            let stderr = String::from_utf8_lossy(&out.stderr).trim().to_string();
            return Err(failed(if stderr.is_empty() {
                format!("{} exited with status {}", self.cmd.display(), out.status)
            } else {
                stderr
            }));
        }

        Ok(String::from_utf8_lossy(&out.stdout).into_owned())
    }
}

fn failed(message: String) -> Error {
    Error::ExtractionFailed {
        filename: String::new(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_undecodable_image_fails_before_spawn() {
        // A nonexistent binary path proves no process was needed.
        let engine = OcrEngine::new("/nonexistent/tesseract");
        let err = engine.recognize(b"not an image").await.unwrap_err();
        match err {
            Error::ExtractionFailed { message, .. } => {
                assert!(!message.contains("spawn"), "decode should fail first: {message}");
            }
            other => panic!("expected ExtractionFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_binary_is_reported() {
        // Smallest valid PNG: 1x1 white pixel.
        let mut png = Vec::new();
        let img = image::RgbImage::from_pixel(1, 1, image::Rgb([255, 255, 255]));
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();

        let engine = OcrEngine::new("/nonexistent/tesseract");
        let err = engine.recognize(&png).await.unwrap_err();
        match err {
            Error::ExtractionFailed { message, .. } => {
                assert!(message.contains("spawn"), "got: {message}");
            }
            other => panic!("expected ExtractionFailed, got {other:?}"),
        }
    }
}
