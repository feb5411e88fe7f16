use crate::errors::{AppError, AppResult};
use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// External text recognizer working on an image file.
pub trait OcrEngine {
    fn recognize(&self, image: &Path) -> AppResult<String>;
}

/// Tesseract invoked as a child process: `<command> <image> stdout -l <language>`.
pub struct TesseractCli {
    pub command: String,
    pub language: String,
}

impl TesseractCli {
    pub fn new(command: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            language: language.into(),
        }
    }
}

impl OcrEngine for TesseractCli {
    fn recognize(&self, image: &Path) -> AppResult<String> {
        debug!(command = %self.command, lang = %self.language, "running OCR engine");

        let output = Command::new(&self.command)
            .arg(image)
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => AppError::Ocr(format!(
                    "OCR engine '{}' not found. Install Tesseract or set ocr.command / HABITLOG_TESSERACT",
                    self.command
                )),
                _ => AppError::Ocr(format!("failed to run '{}': {e}", self.command)),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::Ocr(format!(
                "'{}' exited with {}: {}",
                self.command,
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
