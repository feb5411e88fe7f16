//! Screenshot text extraction.

pub mod engine;
pub mod preprocess;

use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::ui::messages::success;
use image::ImageFormat;
use std::fs;
use std::io::BufRead;
use std::path::{Path, PathBuf};

pub use engine::{OcrEngine, TesseractCli};

pub struct OcrLogic;

impl OcrLogic {
    /// Load, binarize, and hand the image to `engine`.
    pub fn extract(engine: &dyn OcrEngine, image_path: &Path) -> AppResult<String> {
        let img = preprocess::load_image(image_path)?;
        let binary = preprocess::preprocess(&img);

        // the engine reads from disk: the binarized copy lives in a scratch dir
        let scratch = tempfile::tempdir()?;
        let prepared = scratch.path().join("prepared.png");
        binary.save_with_format(&prepared, ImageFormat::Png)?;

        engine.recognize(&prepared)
    }

    /// Write the extracted text, asking before overwriting unless `force`.
    pub fn save_text<R: BufRead>(
        text: &str,
        out: &Path,
        force: bool,
        input: &mut R,
    ) -> AppResult<()> {
        ensure_writable(out, force, input)?;
        fs::write(out, text)?;
        success(format!("Text saved to {}", out.display()));
        Ok(())
    }

    /// `<dir>/<stem>.txt` next to the source image.
    pub fn sibling_output(image_path: &Path) -> PathBuf {
        image_path.with_extension("txt")
    }
}
