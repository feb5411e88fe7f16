//! Image preparation before OCR: grayscale, then Otsu binary threshold.

use crate::errors::{AppError, AppResult};
use image::{DynamicImage, GrayImage, Luma};
use std::path::Path;

const SUPPORTED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Load a PNG/JPEG from disk. Other extensions are refused before decoding.
pub fn load_image(path: &Path) -> AppResult<DynamicImage> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    if !SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
        return Err(AppError::UnsupportedImage(path.display().to_string()));
    }

    Ok(image::open(path)?)
}

pub fn preprocess(img: &DynamicImage) -> GrayImage {
    let gray = img.to_luma8();
    let level = otsu_level(&gray);
    binarize(&gray, level)
}

/// Threshold maximizing the between-class variance of the histogram.
pub fn otsu_level(gray: &GrayImage) -> u8 {
    let mut hist = [0u64; 256];
    for p in gray.pixels() {
        hist[p[0] as usize] += 1;
    }

    let total: u64 = hist.iter().sum();
    if total == 0 {
        return 0;
    }

    let sum_all: f64 = hist
        .iter()
        .enumerate()
        .map(|(i, &n)| i as f64 * n as f64)
        .sum();

    let mut sum_bg = 0.0;
    let mut weight_bg = 0u64;
    let mut best_var = 0.0;
    let mut level = 0u8;

    for (t, &n) in hist.iter().enumerate() {
        weight_bg += n;
        if weight_bg == 0 {
            continue;
        }
        let weight_fg = total - weight_bg;
        if weight_fg == 0 {
            break;
        }

        sum_bg += t as f64 * n as f64;
        let mean_bg = sum_bg / weight_bg as f64;
        let mean_fg = (sum_all - sum_bg) / weight_fg as f64;
        let between = weight_bg as f64 * weight_fg as f64 * (mean_bg - mean_fg).powi(2);

        if between > best_var {
            best_var = between;
            level = t as u8;
        }
    }

    level
}

/// Pixels strictly above `level` become white, the rest black.
pub fn binarize(gray: &GrayImage, level: u8) -> GrayImage {
    let mut out = gray.clone();
    for p in out.pixels_mut() {
        *p = if p[0] > level { Luma([255]) } else { Luma([0]) };
    }
    out
}
