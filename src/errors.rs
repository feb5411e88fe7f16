//! Unified application error type.
//! All modules (db, core, cli, feedback, ocr) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Habit name must not be empty")]
    EmptyHabit,

    #[error("Invalid command: {0}")]
    Command(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // OCR errors
    // ---------------------------
    #[error("Unsupported image type: {0} (expected png, jpg or jpeg)")]
    UnsupportedImage(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("OCR error: {0}")]
    Ocr(String),

    // ---------------------------
    // AI feedback errors
    // ---------------------------
    #[error("AI feedback is not configured: set gemini.api_key or HABITLOG_GEMINI_API_KEY")]
    FeedbackNotConfigured,

    #[error("AI request failed: {0}")]
    FeedbackRequest(String),

    #[error("AI service returned HTTP {status}: {body}")]
    FeedbackHttp { status: u16, body: String },

    #[error("AI response could not be parsed: {0}")]
    FeedbackParse(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
