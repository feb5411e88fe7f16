pub mod config;
pub mod init;
pub mod ocr;
pub mod session;
