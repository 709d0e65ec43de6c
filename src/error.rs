//! Error types for protocol extraction and dataset building

use thiserror::Error;

/// Main error type for plenum
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Cannot find date element in {file}")]
    MissingDate { file: String },

    #[error("Malformed XML in {file}: {message}")]
    Xml { file: String, message: String },

    #[error("Invalid session date {value:?} in {file}")]
    InvalidDate { file: String, value: String },

    #[error("Invalid protocol file: {0}")]
    InvalidFile(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
