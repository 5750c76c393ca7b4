//! Error types for model loading

use thiserror::Error;

/// Errors that can occur while loading and flattening a model
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Model file not found: {path}")]
    NotFound { path: String },

    #[error("Unsupported model format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("Malformed model data: {message}")]
    Malformed { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AssetError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        AssetError::Malformed {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AssetError>;
