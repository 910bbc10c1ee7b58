//! Rendering error types

use thiserror::Error;

/// Errors that can occur while drawing to a surface
#[derive(Error, Debug)]
pub enum RenderError {
    /// Writing to the output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding a frame failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::Serialization(err.to_string())
    }
}

/// Result type alias for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;
