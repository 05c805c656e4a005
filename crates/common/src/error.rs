//! Error types shared across QR Studio crates.

use std::path::PathBuf;

/// Top-level error type for QR Studio operations.
#[derive(Debug, thiserror::Error)]
pub enum StudioError {
    /// The source text slot is empty after trimming.
    #[error("no text to encode")]
    InputEmpty,

    /// The encoding collaborator rejected the input.
    #[error("encoding failed: {message}")]
    EncodingFailed { message: String },

    /// An export was requested before any successful generation.
    #[error("no QR code has been generated yet")]
    PrecursorMissing,

    #[error("clipboard access denied: {message}")]
    ClipboardDenied { message: String },

    /// A drawing resource (font, surface) could not be acquired.
    #[error("rendering unavailable: {message}")]
    RenderingUnavailable { message: String },

    #[error("render error: {message}")]
    Render { message: String },

    #[error("configuration error: {message}")]
    Config { message: String },

    /// An ingested file does not carry a textual media type.
    #[error("unsupported file: {message}")]
    UnsupportedFile { message: String },

    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using StudioError.
pub type StudioResult<T> = Result<T, StudioError>;

impl StudioError {
    pub fn encoding_failed(msg: impl Into<String>) -> Self {
        Self::EncodingFailed {
            message: msg.into(),
        }
    }

    pub fn clipboard_denied(msg: impl Into<String>) -> Self {
        Self::ClipboardDenied {
            message: msg.into(),
        }
    }

    pub fn rendering_unavailable(msg: impl Into<String>) -> Self {
        Self::RenderingUnavailable {
            message: msg.into(),
        }
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn unsupported_file(msg: impl Into<String>) -> Self {
        Self::UnsupportedFile {
            message: msg.into(),
        }
    }
}
