//! LinkHarvest - Error types
//!
//! Every fallible operation in the crate returns `AppError`.

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// System clipboard could not be opened or written
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// Invalid settings value or settings file
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
