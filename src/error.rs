//! Error types for theme access and preference storage.

/// Failure talking to the durable preference store
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No store exists in this environment (no window, storage disabled)
    #[error("preference storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read preference: {0}")]
    Read(String),
    /// Includes quota exhaustion in browsers
    #[error("failed to write preference: {0}")]
    Write(String),
    #[error("preference file I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("preference file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Context misuse. Storage failures never reach callers; see [`StorageError`].
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// The theme was requested by a component outside the provider's subtree
    #[error("use_theme must be used within a ThemeProvider")]
    MissingProvider,
}
