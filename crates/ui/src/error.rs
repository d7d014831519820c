//! UI error types.

/// Errors that end a page.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    /// The console failed.
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The user closed the input stream.
    #[error("input closed")]
    InputClosed,
}

/// Result type alias for UI operations.
pub type UiResult<T> = Result<T, UiError>;
