use thiserror::Error;

/// Errors raised synchronously by highlighter construction and mutation.
#[derive(Debug, Error)]
pub enum HighlightError {
    /// A caller-supplied value violates a precondition.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A configuration document could not be parsed.
    #[error("invalid highlighter config: {0}")]
    Config(#[from] serde_json::Error),
}

impl HighlightError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = HighlightError> = std::result::Result<T, E>;
