use thiserror::Error;

/// Error for token registry operations
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Token registry error: {0}")]
    StorageError(String),
}
