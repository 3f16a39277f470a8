use thiserror::Error;

/// Errors raised by session storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("session storage IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("session serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
