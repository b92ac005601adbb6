use thiserror::Error;

/// Custom error types for todui
#[derive(Debug, Error)]
pub enum TodoError {
    #[error("Invalid item store: {0}")]
    InvalidStore(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
