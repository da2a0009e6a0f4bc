use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrubError {
    #[error("Formatter not found: {0}")]
    FormatterNotFound(String),

    #[error("Error kind cannot be rebuilt for rethrow: {0}")]
    RethrowUnsupported(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ScrubError>;
