use thiserror::Error;

#[derive(Error, Debug)]
pub enum PostwrightError {
    #[error("Failed to load collection: {0}")]
    CollectionLoadError(String),

    #[error("Failed to load variables: {0}")]
    VariablesLoadError(String),

    #[error("Invalid collection node: {0}")]
    InvalidNode(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PostwrightError>;
