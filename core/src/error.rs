use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Resource not found: {path}")]
    NotFound { path: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type ViewerResult<T> = Result<T, ViewerError>;
