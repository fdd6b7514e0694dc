use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlogError {
    #[error("Article not found: {0}")]
    ArticleNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Corrupt creation date {value:?} for article {id:?} (expected DD.MM.YYYY)")]
    CorruptDate { id: String, value: String },

    #[error("Content file for article {id:?} is missing: {}", path.display())]
    MissingContent { id: String, path: PathBuf },

    #[error("Invalid article id: {0:?}")]
    InvalidId(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl BlogError {
    /// True for the "article does not exist" condition, which consumers render
    /// as a not-found page rather than a server error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, BlogError::ArticleNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, BlogError>;
