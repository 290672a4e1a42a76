use crate::model::MovieId;
use crate::validation::{RecordError, ValidationError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MovieboxError {
    #[error("Movie not found: {0}")]
    MovieNotFound(MovieId),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid movie: {0}")]
    InvalidRecord(#[from] RecordError),

    #[error("Invalid JSON: {0}")]
    Parse(serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, MovieboxError>;
