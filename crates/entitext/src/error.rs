use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EntitextError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error in {path}: {message}")]
    JsonParse { path: PathBuf, message: String },

    #[error("Invalid entity registry: {message}")]
    InvalidRegistry { message: String },
}

pub type Result<T> = std::result::Result<T, EntitextError>;
