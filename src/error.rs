// src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("serde: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, AdapterError>;
