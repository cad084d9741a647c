//! Error types for solidview

use thiserror::Error;

/// Main error type for solidview operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Scene error: {0}")]
    Scene(String),

    #[error("Gpu error: {0}")]
    Gpu(String),
}

/// Result type alias for solidview operations
pub type Result<T> = std::result::Result<T, Error>;
