//! Application-wide error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("resource registration error: {0}")]
    Resources(String),

    #[error("extraction config error: {0}")]
    Extraction(String),

    #[error("engine load error: {0}")]
    Engine(String),

    #[error("logger error: {0}")]
    Logger(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
