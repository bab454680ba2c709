use thiserror::Error;

use crate::engine::EngineError;

/// Top-level application errors unifying all layer errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Engine(#[from] EngineError),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}
