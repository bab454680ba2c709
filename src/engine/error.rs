use thiserror::Error;

use crate::api::ApiError;
use crate::io::IoError;
use crate::validation::ValidationError;

/// Errors that abort a payout run
///
/// Rejected batches are not errors; they are reported as outcomes.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Failed to load payment sheet: {0}")]
    Load(#[source] IoError),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Payout API unavailable: {0}")]
    Api(#[from] ApiError),

    #[error("Failed to save payment sheet: {0}")]
    Persist(#[source] IoError),
}
