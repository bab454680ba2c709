use thiserror::Error;

use crate::domain::DomainError;

/// A business rule the payment sheet violates
///
/// Any of these aborts the run before a single payout is sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "Sheet columns do not match the expected schema (missing: [{}], unexpected: [{}])",
        .missing.join(", "),
        .unexpected.join(", ")
    )]
    Schema {
        missing: Vec<String>,
        unexpected: Vec<String>,
    },

    #[error("Sheet is missing required column: {0}")]
    MissingColumn(String),

    #[error("Row {row} has no value for required column {column}")]
    MissingValue { column: &'static str, row: usize },

    #[error("Batch {batch_id} has {size} rows, more than the limit of {max}")]
    BatchTooLarge {
        batch_id: String,
        size: usize,
        max: usize,
    },

    #[error("Row {row} has no first_name")]
    MissingName { row: usize },

    #[error("Row {row} has currency '{value}', expected one of USD, PHP")]
    InvalidCurrency { row: usize, value: String },

    #[error("Row {row} has malformed receiver_email '{value}'")]
    MalformedEmail { row: usize, value: String },

    #[error("Row {row} has non-numeric value '{value}'")]
    NonNumericValue { row: usize, value: String },

    #[error("Batch {batch_id} uses item_id {item_id} more than once")]
    DuplicateItemId { batch_id: String, item_id: String },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}
