use thiserror::Error;

/// Domain-level errors raised while turning sheet values into payout values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Arithmetic overflow")]
    Overflow,

    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    #[error("Value is not numeric: {0}")]
    NotNumeric(String),
}
