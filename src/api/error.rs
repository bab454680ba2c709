use thiserror::Error;

use super::types::ApiErrorBody;

/// Errors talking to the payout API
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Authentication failed ({status}): {body}")]
    Auth { status: u16, body: String },

    #[error("Payout rejected ({status}): {error}")]
    Rejected { status: u16, error: ApiErrorBody },

    #[error("Unexpected response ({status}): {body}")]
    UnexpectedResponse { status: u16, body: String },

    #[error("Invalid API configuration: {0}")]
    InvalidConfig(String),
}
