//! Prelude module for convenient imports
//!
//! Import everything you need with: `use payouts::prelude::*;`

// Domain types
pub use crate::domain::{
    Amount, BatchId, Cell, Currency, DomainError, ItemId, Payment, PaymentRow, Profile,
};

// IO types
pub use crate::io::{IoError, Table, load_table, write_table};

// Validation types
pub use crate::validation::{PaymentColumns, ValidationError, Validator};

// API types
pub use crate::api::{
    ApiError, ClientConfig, Credentials, Environment, MessageTemplates, PaypalClient,
    PayoutGateway, PayoutReceipt, PayoutRequest,
};

// Engine types
pub use crate::engine::{
    Batch, BatchOutcome, EngineError, RunOptions, RunSummary, SubmissionReport, Submitter,
};

// App types
pub use crate::app::{AppError, Args, CliApp, RunConfig};

pub use tokio_util::sync::CancellationToken;
