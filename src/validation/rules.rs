//! The individual sheet checks
//!
//! Each check is a pure function over already-normalized rows and reports the
//! first offending row (in sheet order) with its own error variant.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

use super::error::ValidationError;
use crate::domain::{BatchId, Currency, PaymentRow};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\w+@\w+\.(com|org|edu)$").expect("Invalid email regex")
});

/// Every batch holds at most `max` rows
pub fn check_batch_sizes(rows: &[PaymentRow], max: usize) -> Result<(), ValidationError> {
    let mut sizes: HashMap<&BatchId, usize> = HashMap::new();
    for row in rows {
        *sizes.entry(&row.batch_id).or_default() += 1;
    }

    match rows.iter().find(|row| sizes[&row.batch_id] > max) {
        Some(row) => Err(ValidationError::BatchTooLarge {
            batch_id: row.batch_id.to_string(),
            size: sizes[&row.batch_id],
            max,
        }),
        None => Ok(()),
    }
}

/// Every row names its recipient
pub fn check_names(rows: &[PaymentRow]) -> Result<(), ValidationError> {
    match rows.iter().find(|row| row.first_name.is_none()) {
        Some(row) => Err(ValidationError::MissingName { row: row.row }),
        None => Ok(()),
    }
}

/// Every individual currency value is on the whitelist
pub fn check_currencies(rows: &[PaymentRow]) -> Result<(), ValidationError> {
    match rows
        .iter()
        .find(|row| row.currency.parse::<Currency>().is_err())
    {
        Some(row) => Err(ValidationError::InvalidCurrency {
            row: row.row,
            value: row.currency.clone(),
        }),
        None => Ok(()),
    }
}

/// Whether an address has the `local@domain.tld` shape payouts accept
pub fn is_well_formed_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Every receiver email is well formed
pub fn check_emails(rows: &[PaymentRow]) -> Result<(), ValidationError> {
    match rows
        .iter()
        .find(|row| !is_well_formed_email(&row.receiver_email))
    {
        Some(row) => Err(ValidationError::MalformedEmail {
            row: row.row,
            value: row.receiver_email.clone(),
        }),
        None => Ok(()),
    }
}

/// Every value is a genuine number, not a numeric-looking string
pub fn check_numeric_values(rows: &[PaymentRow]) -> Result<(), ValidationError> {
    match rows.iter().find(|row| !row.value.is_numeric()) {
        Some(row) => Err(ValidationError::NonNumericValue {
            row: row.row,
            value: row.value.to_string(),
        }),
        None => Ok(()),
    }
}

/// No item id repeats within a batch
pub fn check_unique_item_ids(rows: &[PaymentRow]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();

    match rows
        .iter()
        .find(|&row| !seen.insert((&row.batch_id, &row.item_id)))
    {
        Some(row) => Err(ValidationError::DuplicateItemId {
            batch_id: row.batch_id.to_string(),
            item_id: row.item_id.to_string(),
        }),
        None => Ok(()),
    }
}
