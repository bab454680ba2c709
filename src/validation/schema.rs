use std::collections::BTreeSet;

use super::error::ValidationError;
use crate::domain::{BatchId, ItemId, PaymentRow, Profile};
use crate::io::Table;

pub const BATCH_ID: &str = "batch_id";
pub const CURRENCY: &str = "currency";
pub const FIRST_NAME: &str = "first_name";
pub const ITEM_ID: &str = "item_id";
pub const PROCESSED_CODE: &str = "processed_code";
pub const RECEIVER_EMAIL: &str = "receiver_email";
pub const VALUE: &str = "value";

/// Exact column set of a strict sheet
pub const STRICT_COLUMNS: [&str; 7] = [
    BATCH_ID,
    CURRENCY,
    FIRST_NAME,
    ITEM_ID,
    PROCESSED_CODE,
    RECEIVER_EMAIL,
    VALUE,
];

/// Columns every sheet needs to be payable
pub const REQUIRED_COLUMNS: [&str; 5] = [BATCH_ID, ITEM_ID, RECEIVER_EMAIL, VALUE, CURRENCY];

/// Column positions of a payment sheet, resolved once after loading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentColumns {
    batch_id: usize,
    item_id: usize,
    first_name: Option<usize>,
    receiver_email: usize,
    value: usize,
    currency: usize,
    processed_code: Option<usize>,
}

impl PaymentColumns {
    /// Check the header against the profile's schema and locate each column
    pub fn resolve(headers: &[String], profile: Profile) -> Result<Self, ValidationError> {
        if profile.is_strict() {
            check_exact_schema(headers)?;
        }

        let find = |name: &str| headers.iter().position(|header| header == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| ValidationError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            batch_id: require(BATCH_ID)?,
            item_id: require(ITEM_ID)?,
            first_name: find(FIRST_NAME),
            receiver_email: require(RECEIVER_EMAIL)?,
            value: require(VALUE)?,
            currency: require(CURRENCY)?,
            processed_code: find(PROCESSED_CODE),
        })
    }

    pub fn batch_id(&self) -> usize {
        self.batch_id
    }

    /// Position of the idempotency column; sheets without one cannot be re-run safely
    pub fn processed_code(&self) -> Option<usize> {
        self.processed_code
    }

    /// Whether the row already carries a processing code
    pub fn is_processed(&self, table: &Table, index: usize) -> bool {
        self.processed_code
            .is_some_and(|col| table.raw(index, col).is_some())
    }

    /// Extract one typed row per unprocessed table row
    ///
    /// Rows stamped by earlier runs are skipped before any field is checked,
    /// so a stale row can never block new payouts.
    pub fn extract_pending(&self, table: &Table) -> Result<Vec<PaymentRow>, ValidationError> {
        (0..table.len())
            .filter(|&index| !self.is_processed(table, index))
            .map(|index| self.extract_row(table, index))
            .collect()
    }

    fn extract_row(&self, table: &Table, index: usize) -> Result<PaymentRow, ValidationError> {
        let row = index + 1;
        let required = |col: usize, column: &'static str| {
            table
                .raw(index, col)
                .map(str::to_string)
                .ok_or(ValidationError::MissingValue { column, row })
        };
        let optional = |col: Option<usize>| {
            col.and_then(|col| table.raw(index, col))
                .map(str::to_string)
        };

        Ok(PaymentRow {
            row,
            batch_id: BatchId::new(required(self.batch_id, BATCH_ID)?),
            item_id: ItemId::new(required(self.item_id, ITEM_ID)?),
            first_name: optional(self.first_name),
            receiver_email: required(self.receiver_email, RECEIVER_EMAIL)?,
            value: table.cell(index, self.value),
            currency: required(self.currency, CURRENCY)?,
            processed_code: optional(self.processed_code),
        })
    }
}

fn check_exact_schema(headers: &[String]) -> Result<(), ValidationError> {
    let expected: BTreeSet<&str> = STRICT_COLUMNS.into_iter().collect();
    let actual: BTreeSet<&str> = headers.iter().map(String::as_str).collect();

    if expected == actual {
        return Ok(());
    }

    Err(ValidationError::Schema {
        missing: expected.difference(&actual).map(|c| c.to_string()).collect(),
        unexpected: actual.difference(&expected).map(|c| c.to_string()).collect(),
    })
}
