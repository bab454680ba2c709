use tracing::debug;

use super::error::ValidationError;
use super::rules;
use crate::domain::{Payment, PaymentRow, Profile, normalize};

/// Runs the full battery of sheet checks for one profile
#[derive(Debug, Clone, Copy)]
pub struct Validator {
    profile: Profile,
    max_batch_size: usize,
}

impl Validator {
    /// Create a validator using the profile's default batch ceiling
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            max_batch_size: profile.default_max_batch_size(),
        }
    }

    /// Override the batch ceiling
    pub fn with_max_batch_size(mut self, max_batch_size: usize) -> Self {
        self.max_batch_size = max_batch_size;
        self
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn max_batch_size(&self) -> usize {
        self.max_batch_size
    }

    /// Normalize, check and convert pending rows into payments
    ///
    /// Checks run in a fixed order and the first violation aborts. Normalization
    /// happens up front, so the currency, email, numeric and uniqueness checks
    /// all see normalized values.
    pub fn validate(&self, rows: Vec<PaymentRow>) -> Result<Vec<Payment>, ValidationError> {
        let rows = normalize(rows, self.profile);

        rules::check_batch_sizes(&rows, self.max_batch_size)?;
        if self.profile.is_strict() {
            rules::check_names(&rows)?;
        }
        rules::check_currencies(&rows)?;
        rules::check_emails(&rows)?;
        rules::check_numeric_values(&rows)?;
        rules::check_unique_item_ids(&rows)?;

        debug!(rows = rows.len(), profile = %self.profile, "Sheet passed validation");

        rows.into_iter()
            .map(|row| row.into_payment().map_err(ValidationError::from))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Amount, BatchId, Cell, Currency, ItemId};

    fn row(n: usize, batch_id: &str, item_id: &str) -> PaymentRow {
        PaymentRow {
            row: n,
            batch_id: BatchId::new(batch_id),
            item_id: ItemId::new(item_id),
            first_name: Some("ana maria".to_string()),
            receiver_email: "ana@test.com".to_string(),
            value: Cell::Float(0.5),
            currency: "usd".to_string(),
            processed_code: None,
        }
    }

    #[test]
    fn strict_normalizes_then_converts() {
        let payments = Validator::new(Profile::Strict)
            .validate(vec![row(1, "A", "1"), row(2, "B", "1")])
            .unwrap();

        assert_eq!(payments.len(), 2);
        assert_eq!(payments[0].first_name.as_deref(), Some("Ana Maria"));
        assert_eq!(payments[0].currency, Currency::Usd);
        assert_eq!(payments[0].amount, Amount::from_minor(50));
    }

    #[test]
    fn lenient_does_not_fold_currency_case() {
        let result = Validator::new(Profile::Lenient).validate(vec![row(1, "A", "1")]);
        assert_eq!(
            result,
            Err(ValidationError::InvalidCurrency {
                row: 1,
                value: "usd".to_string()
            })
        );
    }

    #[test]
    fn lenient_does_not_require_names() {
        let mut r = row(1, "A", "1");
        r.first_name = None;
        r.currency = "PHP".to_string();

        let payments = Validator::new(Profile::Lenient).validate(vec![r]).unwrap();
        assert_eq!(payments[0].first_name, None);
    }

    #[test]
    fn strict_requires_names() {
        let mut r = row(1, "A", "1");
        r.first_name = None;
        assert_eq!(
            Validator::new(Profile::Strict).validate(vec![r]),
            Err(ValidationError::MissingName { row: 1 })
        );
    }

    #[test]
    fn batch_size_is_checked_before_other_rules() {
        let mut rows = vec![row(1, "A", "1"), row(2, "A", "1")];
        rows[1].receiver_email = "broken".to_string();

        let result = Validator::new(Profile::Strict)
            .with_max_batch_size(1)
            .validate(rows);
        assert!(matches!(result, Err(ValidationError::BatchTooLarge { size: 2, max: 1, .. })));
    }

    #[test]
    fn max_batch_size_override() {
        let validator = Validator::new(Profile::Lenient).with_max_batch_size(10);
        assert_eq!(validator.max_batch_size(), 10);
        assert_eq!(validator.profile(), Profile::Lenient);
        assert_eq!(Validator::new(Profile::Strict).max_batch_size(), 500);
    }

    #[test]
    fn duplicates_are_reported_after_value_checks() {
        let mut rows = vec![row(1, "A", "1"), row(2, "A", "1")];
        rows[0].value = Cell::Text("1".to_string());

        assert!(matches!(
            Validator::new(Profile::Strict).validate(rows),
            Err(ValidationError::NonNumericValue { row: 1, .. })
        ));
    }

    #[test]
    fn empty_input_is_valid() {
        assert_eq!(Validator::new(Profile::Strict).validate(Vec::new()), Ok(Vec::new()));
    }
}
