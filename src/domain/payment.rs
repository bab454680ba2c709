use std::fmt;

use super::amount::Amount;
use super::cell::Cell;
use super::currency::Currency;
use super::error::DomainError;

/// Opaque grouping key shared by every row of one payout batch
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BatchId(String);

impl BatchId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sender-assigned line item identifier, unique within its batch
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One intended payment as read from the sheet, before validation
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRow {
    /// 1-based data row (header excluded); row `n` lives at table index `n - 1`
    pub row: usize,
    pub batch_id: BatchId,
    pub item_id: ItemId,
    pub first_name: Option<String>,
    pub receiver_email: String,
    pub value: Cell,
    pub currency: String,
    pub processed_code: Option<String>,
}

impl PaymentRow {
    /// Rows without a processing code have not been paid yet
    pub fn is_pending(&self) -> bool {
        self.processed_code.is_none()
    }

    /// Convert into a validated payment
    ///
    /// Callers are expected to have run the validation battery first; this
    /// only fails on values no check would have let through.
    pub fn into_payment(self) -> Result<Payment, DomainError> {
        let amount = match &self.value {
            Cell::Integer(units) => Amount::from_integer(*units)?,
            Cell::Float(value) => Amount::from_f64(*value)?,
            other => return Err(DomainError::NotNumeric(other.to_string())),
        };
        let currency = self.currency.parse::<Currency>()?;

        Ok(Payment {
            batch_id: self.batch_id,
            item_id: self.item_id,
            first_name: self.first_name,
            receiver_email: self.receiver_email,
            amount,
            currency,
        })
    }
}

/// A validated payment ready to be placed in a payout batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    pub batch_id: BatchId,
    pub item_id: ItemId,
    pub first_name: Option<String>,
    pub receiver_email: String,
    pub amount: Amount,
    pub currency: Currency,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(value: Cell, currency: &str) -> PaymentRow {
        PaymentRow {
            row: 1,
            batch_id: BatchId::new("A"),
            item_id: ItemId::new("C"),
            first_name: Some("Ana".to_string()),
            receiver_email: "t@t.edu".to_string(),
            value,
            currency: currency.to_string(),
            processed_code: None,
        }
    }

    #[test]
    fn pending_until_processed_code_set() {
        let mut r = row(Cell::Float(0.5), "USD");
        assert!(r.is_pending());
        r.processed_code = Some("PAYOUT1".to_string());
        assert!(!r.is_pending());
    }

    #[test]
    fn float_value_converts_to_amount() {
        let payment = row(Cell::Float(0.5), "USD").into_payment().unwrap();
        assert_eq!(payment.amount, Amount::from_minor(50));
        assert_eq!(payment.currency, Currency::Usd);
        assert_eq!(payment.item_id.as_str(), "C");
    }

    #[test]
    fn integer_value_converts_to_amount() {
        let payment = row(Cell::Integer(14), "PHP").into_payment().unwrap();
        assert_eq!(payment.amount, Amount::from_minor(1_400));
        assert_eq!(payment.currency, Currency::Php);
    }

    #[test]
    fn text_value_is_rejected() {
        let result = row(Cell::Text("1.99".to_string()), "USD").into_payment();
        assert_eq!(result, Err(DomainError::NotNumeric("1.99".to_string())));
    }

    #[test]
    fn unsupported_currency_is_rejected() {
        let result = row(Cell::Integer(1), "AUD").into_payment();
        assert_eq!(
            result,
            Err(DomainError::UnsupportedCurrency("AUD".to_string()))
        );
    }

    #[test]
    fn ids_display_as_text() {
        assert_eq!(BatchId::new("2024-01").to_string(), "2024-01");
        assert_eq!(ItemId::new("7").to_string(), "7");
    }
}
