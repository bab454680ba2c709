//! Wire types of the Payouts REST API

use std::fmt;

use serde::{Deserialize, Serialize};

use super::templates::MessageTemplates;
use crate::domain::{BatchId, Payment};

/// Body of a "create payout" call: one batch header plus one item per payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutRequest {
    pub sender_batch_header: SenderBatchHeader,
    pub items: Vec<PayoutItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderBatchHeader {
    pub sender_batch_id: String,
    pub email_subject: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutItem {
    pub recipient_type: RecipientType,
    pub amount: Money,
    pub receiver: String,
    pub note: String,
    pub sender_item_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecipientType {
    Email,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Decimal string with exactly two places
    pub value: String,
    pub currency: String,
}

impl PayoutItem {
    pub fn from_payment(payment: &Payment, templates: &MessageTemplates) -> Self {
        Self {
            recipient_type: RecipientType::Email,
            amount: Money {
                value: payment.amount.to_decimal_string(),
                currency: payment.currency.code().to_string(),
            },
            receiver: payment.receiver_email.clone(),
            note: templates.note(payment.first_name.as_deref()),
            sender_item_id: payment.item_id.to_string(),
        }
    }
}

impl PayoutRequest {
    /// Build the payout for one batch
    pub fn for_batch(batch_id: &BatchId, payments: &[Payment], templates: &MessageTemplates) -> Self {
        Self {
            sender_batch_header: SenderBatchHeader {
                sender_batch_id: batch_id.to_string(),
                email_subject: templates.subject(shared_first_name(payments)),
            },
            items: payments
                .iter()
                .map(|payment| PayoutItem::from_payment(payment, templates))
                .collect(),
        }
    }
}

fn shared_first_name(payments: &[Payment]) -> Option<&str> {
    let first = payments.first()?.first_name.as_deref()?;
    payments
        .iter()
        .all(|payment| payment.first_name.as_deref() == Some(first))
        .then_some(first)
}

/// Successful "create payout" response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PayoutResponse {
    pub batch_header: PayoutBatchHeader,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PayoutBatchHeader {
    pub payout_batch_id: String,
    #[serde(default)]
    pub batch_status: Option<String>,
}

/// What the gateway hands back for an accepted batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayoutReceipt {
    /// Processing code stamped into the sheet
    pub payout_batch_id: String,
    pub batch_status: Option<String>,
}

impl From<PayoutResponse> for PayoutReceipt {
    fn from(response: PayoutResponse) -> Self {
        Self {
            payout_batch_id: response.batch_header.payout_batch_id,
            batch_status: response.batch_header.batch_status,
        }
    }
}

/// OAuth2 client-credentials token response
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

/// Structured error payload returned when a call is refused
///
/// `name` is required, so payloads of another shape (OAuth errors such as
/// `{"error":"invalid_token"}`) fail to parse and are kept verbatim instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    pub name: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub debug_id: Option<String>,
    #[serde(default)]
    pub details: Vec<ApiErrorDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub issue: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.message)?;
        if let Some(debug_id) = &self.debug_id {
            write!(f, " (debug_id {})", debug_id)?;
        }
        for detail in &self.details {
            match &detail.field {
                Some(field) => write!(f, "; {}: {}", field, detail.issue)?,
                None => write!(f, "; {}", detail.issue)?,
            }
        }
        Ok(())
    }
}
