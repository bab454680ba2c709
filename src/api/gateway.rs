use async_trait::async_trait;

use super::error::ApiError;
use super::types::{PayoutReceipt, PayoutRequest};

/// Something that can disburse one payout batch
///
/// Implemented over HTTP by [`super::PaypalClient`]; tests substitute their
/// own in-memory gateways.
#[async_trait]
pub trait PayoutGateway: Send + Sync {
    /// Submit one batch, returning the API-assigned processing code on acceptance
    async fn create_payout(&self, request: &PayoutRequest) -> Result<PayoutReceipt, ApiError>;
}
