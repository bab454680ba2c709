use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use super::batcher::Batch;
use crate::api::{ApiError, MessageTemplates, PayoutGateway, PayoutReceipt, PayoutRequest};
use crate::domain::BatchId;

/// What happened to one batch during a run
#[derive(Debug)]
pub enum BatchOutcome {
    Accepted {
        batch_id: BatchId,
        items: usize,
        receipt: PayoutReceipt,
    },
    Rejected {
        batch_id: BatchId,
        items: usize,
        error: ApiError,
    },
    /// Not sent because the run was interrupted first
    Skipped { batch_id: BatchId, items: usize },
}

impl BatchOutcome {
    pub fn batch_id(&self) -> &BatchId {
        match self {
            Self::Accepted { batch_id, .. } => batch_id,
            Self::Rejected { batch_id, .. } => batch_id,
            Self::Skipped { batch_id, .. } => batch_id,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Outcomes of every batch of a run, in submission order
#[derive(Debug, Default)]
pub struct SubmissionReport {
    pub outcomes: Vec<BatchOutcome>,
}

impl SubmissionReport {
    /// Accepted batches with the processing code each one was given
    pub fn accepted(&self) -> impl Iterator<Item = (&BatchId, &str)> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            BatchOutcome::Accepted {
                batch_id, receipt, ..
            } => Some((batch_id, receipt.payout_batch_id.as_str())),
            _ => None,
        })
    }

    pub fn accepted_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_accepted()).count()
    }

    pub fn rejected_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, BatchOutcome::Rejected { .. }))
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, BatchOutcome::Skipped { .. }))
            .count()
    }
}

/// Sends batches one at a time through a payout gateway
pub struct Submitter<G: PayoutGateway> {
    gateway: G,
    templates: MessageTemplates,
}

impl<G: PayoutGateway> Submitter<G> {
    pub fn new(gateway: G, templates: MessageTemplates) -> Self {
        Self { gateway, templates }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Submit every batch in order
    ///
    /// A rejected batch is logged and the run moves on. Once `cancel` fires,
    /// the remaining batches are skipped; a request already in flight is
    /// always awaited so its outcome can be recorded.
    pub async fn submit_all(&self, batches: &[Batch], cancel: &CancellationToken) -> SubmissionReport {
        let mut report = SubmissionReport::default();

        for batch in batches {
            if cancel.is_cancelled() {
                warn!(batch_id = %batch.id, items = batch.len(), "Run interrupted, batch not sent");
                report.outcomes.push(BatchOutcome::Skipped {
                    batch_id: batch.id.clone(),
                    items: batch.len(),
                });
                continue;
            }

            report.outcomes.push(self.submit(batch).await);
        }

        report
    }

    async fn submit(&self, batch: &Batch) -> BatchOutcome {
        let request = PayoutRequest::for_batch(&batch.id, &batch.payments, &self.templates);

        match self.gateway.create_payout(&request).await {
            Ok(receipt) => {
                info!(
                    batch_id = %batch.id,
                    payout_batch_id = %receipt.payout_batch_id,
                    batch_status = receipt.batch_status.as_deref().unwrap_or("unknown"),
                    items = batch.len(),
                    "Payout {} successfully processed",
                    receipt.payout_batch_id
                );
                BatchOutcome::Accepted {
                    batch_id: batch.id.clone(),
                    items: batch.len(),
                    receipt,
                }
            }
            Err(e) => {
                error!(batch_id = %batch.id, items = batch.len(), error = %e, "Payout batch failed");
                BatchOutcome::Rejected {
                    batch_id: batch.id.clone(),
                    items: batch.len(),
                    error: e,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiErrorBody;
    use crate::domain::{Amount, Currency, ItemId, Payment};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Accepts every batch except the ones listed, recording what it was sent
    #[derive(Default)]
    struct ScriptedGateway {
        reject: Vec<String>,
        sent: Mutex<Vec<PayoutRequest>>,
    }

    #[async_trait]
    impl PayoutGateway for ScriptedGateway {
        async fn create_payout(&self, request: &PayoutRequest) -> Result<PayoutReceipt, ApiError> {
            self.sent.lock().unwrap().push(request.clone());
            let id = &request.sender_batch_header.sender_batch_id;

            if self.reject.contains(id) {
                return Err(ApiError::Rejected {
                    status: 422,
                    error: ApiErrorBody {
                        name: "VALIDATION_ERROR".to_string(),
                        ..Default::default()
                    },
                });
            }

            Ok(PayoutReceipt {
                payout_batch_id: format!("PB-{}", id),
                batch_status: Some("PENDING".to_string()),
            })
        }
    }

    fn batch(id: &str, items: usize) -> Batch {
        Batch {
            id: BatchId::new(id),
            payments: (0..items)
                .map(|i| Payment {
                    batch_id: BatchId::new(id),
                    item_id: ItemId::new(i.to_string()),
                    first_name: Some("Ana".to_string()),
                    receiver_email: "a@b.com".to_string(),
                    amount: Amount::from_minor(50),
                    currency: Currency::Usd,
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn submits_each_batch_once_in_order() {
        let submitter = Submitter::new(ScriptedGateway::default(), MessageTemplates::default());
        let report = submitter
            .submit_all(&[batch("A", 2), batch("B", 1)], &CancellationToken::new())
            .await;

        let sent = submitter.gateway().sent.lock().unwrap();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].sender_batch_header.sender_batch_id, "A");
        assert_eq!(sent[0].items.len(), 2);
        assert_eq!(sent[0].items[0].amount.value, "0.50");
        assert_eq!(sent[1].sender_batch_header.sender_batch_id, "B");

        let accepted: Vec<_> = report.accepted().collect();
        assert_eq!(accepted.len(), 2);
        assert_eq!(accepted[0].0.as_str(), "A");
        assert_eq!(accepted[0].1, "PB-A");
    }

    #[tokio::test]
    async fn rejected_batch_does_not_stop_the_run() {
        let gateway = ScriptedGateway {
            reject: vec!["A".to_string()],
            ..Default::default()
        };
        let submitter = Submitter::new(gateway, MessageTemplates::default());
        let report = submitter
            .submit_all(&[batch("A", 1), batch("B", 1)], &CancellationToken::new())
            .await;

        assert_eq!(report.rejected_count(), 1);
        assert_eq!(report.accepted_count(), 1);
        assert!(matches!(&report.outcomes[0], BatchOutcome::Rejected { batch_id, .. } if batch_id.as_str() == "A"));
        assert!(report.outcomes[1].is_accepted());
    }

    #[tokio::test]
    async fn cancelled_run_skips_remaining_batches() {
        let cancel = CancellationToken::new();
        cancel.cancel();

        let submitter = Submitter::new(ScriptedGateway::default(), MessageTemplates::default());
        let report = submitter.submit_all(&[batch("A", 1), batch("B", 3)], &cancel).await;

        assert!(submitter.gateway().sent.lock().unwrap().is_empty());
        assert_eq!(report.skipped_count(), 2);
        assert_eq!(report.outcomes[1].batch_id().as_str(), "B");
    }
}
