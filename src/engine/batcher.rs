use std::collections::HashMap;

use crate::domain::{BatchId, Payment};

/// Payments sharing one batch id, submitted as a single payout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub id: BatchId,
    pub payments: Vec<Payment>,
}

impl Batch {
    pub fn len(&self) -> usize {
        self.payments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }
}

/// Group payments by batch id, keeping batches and their members in
/// first-appearance order
pub fn partition(payments: Vec<Payment>) -> Vec<Batch> {
    let mut positions: HashMap<BatchId, usize> = HashMap::new();
    let mut batches: Vec<Batch> = Vec::new();

    for payment in payments {
        match positions.get(&payment.batch_id) {
            Some(&position) => batches[position].payments.push(payment),
            None => {
                positions.insert(payment.batch_id.clone(), batches.len());
                batches.push(Batch {
                    id: payment.batch_id.clone(),
                    payments: vec![payment],
                });
            }
        }
    }

    batches
}
