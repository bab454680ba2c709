use tracing::debug;

use super::submitter::SubmissionReport;
use crate::io::Table;
use crate::validation::PaymentColumns;

/// Stamp each accepted batch's processing code into the sheet
///
/// Only rows of that batch whose `processed_code` is still empty are touched,
/// so codes from earlier runs are never overwritten. Returns the number of
/// rows stamped; sheets without a `processed_code` column are left alone.
pub fn stamp(table: &mut Table, columns: &PaymentColumns, report: &SubmissionReport) -> usize {
    let Some(code_col) = columns.processed_code() else {
        return 0;
    };
    let batch_col = columns.batch_id();
    let mut stamped = 0;

    for (batch_id, code) in report.accepted() {
        let pending: Vec<usize> = (0..table.len())
            .filter(|&index| {
                table.raw(index, batch_col) == Some(batch_id.as_str())
                    && table.raw(index, code_col).is_none()
            })
            .collect();

        for &index in &pending {
            table.set(index, code_col, code);
        }

        debug!(batch_id = %batch_id, code, rows = pending.len(), "Recorded processing code");
        stamped += pending.len();
    }

    stamped
}
