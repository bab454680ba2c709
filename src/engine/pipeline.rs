use std::future::Future;
use std::path::PathBuf;

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use super::batcher::partition;
use super::error::EngineError;
use super::recorder::stamp;
use super::submitter::Submitter;
use crate::api::templates::DEFAULT_PROGRAM;
use crate::api::{ApiError, MessageTemplates, PayoutGateway};
use crate::domain::Profile;
use crate::io::{load_table, write_table};
use crate::validation::{PaymentColumns, Validator};

/// Everything one run needs besides the gateway
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Sheet to read, and to rewrite with processing codes
    pub payments_path: PathBuf,
    pub profile: Profile,
    pub max_batch_size: usize,
    pub templates: MessageTemplates,
    /// Validate and batch only; no API call, no write
    pub dry_run: bool,
}

impl RunOptions {
    pub fn new(payments_path: impl Into<PathBuf>, profile: Profile) -> Self {
        Self {
            payments_path: payments_path.into(),
            profile,
            max_batch_size: profile.default_max_batch_size(),
            templates: MessageTemplates::for_profile(profile, DEFAULT_PROGRAM),
            dry_run: false,
        }
    }
}

/// Counters describing a finished run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total_rows: usize,
    pub pending_rows: usize,
    pub batches: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub skipped: usize,
    pub rows_stamped: usize,
    pub persisted: bool,
}

impl RunSummary {
    /// True when every batch that needed paying was paid
    pub fn is_complete(&self) -> bool {
        self.rejected == 0 && self.skipped == 0
    }
}

/// Run one payout pass over a sheet
///
/// Load -> keep pending rows -> validate -> batch -> submit -> record. Any
/// load or validation failure returns before the gateway is even connected,
/// so a bad sheet never produces a partial payout. `connect` is only called
/// when there is something to pay.
pub async fn run<G, F, Fut>(
    options: &RunOptions,
    connect: F,
    cancel: &CancellationToken,
) -> Result<RunSummary, EngineError>
where
    G: PayoutGateway,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<G, ApiError>>,
{
    info!(
        path = %options.payments_path.display(),
        profile = %options.profile,
        "Payout run started"
    );

    let mut table = load_table(&options.payments_path)
        .await
        .map_err(EngineError::Load)?;
    let columns = PaymentColumns::resolve(table.headers(), options.profile)?;

    if columns.processed_code().is_none() {
        warn!("Sheet has no processed_code column; running it again will pay every row again");
    }

    let pending = columns.extract_pending(&table)?;
    let mut summary = RunSummary {
        total_rows: table.len(),
        pending_rows: pending.len(),
        ..Default::default()
    };
    if pending.is_empty() {
        info!(rows = summary.total_rows, "Nothing to process");
        return Ok(summary);
    }

    let payments = Validator::new(options.profile)
        .with_max_batch_size(options.max_batch_size)
        .validate(pending)?;
    let batches = partition(payments);
    summary.batches = batches.len();

    if options.dry_run {
        for batch in &batches {
            info!(batch_id = %batch.id, items = batch.len(), "Dry run, batch ready");
        }
        info!(batches = summary.batches, rows = summary.pending_rows, "Dry run finished");
        return Ok(summary);
    }

    let submitter = Submitter::new(connect().await?, options.templates.clone());
    let report = submitter.submit_all(&batches, cancel).await;
    summary.accepted = report.accepted_count();
    summary.rejected = report.rejected_count();
    summary.skipped = report.skipped_count();

    if columns.processed_code().is_some() {
        summary.rows_stamped = stamp(&mut table, &columns, &report);
        write_table(&options.payments_path, &table)
            .await
            .map_err(EngineError::Persist)?;
        summary.persisted = true;
    }

    info!(
        accepted = summary.accepted,
        rejected = summary.rejected,
        skipped = summary.skipped,
        rows_stamped = summary.rows_stamped,
        "Payout run finished"
    );

    Ok(summary)
}
