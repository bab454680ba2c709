use std::process::ExitCode;

use clap::Parser;
use tracing::warn;

use payouts::app::logging;
use payouts::engine;
use payouts::prelude::*;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Before parsing so `.env` values can back env-aware flags
    dotenvy::dotenv().ok();

    let args = match Args::try_parse() {
        Ok(args) => args,
        // --help and --version
        Err(e) if !e.use_stderr() => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };
    let _guard = logging::init(args.verbose);

    let code = CliApp::new("payouts")
        .run(|cancel| run_payouts(args, cancel))
        .await;

    ExitCode::from(code)
}

/// Main application logic - one payout pass over the sheet
async fn run_payouts(args: Args, cancel: CancellationToken) -> Result<(), AppError> {
    let config = RunConfig::from_args(args)?;

    let summary = engine::run(
        &config.options,
        || PaypalClient::connect(&config.client),
        &cancel,
    )
    .await?;

    if !summary.is_complete() {
        warn!(
            rejected = summary.rejected,
            skipped = summary.skipped,
            "Some batches were not paid; run again to retry them"
        );
    }

    Ok(())
}
