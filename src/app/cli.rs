use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use tokio_util::sync::CancellationToken;
use tracing::warn;

use super::error::AppError;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Reusable CLI application runner that handles:
/// - Signal handling (SIGINT, SIGTERM, SIGHUP)
/// - Exit codes (0 = success, 1 = error, 130 = SIGINT, 143 = SIGTERM)
/// - Graceful shutdown: a signal cancels the token handed to the main
///   function, which is left to finish and record what it already did
pub struct CliApp {
    name: String,
}

impl CliApp {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the main function to completion and return the process exit code
    ///
    /// The main future is never dropped mid-way: an interrupted run still
    /// persists its results, then exits with the signal's code.
    pub async fn run<F, Fut>(self, main_fn: F) -> u8
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = Result<(), AppError>>,
    {
        let cancel = CancellationToken::new();
        let signal_code = Arc::new(AtomicU8::new(EXIT_SUCCESS));

        let watcher = tokio::spawn(watch_signals(cancel.clone(), signal_code.clone()));
        let result = main_fn(cancel).await;
        watcher.abort();

        match result {
            Err(e) => {
                eprintln!("{}: error: {}", self.name, e);
                EXIT_FAILURE
            }
            Ok(()) => signal_code.load(Ordering::SeqCst),
        }
    }
}

async fn watch_signals(cancel: CancellationToken, signal_code: Arc<AtomicU8>) {
    match wait_for_signal().await {
        Ok(code) => {
            warn!(code, "Interrupted, finishing the current batch and saving progress");
            signal_code.store(code, Ordering::SeqCst);
            cancel.cancel();
        }
        Err(e) => warn!(error = %e, "Signal handlers unavailable; interrupts will not be graceful"),
    }
}

/// Wait for any Unix signal (SIGINT, SIGTERM, SIGHUP) or Ctrl+C
/// Returns the exit code to use (130 for SIGINT, 143 for SIGTERM, etc.)
async fn wait_for_signal() -> std::io::Result<u8> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut sigterm = signal(SignalKind::terminate())?;
        let mut sigint = signal(SignalKind::interrupt())?;
        let mut sighup = signal(SignalKind::hangup())?;

        let code = tokio::select! {
            _ = sigterm.recv() => 143, // 128 + 15
            _ = sigint.recv() => 130,  // 128 + 2
            _ = sighup.recv() => 129,  // 128 + 1
        };
        Ok(code)
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await?;
        Ok(130)
    }
}
