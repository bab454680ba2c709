use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use super::error::AppError;
use crate::api::templates::DEFAULT_PROGRAM;
use crate::api::{ClientConfig, Credentials, Environment, MessageTemplates};
use crate::domain::Profile;
use crate::engine::RunOptions;

/// Command-line arguments
///
/// Credential and environment flags fall back to environment variables,
/// which may also come from a `.env` file. Deliberately not `Debug`: it
/// holds the client secret.
#[derive(Parser)]
#[command(name = "payouts")]
#[command(about = "Send incentive payouts for every unprocessed row of a payment sheet")]
#[command(version)]
pub struct Args {
    /// Client id and secret, in that order; wins over the separate flags
    #[arg(long, num_args = 2, value_names = ["CLIENT_ID", "CLIENT_SECRET"])]
    pub auth: Option<Vec<String>>,

    /// API client id
    #[arg(long, env = "PAYPAL_CLIENT_ID")]
    pub client_id: Option<String>,

    /// API client secret
    #[arg(long, env = "PAYPAL_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: Option<String>,

    /// sandbox, production or live
    #[arg(long, env = "PAYPAL_ENVIRONMENT", default_value = "sandbox")]
    pub environment: Environment,

    /// Payment sheet (comma, semicolon, tab or pipe delimited)
    #[arg(long)]
    pub payments: PathBuf,

    /// strict or lenient sheet validation
    #[arg(long, default_value = "strict")]
    pub profile: Profile,

    /// Largest batch allowed (default: 500 strict, 250 lenient)
    #[arg(long)]
    pub max_batch_size: Option<usize>,

    /// Name used in the payout email subject
    #[arg(long, default_value = DEFAULT_PROGRAM)]
    pub program_name: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout_secs: u64,

    /// Override the API base URL
    #[arg(long, env = "PAYPAL_API_BASE_URL")]
    pub api_base_url: Option<String>,

    /// Validate and batch without calling the API or writing the sheet
    #[arg(long, default_value = "false")]
    pub dry_run: bool,

    /// More logging (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Validated settings for one run
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub client: ClientConfig,
    pub options: RunOptions,
}

impl RunConfig {
    pub fn from_args(args: Args) -> Result<Self, AppError> {
        let credentials = Self::credentials(&args)?;

        let max_batch_size = args
            .max_batch_size
            .unwrap_or_else(|| args.profile.default_max_batch_size());
        if max_batch_size == 0 {
            return Err(AppError::InvalidArguments(
                "--max-batch-size must be at least 1".to_string(),
            ));
        }
        if args.timeout_secs == 0 {
            return Err(AppError::InvalidArguments(
                "--timeout-secs must be at least 1".to_string(),
            ));
        }

        let mut client = ClientConfig::new(args.environment, credentials);
        client.base_url = args.api_base_url.filter(|url| !url.trim().is_empty());
        client.timeout = Duration::from_secs(args.timeout_secs);

        let options = RunOptions {
            payments_path: args.payments,
            profile: args.profile,
            max_batch_size,
            templates: MessageTemplates::for_profile(args.profile, args.program_name),
            dry_run: args.dry_run,
        };

        Ok(Self { client, options })
    }

    fn credentials(args: &Args) -> Result<Credentials, AppError> {
        if let Some([id, secret]) = args.auth.as_deref() {
            return Ok(Credentials::new(id.as_str(), secret.as_str()));
        }

        match (args.client_id.as_deref(), args.client_secret.as_deref()) {
            (Some(id), Some(secret)) if !id.is_empty() && !secret.is_empty() => {
                Ok(Credentials::new(id, secret))
            }
            _ => Err(AppError::InvalidArguments(
                "API credentials required: pass --auth CLIENT_ID CLIENT_SECRET or set \
                 PAYPAL_CLIENT_ID and PAYPAL_CLIENT_SECRET"
                    .to_string(),
            )),
        }
    }
}
