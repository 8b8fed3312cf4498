//! Xendit CLI
//!
//! Command-line interface for the payment request and payout APIs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::de::DeserializeOwned;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use xendit_client::XenditClient;
use xendit_types::{DEFAULT_BASE_URL, PaymentRequestParams, PayoutParams, RequestHeaders};

#[derive(Parser)]
#[command(name = "xendit")]
#[command(author, version, about = "Xendit payments API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Xendit API
    #[arg(long, env = "XENDIT_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Secret API key
    #[arg(long, env = "XENDIT_API_KEY", hide_env_values = true)]
    api_key: String,

    #[command(flatten)]
    headers: HeaderArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Optional request headers, accepted by every command.
#[derive(Args)]
struct HeaderArgs {
    /// API version header
    #[arg(long, global = true)]
    api_version: Option<String>,

    /// Idempotency key for payout creation (defaults to the reference ID)
    #[arg(long, global = true)]
    idempotency_key: Option<String>,

    /// Sub-account to act on behalf of
    #[arg(long, global = true)]
    for_user_id: Option<String>,

    /// Split rule to apply
    #[arg(long, global = true)]
    with_split_rule: Option<String>,
}

impl From<HeaderArgs> for RequestHeaders {
    fn from(args: HeaderArgs) -> Self {
        RequestHeaders {
            api_version: args.api_version,
            idempotency_key: args.idempotency_key,
            for_user_id: args.for_user_id,
            with_split_rule: args.with_split_rule,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Payment request operations
    PaymentRequest {
        #[command(subcommand)]
        action: PaymentRequestCommands,
    },
    /// Payout operations
    Payout {
        #[command(subcommand)]
        action: PayoutCommands,
    },
}

#[derive(Subcommand)]
enum PaymentRequestCommands {
    /// Create a payment request from a JSON params file
    Create {
        #[arg(long)]
        params: PathBuf,
    },
    /// Get payment request details
    Get {
        /// Payment request ID (39 characters)
        id: String,
    },
}

#[derive(Subcommand)]
enum PayoutCommands {
    /// Create a payout from a JSON params file
    Create {
        #[arg(long)]
        params: PathBuf,
    },
    /// Get payout details
    Get {
        /// Payout ID (29 characters)
        id: String,
    },
    /// List payouts with the given reference ID
    ByReference {
        reference_id: String,
    },
}

fn read_params<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read params file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Invalid params in {}", path.display()))
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,xendit_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let client = XenditClient::new(cli.api_key).with_base_url(cli.base_url);
    let headers = RequestHeaders::from(cli.headers);

    tracing::debug!("Using API at {}", client.base_url());

    let response = match cli.command {
        Commands::PaymentRequest { action } => match action {
            PaymentRequestCommands::Create { params } => {
                let params: PaymentRequestParams = read_params(&params)?;
                client
                    .payment_requests()
                    .create_with_headers(&params, &headers)
                    .await?
            }
            PaymentRequestCommands::Get { id } => {
                client
                    .payment_requests()
                    .get_with_headers(&id, &headers)
                    .await?
            }
        },

        Commands::Payout { action } => match action {
            PayoutCommands::Create { params } => {
                let params: PayoutParams = read_params(&params)?;
                client
                    .payouts()
                    .create_with_headers(&params, &headers)
                    .await?
            }
            PayoutCommands::Get { id } => client.payouts().get_with_headers(&id, &headers).await?,
            PayoutCommands::ByReference { reference_id } => {
                client
                    .payouts()
                    .get_by_reference_id_with_headers(&reference_id, &headers)
                    .await?
            }
        },
    };

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
