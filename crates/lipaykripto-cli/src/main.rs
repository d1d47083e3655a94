/*
[INPUT]:  CLI arguments, YAML configuration file, LIPAYKRIPTO_* environment
[OUTPUT]: Provider JSON response on stdout, logs on stderr
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, subcommands, or startup flow
*/

mod cli;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use lipaykripto_cli::{CliConfig, PaymentArgs, WithdrawArgs, run_payment, run_withdraw};
use lipaykripto_sdk::{CoinType, LipayClient};

#[derive(Parser, Debug)]
#[command(name = "lipaykripto-cli", version, about = "LiPayKripto payment and withdrawal client")]
struct Cli {
    #[arg(long = "config", value_name = "PATH", default_value = "lipaykripto.yaml")]
    config_path: PathBuf,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a payment request (fetches a fresh bearer token first)
    Payment {
        #[arg(long)]
        amount: Decimal,
        /// Payment reference; a UUID is generated when omitted
        #[arg(long = "payment-id")]
        payment_id: Option<String>,
        #[arg(long = "webhook-url")]
        webhook_url: String,
    },
    /// Create a signed withdrawal request
    Withdraw {
        #[arg(long)]
        amount: Decimal,
        /// Withdrawal reference; a UUID is generated when omitted
        #[arg(long = "request-id")]
        request_id: Option<String>,
        #[arg(long = "wallet-address")]
        wallet_address: String,
        /// TRX, USDT or ETH (any case)
        #[arg(long = "coin-type")]
        coin_type: CoinType,
        #[arg(long = "webhook-url")]
        webhook_url: String,
        /// ISO-8601 creation time; defaults to now (UTC)
        #[arg(long = "created-at")]
        created_at: Option<String>,
    },
    /// Validate the configuration without calling the provider
    Check,
    /// Interactively write a configuration file
    Init {
        #[arg(long, value_name = "PATH", default_value = "lipaykripto.yaml")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let output = match args.command {
        Command::Init { output } => return cli::init::run_init(output),
        Command::Check => {
            connect(&args.config_path)?;
            info!("configuration validated");
            return Ok(());
        }
        Command::Payment {
            amount,
            payment_id,
            webhook_url,
        } => {
            let client = connect(&args.config_path)?;
            run_payment(
                &client,
                PaymentArgs {
                    amount,
                    payment_id,
                    webhook_url,
                },
            )
            .await?
        }
        Command::Withdraw {
            amount,
            request_id,
            wallet_address,
            coin_type,
            webhook_url,
            created_at,
        } => {
            let client = connect(&args.config_path)?;
            run_withdraw(
                &client,
                WithdrawArgs {
                    amount,
                    request_id,
                    wallet_address,
                    coin_type,
                    webhook_url,
                    created_at,
                },
            )
            .await?
        }
    };

    println!(
        "{}",
        serde_json::to_string_pretty(&output).context("render response")?
    );
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn connect(config_path: &Path) -> Result<LipayClient> {
    info!(config_path = %config_path.display(), "loading configuration");
    let config = CliConfig::load(config_path).context("load config")?;
    let client = LipayClient::new(config.client_config()).context("build client")?;
    info!(base_url = client.base_url(), "client ready");
    Ok(client)
}
