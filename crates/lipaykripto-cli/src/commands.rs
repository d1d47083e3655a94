/*
[INPUT]:  Parsed command arguments and a configured SDK client
[OUTPUT]: Provider JSON responses for payment and withdrawal commands
[POS]:    Command layer - maps CLI commands onto SDK operations
[UPDATE]: When adding commands or changing SDK call signatures
*/

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use lipaykripto_sdk::{CoinType, LipayClient};

/// Arguments of the `payment` command
#[derive(Debug, Clone)]
pub struct PaymentArgs {
    pub amount: Decimal,
    pub payment_id: Option<String>,
    pub webhook_url: String,
}

/// Arguments of the `withdraw` command
#[derive(Debug, Clone)]
pub struct WithdrawArgs {
    pub amount: Decimal,
    pub request_id: Option<String>,
    pub wallet_address: String,
    pub coin_type: CoinType,
    pub webhook_url: String,
    pub created_at: Option<String>,
}

fn reference_or_new(reference: Option<String>) -> String {
    reference.unwrap_or_else(|| Uuid::new_v4().to_string())
}

pub async fn run_payment(client: &LipayClient, args: PaymentArgs) -> Result<Value> {
    let payment_id = reference_or_new(args.payment_id);
    info!(%payment_id, amount = %args.amount, "creating payment request");

    let response = client
        .create_payment(args.amount, &payment_id, &args.webhook_url)
        .await
        .with_context(|| format!("create payment {payment_id}"))?;
    Ok(response.into_value())
}

pub async fn run_withdraw(client: &LipayClient, args: WithdrawArgs) -> Result<Value> {
    let request_id = reference_or_new(args.request_id);
    info!(
        %request_id,
        amount = %args.amount,
        coin_type = %args.coin_type,
        "creating withdrawal request"
    );

    let response = match args.created_at {
        Some(created_at) => {
            client
                .create_withdraw(
                    args.amount,
                    &request_id,
                    &args.wallet_address,
                    args.coin_type,
                    &args.webhook_url,
                    &created_at,
                )
                .await
        }
        None => {
            client
                .create_withdraw_now(
                    args.amount,
                    &request_id,
                    &args.wallet_address,
                    args.coin_type,
                    &args.webhook_url,
                )
                .await
        }
    }
    .with_context(|| format!("create withdrawal {request_id}"))?;
    Ok(response.into_value())
}
