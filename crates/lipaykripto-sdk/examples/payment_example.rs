/*
[INPUT]:  Client credentials from the environment
[OUTPUT]: Payment and withdrawal request results
[POS]:    Examples - payment and withdrawal operations
[UPDATE]: When payment or withdrawal API changes
*/

use lipaykripto_sdk::*;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Example: create a payment, then a signed withdrawal
///
/// Requires LIPAYKRIPTO_CLIENT_ID and LIPAYKRIPTO_CLIENT_SECRET.
#[tokio::main]
async fn main() {
    println!("=== LiPayKripto Payment Example ===\n");

    let (client_id, client_secret) = match (
        std::env::var("LIPAYKRIPTO_CLIENT_ID"),
        std::env::var("LIPAYKRIPTO_CLIENT_SECRET"),
    ) {
        (Ok(id), Ok(secret)) => (id, secret),
        _ => {
            eprintln!("Set LIPAYKRIPTO_CLIENT_ID and LIPAYKRIPTO_CLIENT_SECRET first");
            return;
        }
    };

    let client = match LipayClient::new(ClientConfig::new(client_id, client_secret)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created for {}", client.base_url());

    let amount = Decimal::from_str("100.00").unwrap_or_default();
    match client
        .create_payment(amount, "ORDER123", "https://example.com/webhook")
        .await
    {
        Ok(payment) => println!("✓ Payment created: {}", payment.to_value()),
        Err(e) => eprintln!("✗ Payment failed: {}", e),
    }

    // The withdrawal body can be inspected before it is sent.
    let preview = client.signed_withdrawal(
        Decimal::from(50),
        "WD-1",
        "TXYZwallet",
        CoinType::Usdt,
        "https://example.com/webhook",
        "2024-01-01T00:00:00Z",
    );
    println!("\nSignature base: {}", preview.signature_base());
    println!("Signature:      {}", preview.signature);

    match client
        .create_withdraw_now(
            Decimal::from(50),
            "WD-1",
            "TXYZwallet",
            CoinType::Usdt,
            "https://example.com/webhook",
        )
        .await
    {
        Ok(withdrawal) => println!("✓ Withdrawal created: {}", withdrawal.to_value()),
        Err(e) if e.is_provider_rejection() => eprintln!("✗ Provider refused: {}", e),
        Err(e) => eprintln!("✗ Request failed: {}", e),
    }
}
