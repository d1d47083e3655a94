/*
[INPUT]:  Withdrawal amount, reference, wallet, coin, webhook and timestamp
[OUTPUT]: Provider withdrawal response
[POS]:    HTTP layer - withdrawal endpoint (HMAC in body, no bearer token)
[UPDATE]: When withdrawal flow or signature base changes
*/

use chrono::{SecondsFormat, Utc};
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::http::error::or_unknown;
use crate::http::{LipayClient, LipayError, Result};
use crate::types::{ApiResponse, CoinType, WithdrawalRequest};

pub(crate) const WITHDRAW_ENDPOINT: &str = "/withdraw";

impl LipayClient {
    /// Create a withdrawal request
    ///
    /// POST /withdraw
    /// Authenticated only by the HMAC-SHA256 signature in the body.
    pub async fn create_withdraw(
        &self,
        amount: Decimal,
        request_id: &str,
        wallet_address: &str,
        coin_type: CoinType,
        webhook_url: &str,
        created_at: &str,
    ) -> Result<ApiResponse> {
        let request = self.signed_withdrawal(
            amount,
            request_id,
            wallet_address,
            coin_type,
            webhook_url,
            created_at,
        );

        let value = self.api_request(WITHDRAW_ENDPOINT, &request, None).await?;
        let response = ApiResponse::from_value(value);

        if !response.is_success() {
            let message = or_unknown(response.error());
            warn!(request_id, %coin_type, %message, "withdrawal request rejected");
            return Err(LipayError::WithdrawalCreation { message });
        }

        info!(request_id, %coin_type, "withdrawal request created");
        Ok(response)
    }

    /// Same as [`create_withdraw`](Self::create_withdraw), stamped with the current UTC time
    pub async fn create_withdraw_now(
        &self,
        amount: Decimal,
        request_id: &str,
        wallet_address: &str,
        coin_type: CoinType,
        webhook_url: &str,
    ) -> Result<ApiResponse> {
        let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        self.create_withdraw(
            amount,
            request_id,
            wallet_address,
            coin_type,
            webhook_url,
            &created_at,
        )
        .await
    }

    /// Build and sign the withdrawal body without sending it
    pub fn signed_withdrawal(
        &self,
        amount: Decimal,
        request_id: &str,
        wallet_address: &str,
        coin_type: CoinType,
        webhook_url: &str,
        created_at: &str,
    ) -> WithdrawalRequest {
        let request = WithdrawalRequest::unsigned(
            amount,
            self.client_id(),
            request_id,
            wallet_address,
            coin_type,
            webhook_url,
            created_at,
        );
        self.signer().sign_withdrawal(request)
    }
}

#[cfg(test)]
mod tests {
    use crate::http::{ClientConfig, LipayClient};
    use crate::types::CoinType;
    use rust_decimal::Decimal;

    #[test]
    fn test_signed_withdrawal_uses_client_identity() {
        let client = LipayClient::new(ClientConfig::new("C1", "S3CR3T")).unwrap();
        let request = client.signed_withdrawal(
            Decimal::from(100),
            "R1",
            "0xabc",
            CoinType::Usdt,
            "https://h",
            "2024-01-01T00:00:00Z",
        );

        assert_eq!(request.client_id, "C1");
        assert_eq!(
            request.signature,
            "58489c872029b8ea271976e59afc8236090d3672e170453d28d101738bfea4bb"
        );
        assert!(client.signer().verify_withdrawal(&request));
    }
}
