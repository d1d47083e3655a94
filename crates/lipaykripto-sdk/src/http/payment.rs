/*
[INPUT]:  Payment amount, reference and webhook URL
[OUTPUT]: Provider payment response
[POS]:    HTTP layer - payment endpoint (token, then bearer-authenticated request)
[UPDATE]: When payment flow or endpoints change
*/

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::http::error::or_unknown;
use crate::http::{LipayClient, LipayError, Result};
use crate::types::{ApiResponse, PaymentRequest, TokenRequest, TokenResponse};

pub(crate) const TOKEN_ENDPOINT: &str = "/auth/token";
pub(crate) const PAYMENT_ENDPOINT: &str = "/external-payment-request";

impl LipayClient {
    /// Create a payment request
    ///
    /// POST /auth/token, then POST /external-payment-request with the fresh
    /// token as bearer. Tokens are never reused across calls.
    pub async fn create_payment(
        &self,
        amount: Decimal,
        payment_id: &str,
        webhook_url: &str,
    ) -> Result<ApiResponse> {
        let token = self.acquire_token().await?;

        let request = PaymentRequest {
            try_amount: amount,
            payment_id: payment_id.to_string(),
            webhook_url: webhook_url.to_string(),
        };
        let value = self
            .api_request(PAYMENT_ENDPOINT, &request, Some(token.as_str()))
            .await?;
        let response = ApiResponse::from_value(value);

        if !response.is_success() {
            let message = or_unknown(response.error());
            warn!(payment_id, %message, "payment request rejected");
            return Err(LipayError::PaymentCreation { message });
        }

        info!(payment_id, "payment request created");
        Ok(response)
    }

    async fn acquire_token(&self) -> Result<String> {
        let request = TokenRequest {
            client_id: self.config().client_id.clone(),
            client_secret: self.config().client_secret.clone(),
        };
        let value = self.api_request(TOKEN_ENDPOINT, &request, None).await?;
        let response = TokenResponse::from_value(value);

        response.into_token().map_err(|error| {
            let message = or_unknown(error);
            warn!(%message, "token acquisition failed");
            LipayError::TokenAcquisition { message }
        })
    }
}
