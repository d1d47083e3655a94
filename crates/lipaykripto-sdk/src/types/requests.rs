/*
[INPUT]:  Provider API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use super::amount;
use super::enums::CoinType;

/// Body of `POST /auth/token`
#[derive(Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    pub client_id: String,
    pub client_secret: String,
}

impl fmt::Debug for TokenRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenRequest")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Body of `POST /external-payment-request` (camelCase schema)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    #[serde(serialize_with = "amount::serialize")]
    pub try_amount: Decimal,
    pub payment_id: String,
    pub webhook_url: String,
}

/// Body of `POST /withdraw`
///
/// The provider's withdrawal schema mixes snake_case amount/wallet/coin/webhook
/// fields with camelCase `clientId`/`requestId`; both are kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WithdrawalRequest {
    #[serde(serialize_with = "amount::serialize")]
    pub try_amount: Decimal,
    #[serde(rename = "clientId")]
    pub client_id: String,
    #[serde(rename = "requestId")]
    pub request_id: String,
    pub wallet_address: String,
    pub coin_type: CoinType,
    pub webhook_url: String,
    /// ISO-8601 creation time, signed verbatim
    pub created_at: String,
    /// Lowercase hex HMAC-SHA256, empty until signed
    pub signature: String,
}

impl WithdrawalRequest {
    /// Build an unsigned withdrawal body
    pub fn unsigned(
        try_amount: Decimal,
        client_id: impl Into<String>,
        request_id: impl Into<String>,
        wallet_address: impl Into<String>,
        coin_type: CoinType,
        webhook_url: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            try_amount,
            client_id: client_id.into(),
            request_id: request_id.into(),
            wallet_address: wallet_address.into(),
            coin_type,
            webhook_url: webhook_url.into(),
            created_at: created_at.into(),
            signature: String::new(),
        }
    }

    /// Concatenation the signature is computed over
    ///
    /// Order: amount, clientId, requestId, wallet, coin, webhook, createdAt.
    /// No delimiters. The `signature` field never takes part.
    pub fn signature_base(&self) -> String {
        format!(
            "{}{}{}{}{}{}{}",
            amount::canonical(&self.try_amount),
            self.client_id,
            self.request_id,
            self.wallet_address,
            self.coin_type,
            self.webhook_url,
            self.created_at
        )
    }

    pub fn is_signed(&self) -> bool {
        !self.signature.is_empty()
    }
}
