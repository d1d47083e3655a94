/*
[INPUT]:  Error sources (provider rejections, HTTP status, transport, decoding)
[OUTPUT]: Structured error type with provider messages and status codes
[POS]:    Error handling layer - unified error type for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;

/// Text used when the provider gives no usable error message
pub const UNKNOWN_ERROR: &str = "unknown error";

/// Main error type for the LiPayKripto SDK
#[derive(Error, Debug)]
pub enum LipayError {
    /// Token endpoint answered without a token
    #[error("Token acquisition failed: {message}")]
    TokenAcquisition { message: String },

    /// Payment endpoint answered without `success: true`
    #[error("Payment request creation failed: {message}")]
    PaymentCreation { message: String },

    /// Withdrawal endpoint answered without `success: true`
    #[error("Withdrawal request creation failed: {message}")]
    WithdrawalCreation { message: String },

    /// Provider returned a non-success HTTP status
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// Transport or decoding fault
    #[error("API request failed: {message}")]
    RequestFailed { message: String },

    /// Coin type outside TRX / USDT / ETH
    #[error("Invalid coin type: {0}")]
    InvalidCoinType(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LipayError {
    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        LipayError::Api {
            status: status.as_u16(),
            message: message.into(),
        }
    }

    /// Wrap any lower-level fault into `RequestFailed`
    pub fn request_failed(err: impl std::fmt::Display) -> Self {
        LipayError::RequestFailed {
            message: err.to_string(),
        }
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            LipayError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if the provider answered but refused the operation
    pub fn is_provider_rejection(&self) -> bool {
        matches!(
            self,
            LipayError::TokenAcquisition { .. }
                | LipayError::PaymentCreation { .. }
                | LipayError::WithdrawalCreation { .. }
                | LipayError::Api { .. }
        )
    }
}

impl From<reqwest::Error> for LipayError {
    fn from(err: reqwest::Error) -> Self {
        debug!(
            timeout = err.is_timeout(),
            connect = err.is_connect(),
            decode = err.is_decode(),
            "transport fault"
        );
        LipayError::request_failed(err)
    }
}

impl From<serde_json::Error> for LipayError {
    fn from(err: serde_json::Error) -> Self {
        debug!(category = ?err.classify(), "response decode fault");
        LipayError::request_failed(err)
    }
}

/// Use the provider's text unless it is missing or empty
pub(crate) fn or_unknown(message: Option<String>) -> String {
    message
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| UNKNOWN_ERROR.to_string())
}

/// Result type alias for LiPayKripto operations
pub type Result<T> = std::result::Result<T, LipayError>;
