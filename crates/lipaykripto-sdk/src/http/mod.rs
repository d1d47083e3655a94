/*
[INPUT]:  Client configuration and provider endpoints
[OUTPUT]: Provider responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod payment;
pub mod signature;
pub mod withdraw;

pub use error::{LipayError, Result, UNKNOWN_ERROR};
pub use signature::WithdrawSigner;

pub use client::{ClientConfig, DEFAULT_BASE_URL, LipayClient};
