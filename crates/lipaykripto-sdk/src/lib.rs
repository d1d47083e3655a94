/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public LiPayKripto SDK crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    DEFAULT_BASE_URL,
    LipayClient,
    LipayError,
    Result,
    UNKNOWN_ERROR,
    WithdrawSigner,
};

// Re-export all types
pub use types::*;
