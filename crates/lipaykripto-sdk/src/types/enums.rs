/*
[INPUT]:  Provider API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::http::LipayError;

/// Coin a withdrawal is paid out in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CoinType {
    Trx,
    Usdt,
    Eth,
}

impl CoinType {
    pub const ALL: [CoinType; 3] = [CoinType::Trx, CoinType::Usdt, CoinType::Eth];

    /// Upper-case wire form
    pub const fn as_str(&self) -> &'static str {
        match self {
            CoinType::Trx => "TRX",
            CoinType::Usdt => "USDT",
            CoinType::Eth => "ETH",
        }
    }
}

impl fmt::Display for CoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CoinType {
    type Err = LipayError;

    /// Case-insensitive: "usdt", "Usdt" and "USDT" all parse to `Usdt`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        CoinType::ALL
            .into_iter()
            .find(|coin| coin.as_str() == upper)
            .ok_or_else(|| LipayError::InvalidCoinType(s.to_string()))
    }
}
