/*
[INPUT]:  Decimal amounts in currency units
[OUTPUT]: Canonical amount text and JSON number serialization
[POS]:    Data layer - amount rendering shared by signing and request bodies
[UPDATE]: When amount formatting rules change
*/

//! Amounts are rendered once and used twice: inside the withdrawal signature
//! base string and as the JSON number in request bodies. Both go through
//! [`canonical`] so the provider recomputes the same signature.

use rust_decimal::Decimal;
use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use serde_json::value::RawValue;

/// Normalized decimal text, e.g. `100.50` -> `100.5`, `100` -> `100`
pub fn canonical(amount: &Decimal) -> String {
    amount.normalize().to_string()
}

/// Serialize an amount as a bare JSON number with the canonical text
pub fn serialize<S>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let raw = RawValue::from_string(canonical(amount)).map_err(S::Error::custom)?;
    raw.serialize(serializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[derive(Serialize)]
    struct Wrapper {
        #[serde(serialize_with = "serialize")]
        amount: Decimal,
    }

    #[test]
    fn test_canonical_strips_trailing_zeros() {
        assert_eq!(canonical(&Decimal::from(100)), "100");
        assert_eq!(canonical(&Decimal::from_str("100.50").unwrap()), "100.5");
        assert_eq!(canonical(&Decimal::from_str("100.00").unwrap()), "100");
        assert_eq!(canonical(&Decimal::from_str("0.0001").unwrap()), "0.0001");
    }

    #[test]
    fn test_serialize_as_json_number() {
        let json = serde_json::to_string(&Wrapper {
            amount: Decimal::from_str("250.50").unwrap(),
        })
        .unwrap();
        assert_eq!(json, r#"{"amount":250.5}"#);

        let json = serde_json::to_string(&Wrapper {
            amount: Decimal::from(100),
        })
        .unwrap();
        assert_eq!(json, r#"{"amount":100}"#);
    }

    #[test]
    fn test_large_amount_keeps_every_digit() {
        let amount = Decimal::from_str("123456789012345678.25").unwrap();
        let json = serde_json::to_string(&Wrapper { amount }).unwrap();
        assert_eq!(json, r#"{"amount":123456789012345678.25}"#);
    }
}
