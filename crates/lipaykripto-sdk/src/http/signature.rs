/*
[INPUT]:  Withdrawal fields and the client secret
[OUTPUT]: Lowercase hex HMAC-SHA256 signature for the withdrawal body
[POS]:    HTTP layer - request signing for the withdrawal endpoint
[UPDATE]: When changing signing algorithm or signature base format
*/

use std::fmt;

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::http::{LipayError, Result};
use crate::types::WithdrawalRequest;

type HmacSha256 = Hmac<Sha256>;

/// Signs withdrawal bodies with the client secret
#[derive(Clone)]
pub struct WithdrawSigner {
    mac: HmacSha256,
}

impl fmt::Debug for WithdrawSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WithdrawSigner").finish_non_exhaustive()
    }
}

impl WithdrawSigner {
    /// Create a signer keyed by the client secret
    pub fn new(secret: &str) -> Result<Self> {
        let mac = HmacSha256::new_from_slice(secret.as_bytes())
            .map_err(|e| LipayError::Config(format!("invalid HMAC key: {e}")))?;
        Ok(Self { mac })
    }

    /// HMAC-SHA256 of `message`, lowercase hex
    pub fn sign(&self, message: &str) -> String {
        let mut mac = self.mac.clone();
        mac.update(message.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Fill in the signature of a withdrawal body
    pub fn sign_withdrawal(&self, mut request: WithdrawalRequest) -> WithdrawalRequest {
        request.signature = self.sign(&request.signature_base());
        request
    }

    /// Constant-time check of a hex signature over `message`
    pub fn verify(&self, message: &str, signature: &str) -> bool {
        let Ok(expected) = hex::decode(signature) else {
            return false;
        };
        let mut mac = self.mac.clone();
        mac.update(message.as_bytes());
        mac.verify_slice(&expected).is_ok()
    }

    /// Check the signature carried by a withdrawal body
    pub fn verify_withdrawal(&self, request: &WithdrawalRequest) -> bool {
        self.verify(&request.signature_base(), &request.signature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CoinType;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    const SCENARIO_BASE: &str = "100C1R10xabcUSDThttps://h2024-01-01T00:00:00Z";

    fn withdrawal(coin: &str) -> WithdrawalRequest {
        WithdrawalRequest::unsigned(
            Decimal::from(100),
            "C1",
            "R1",
            "0xabc",
            coin.parse().unwrap(),
            "https://h",
            "2024-01-01T00:00:00Z",
        )
    }

    #[test]
    fn test_sign_known_vector() {
        let signer = WithdrawSigner::new("S3CR3T").unwrap();
        assert_eq!(
            signer.sign(SCENARIO_BASE),
            "58489c872029b8ea271976e59afc8236090d3672e170453d28d101738bfea4bb"
        );
    }

    #[rstest]
    #[case("usdt")]
    #[case("USDT")]
    #[case("Usdt")]
    #[case("uSdT")]
    fn test_coin_case_does_not_change_signature(#[case] coin: &str) {
        let signer = WithdrawSigner::new("test-secret").unwrap();
        let signed = signer.sign_withdrawal(withdrawal(coin));

        assert_eq!(signed.coin_type, CoinType::Usdt);
        assert_eq!(signed.signature_base(), SCENARIO_BASE);
        assert_eq!(
            signed.signature,
            "31433381b2fa8ec9cfc73c8fea244085e84cd3f46460f5b4815201d6e4030ca9"
        );
    }

    #[test]
    fn test_fractional_amount_vector() {
        let signer = WithdrawSigner::new("test-secret").unwrap();
        let request = WithdrawalRequest::unsigned(
            Decimal::from_str("250.50").unwrap(),
            "client-1",
            "req-42",
            "TXYZwallet",
            CoinType::Trx,
            "https://merchant.example/hook",
            "2024-05-06T07:08:09Z",
        );
        let signed = signer.sign_withdrawal(request);
        assert_eq!(
            signed.signature,
            "5a42edbeaeba5dd302455f124abe6b9caca6eae37643b4871b8a455ff02b5faa"
        );
    }

    #[test]
    fn test_signature_is_lowercase_hex() {
        let signer = WithdrawSigner::new("test-secret").unwrap();
        let signature = signer.sign("payload");
        assert_eq!(signature.len(), 64);
        assert!(
            signature
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        );
    }

    #[test]
    fn test_verify() {
        let signer = WithdrawSigner::new("test-secret").unwrap();
        let signed = signer.sign_withdrawal(withdrawal("eth"));
        assert!(signer.verify_withdrawal(&signed));

        let mut tampered = signed.clone();
        tampered.wallet_address = "0xdef".to_string();
        assert!(!signer.verify_withdrawal(&tampered));

        let other = WithdrawSigner::new("other-secret").unwrap();
        assert!(!other.verify_withdrawal(&signed));

        assert!(!signer.verify("payload", "not-hex-zz"));
    }

    #[test]
    fn test_debug_hides_key() {
        let signer = WithdrawSigner::new("test-secret").unwrap();
        assert!(!format!("{signer:?}").contains("test-secret"));
    }
}
