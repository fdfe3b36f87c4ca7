//! Webhook signature verification.
//!
//! LINE signs every webhook delivery with
//! base64(HMAC-SHA256(channel secret, raw request body)) in the
//! `x-line-signature` header. The raw body bytes must be verified before
//! any JSON parsing.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the webhook signature.
pub const SIGNATURE_HEADER: &str = "x-line-signature";

/// Check a webhook body against its signature header value.
///
/// Returns false for malformed base64 as well as MAC mismatch; the
/// comparison itself is constant-time (`Mac::verify_slice`).
pub fn verify_signature(channel_secret: &str, body: &[u8], signature: &str) -> bool {
    let Ok(expected) = STANDARD.decode(signature) else {
        return false;
    };
    let mut mac = HmacSha256::new_from_slice(channel_secret.as_bytes())
        .expect("HMAC accepts any key length");
    mac.update(body);
    mac.verify_slice(&expected).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign(secret: &str, body: &[u8]) -> String {
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(body);
        STANDARD.encode(mac.finalize().into_bytes())
    }

    #[test]
    fn test_valid_signature_accepted() {
        let body = br#"{"events":[]}"#;
        let signature = sign("my-secret", body);
        assert!(verify_signature("my-secret", body, &signature));
    }

    #[test]
    fn test_tampered_body_rejected() {
        let signature = sign("my-secret", br#"{"events":[]}"#);
        assert!(!verify_signature("my-secret", br#"{"events":[{}]}"#, &signature));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let body = br#"{"events":[]}"#;
        let signature = sign("my-secret", body);
        assert!(!verify_signature("other-secret", body, &signature));
    }

    #[test]
    fn test_invalid_base64_rejected() {
        assert!(!verify_signature("my-secret", b"body", "not base64 !!!"));
    }

    #[test]
    fn test_empty_signature_rejected() {
        assert!(!verify_signature("my-secret", b"body", ""));
    }
}
