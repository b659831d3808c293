// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session token decoding without signature verification.
//!
//! The client never holds the signing secret, so "valid" here means
//! well-formed and unexpired — never authentic. Only the payload segment
//! is inspected; the signature segment is carried around opaquely and
//! checked server-side on every API call.
//!
//! [`is_expired`] is the single expiry authority: no other module reads
//! the `exp` claim directly.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::models::Role;

/// Payload claims of a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user document ID)
    pub id: String,
    /// Role used for route gating
    pub role: Role,
    /// Issued at (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Decode the payload segment of a session token.
///
/// Returns `None` on any malformed input: wrong segment count, invalid
/// base64url, or JSON that doesn't match [`Claims`]. An undecodable token
/// is treated identically to an absent one everywhere downstream.
pub fn decode(token: &str) -> Option<Claims> {
    let mut segments = token.split('.');
    let payload = match (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) {
        (Some(_header), Some(payload), Some(_signature), None) => payload,
        _ => return None,
    };

    // Issued tokens are unpadded base64url; tolerate padded ones too.
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Whether a token is expired, against the current wall clock.
///
/// An undecodable token counts as expired.
pub fn is_expired(token: &str) -> bool {
    is_expired_at(token, now_epoch())
}

/// Whether a token is expired at the given epoch-seconds instant.
///
/// A token is current only while `exp` is strictly in the future.
pub fn is_expired_at(token: &str, now: u64) -> bool {
    match decode(token) {
        Some(claims) => claims.exp <= now,
        None => true,
    }
}

/// Current wall clock as epoch seconds.
pub fn now_epoch() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_token(payload: &str) -> String {
        format!(
            "{}.{}.{}",
            URL_SAFE_NO_PAD.encode(b"{\"alg\":\"HS256\",\"typ\":\"JWT\"}"),
            URL_SAFE_NO_PAD.encode(payload.as_bytes()),
            URL_SAFE_NO_PAD.encode(b"signature")
        )
    }

    #[test]
    fn test_decode_valid_payload() {
        let token =
            make_token(r#"{"id":"u1","role":"student","iat":1700000000,"exp":1700000100}"#);

        let claims = decode(&token).expect("token should decode");
        assert_eq!(claims.id, "u1");
        assert_eq!(claims.role, Role::Student);
        assert_eq!(claims.iat, 1_700_000_000);
        assert_eq!(claims.exp, 1_700_000_100);
    }

    #[test]
    fn test_decode_tolerates_padded_base64() {
        let payload = r#"{"id":"u1","role":"admin","iat":1,"exp":2}"#;
        let mut middle = URL_SAFE_NO_PAD.encode(payload.as_bytes());
        while middle.len() % 4 != 0 {
            middle.push('=');
        }
        let token = format!("h.{middle}.s");

        assert!(decode(&token).is_some());
    }

    #[test]
    fn test_decode_rejects_wrong_segment_count() {
        let payload = URL_SAFE_NO_PAD
            .encode(br#"{"id":"u1","role":"admin","iat":1,"exp":2}"#);

        assert_eq!(decode(""), None);
        assert_eq!(decode("only-one-segment"), None);
        assert_eq!(decode(&format!("h.{payload}")), None);
        assert_eq!(decode(&format!("h.{payload}.s.extra")), None);
    }

    #[test]
    fn test_decode_rejects_bad_base64_and_json() {
        // '!' is outside the base64url alphabet
        assert_eq!(decode("h.!!!.s"), None);
        // valid base64, not JSON
        let token = format!("h.{}.s", URL_SAFE_NO_PAD.encode(b"not json"));
        assert_eq!(decode(&token), None);
    }

    #[test]
    fn test_decode_rejects_unknown_role() {
        let token = make_token(r#"{"id":"u1","role":"superuser","iat":1,"exp":2}"#);
        assert_eq!(decode(&token), None);
    }

    #[test]
    fn test_expiry_boundary() {
        let now = 1_700_000_000u64;
        let current = make_token(&format!(
            r#"{{"id":"u1","role":"student","iat":1,"exp":{}}}"#,
            now + 1
        ));
        let boundary = make_token(&format!(
            r#"{{"id":"u1","role":"student","iat":1,"exp":{now}}}"#
        ));
        let stale = make_token(&format!(
            r#"{{"id":"u1","role":"student","iat":1,"exp":{}}}"#,
            now - 1
        ));

        assert!(!is_expired_at(&current, now));
        // exp == now is already expired: "current" requires exp strictly ahead
        assert!(is_expired_at(&boundary, now));
        assert!(is_expired_at(&stale, now));
    }

    #[test]
    fn test_undecodable_counts_as_expired() {
        assert!(is_expired_at("garbage", 0));
        assert!(is_expired("not.a.token"));
    }
}
