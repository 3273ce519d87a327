use base64::Engine;
use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};

use super::*;

/// Build an unsigned compact token around `payload`.
pub fn token_with_payload(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
    format!("{header}.{body}.sig")
}

fn full_payload() -> serde_json::Value {
    serde_json::json!({
        "sub": "1f7c9e2a",
        "cognito:username": "carol",
        "email": "a@x.com",
        "name": "Carol Jones",
        "exp": 1_767_225_599_u64,
    })
}

#[test]
fn decode_claims_extracts_email_name_subject() {
    let claims = decode_claims(&token_with_payload(&full_payload())).expect("claims");
    assert_eq!(claims.email, "a@x.com");
    assert_eq!(claims.name, "Carol Jones");
    assert_eq!(claims.subject, "carol");
}

#[test]
fn decode_claims_is_deterministic() {
    let token = token_with_payload(&full_payload());
    let first = decode_claims(&token).expect("first");
    let second = decode_claims(&token).expect("second");
    assert_eq!(first, second);
}

#[test]
fn decode_claims_falls_back_to_sub_for_subject() {
    let mut payload = full_payload();
    payload.as_object_mut().unwrap().remove("cognito:username");
    let claims = decode_claims(&token_with_payload(&payload)).expect("claims");
    assert_eq!(claims.subject, "1f7c9e2a");
}

#[test]
fn decode_claims_accepts_padded_payload_segment() {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none"}"#);
    let body = URL_SAFE.encode(full_payload().to_string().as_bytes());
    let token = format!("{header}.{body}.sig");
    let claims = decode_claims(&token).expect("claims");
    assert_eq!(claims.email, "a@x.com");
}

#[test]
fn decode_claims_rejects_non_compact_input() {
    assert!(matches!(
        decode_claims("not-a-token"),
        Err(ClaimsError::NotCompact)
    ));
    assert!(matches!(
        decode_claims("a.b.c.d"),
        Err(ClaimsError::NotCompact)
    ));
}

#[test]
fn decode_claims_rejects_undecodable_payload() {
    assert!(matches!(
        decode_claims("aGVhZGVy.!!!.sig"),
        Err(ClaimsError::Base64(_))
    ));
}

#[test]
fn decode_claims_rejects_non_json_payload() {
    let body = URL_SAFE_NO_PAD.encode(b"plain text");
    let token = format!("h.{body}.s");
    assert!(matches!(decode_claims(&token), Err(ClaimsError::Json(_))));
}

#[test]
fn decode_claims_requires_email_and_name() {
    let mut payload = full_payload();
    payload.as_object_mut().unwrap().remove("email");
    assert!(matches!(
        decode_claims(&token_with_payload(&payload)),
        Err(ClaimsError::MissingClaim("email"))
    ));

    let mut payload = full_payload();
    payload.as_object_mut().unwrap().remove("name");
    assert!(matches!(
        decode_claims(&token_with_payload(&payload)),
        Err(ClaimsError::MissingClaim("name"))
    ));
}

#[test]
fn decode_claims_requires_some_subject() {
    let mut payload = full_payload();
    payload.as_object_mut().unwrap().remove("cognito:username");
    payload.as_object_mut().unwrap().remove("sub");
    assert!(matches!(
        decode_claims(&token_with_payload(&payload)),
        Err(ClaimsError::MissingClaim("sub"))
    ));
}
