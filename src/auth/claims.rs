//! Identity-token payload decoding.
//!
//! The token is decoded without signature verification: claims feed local UI
//! state and request scoping only, never an authorization decision. The
//! remote API re-validates the token on every call.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use base64::Engine;
use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};

/// Claims extracted from an identity token's payload segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Claims {
    /// Email address the recipe list is scoped to.
    pub email: String,
    /// Display name for the header.
    pub name: String,
    /// Provider username the session is keyed under.
    pub subject: String,
}

/// Ways a token can fail to yield usable claims.
///
/// Callers treat every variant the same: no usable identity, clear whatever
/// identity is displayed and halt the current action.
#[derive(Debug, thiserror::Error)]
pub enum ClaimsError {
    #[error("token is not in compact three-segment form")]
    NotCompact,
    #[error("payload segment is not valid base64url: {0}")]
    Base64(String),
    #[error("payload is not a JSON object: {0}")]
    Json(String),
    #[error("payload is missing required claim `{0}`")]
    MissingClaim(&'static str),
}

/// Decode the payload segment of `token` into [`Claims`].
///
/// Deterministic: the same token always yields the same claims. No caching —
/// each action re-decodes so expiry-driven token swaps are picked up.
pub fn decode_claims(token: &str) -> Result<Claims, ClaimsError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(ClaimsError::NotCompact);
    }

    let bytes = decode_segment(segments[1])?;
    let payload: serde_json::Value =
        serde_json::from_slice(&bytes).map_err(|e| ClaimsError::Json(e.to_string()))?;
    if !payload.is_object() {
        return Err(ClaimsError::Json("payload is not an object".to_owned()));
    }

    let email = required_claim(&payload, "email")?;
    let name = required_claim(&payload, "name")?;
    let subject = payload
        .get("cognito:username")
        .and_then(serde_json::Value::as_str)
        .or_else(|| payload.get("sub").and_then(serde_json::Value::as_str))
        .map(ToOwned::to_owned)
        .ok_or(ClaimsError::MissingClaim("sub"))?;

    Ok(Claims {
        email,
        name,
        subject,
    })
}

/// Decode one base64url segment, accepting both unpadded and padded forms.
fn decode_segment(segment: &str) -> Result<Vec<u8>, ClaimsError> {
    URL_SAFE_NO_PAD
        .decode(segment)
        .or_else(|_| URL_SAFE.decode(segment))
        .map_err(|e| ClaimsError::Base64(e.to_string()))
}

fn required_claim(payload: &serde_json::Value, name: &'static str) -> Result<String, ClaimsError> {
    payload
        .get(name)
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
        .ok_or(ClaimsError::MissingClaim(name))
}
