//! Authenticated request descriptors.
//!
//! DESIGN
//! ======
//! Every outbound call is described by a plain [`ApiRequest`] value before it
//! touches the network: method, absolute URL, the raw identity token, a fresh
//! correlation id, and an optional JSON body. The descriptor is pure data so
//! header construction and id uniqueness stay testable off the browser.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use uuid::Uuid;

/// Application constant prefixed onto every correlation id.
pub const CORRELATION_PREFIX: &str = "santi";

/// HTTP methods the recipes API is called with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// A fully described outbound request.
///
/// Redirect handling is left to the browser fetch default (follow); nothing
/// here suppresses it.
#[derive(Clone, Debug)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// Raw identity token, sent verbatim (no `Bearer` scheme).
    pub token: String,
    /// Fresh per-call trace id, `<prefix>-<uuid-v4>`.
    pub correlation_id: String,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// Describe a request, generating a new correlation id.
    pub fn new(method: Method, url: &str, token: &str, body: Option<serde_json::Value>) -> Self {
        Self {
            method,
            url: url.to_owned(),
            token: token.to_owned(),
            correlation_id: correlation_id(),
            body,
        }
    }

    /// Header set for this request.
    ///
    /// `Content-Type` is present only when a body is.
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let mut headers = vec![
            ("Authorization", self.token.clone()),
            ("Correlation-ID", self.correlation_id.clone()),
        ];
        if self.body.is_some() {
            headers.push(("Content-Type", "application/json".to_owned()));
        }
        headers
    }
}

/// Generate a fresh correlation id.
///
/// Uniqueness across calls carries v4-identifier collision probability; ids
/// are never reused even for otherwise identical requests.
pub fn correlation_id() -> String {
    format!("{CORRELATION_PREFIX}-{}", Uuid::new_v4())
}
