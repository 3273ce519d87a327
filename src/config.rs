//! Build-time application configuration.
//!
//! DESIGN
//! ======
//! The API base URL and identity-provider client id are baked into the WASM
//! bundle at compile time and carried in an explicit `AppConfig` value that
//! pages hand to the sync layer. Nothing reads them from ambient globals at
//! runtime.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Immutable configuration for the remote API and identity provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Remote recipes API origin, without a trailing slash.
    pub api_base_url: String,
    /// Identity-provider app client id (part of the credential storage keys).
    pub client_id: String,
}

impl AppConfig {
    /// Read configuration injected at build time, with local-dev fallbacks.
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("RECIPEBOARD_API_URL").unwrap_or("http://127.0.0.1:8000"),
            option_env!("RECIPEBOARD_CLIENT_ID").unwrap_or("local-dev-client"),
        )
    }

    /// Build a config from explicit values, normalizing the base URL.
    pub fn new(api_base_url: &str, client_id: &str) -> Self {
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_owned(),
            client_id: client_id.to_owned(),
        }
    }
}
