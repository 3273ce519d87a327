//! Session lookup and identity-token reads from credential storage.
//!
//! DESIGN
//! ======
//! Storage access goes through the `SessionProvider` trait so pages and the
//! sync layer can be exercised against an in-memory fake. The browser-backed
//! provider is hydrate-only and no-ops on the server, like the rest of the
//! localStorage glue in this crate.
//!
//! Token absence is an expected result communicated as `None`; it is distinct
//! from a malformed token, which surfaces later as a decode error.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::config::AppConfig;

/// Handle to the currently signed-in user, as recorded by the identity SDK.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// Identity-provider app client id.
    pub client_id: String,
    /// Username the provider stored the session under.
    pub username: String,
}

/// Read access to the external identity store.
pub trait SessionProvider {
    /// The current session, if a user is signed in.
    fn current(&self) -> Option<Session>;

    /// Raw value stored under `key` in the credential store.
    fn lookup(&self, key: &str) -> Option<String>;
}

/// Storage key holding the identity token for `username`.
pub fn id_token_key(client_id: &str, username: &str) -> String {
    format!("CognitoIdentityServiceProvider.{client_id}.{username}.idToken")
}

/// Storage key naming the most recently authenticated username.
pub fn last_auth_user_key(client_id: &str) -> String {
    format!("CognitoIdentityServiceProvider.{client_id}.LastAuthUser")
}

/// Read the current session's identity token from credential storage.
///
/// Returns `None` when no session exists or the token slot is empty. Reads
/// fresh on every call so an externally invalidated session is caught at the
/// next action boundary.
pub fn session_token<P: SessionProvider + ?Sized>(provider: &P) -> Option<String> {
    let session = provider.current()?;
    provider.lookup(&id_token_key(&session.client_id, &session.username))
}

/// Browser-backed provider reading the identity SDK's localStorage slots.
pub struct HostedSessionProvider {
    client_id: String,
}

impl HostedSessionProvider {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client_id: config.client_id.clone(),
        }
    }
}

impl SessionProvider for HostedSessionProvider {
    fn current(&self) -> Option<Session> {
        let username = self.lookup(&last_auth_user_key(&self.client_id))?;
        Some(Session {
            client_id: self.client_id.clone(),
            username,
        })
    }

    fn lookup(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }
}
