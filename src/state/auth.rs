//! Auth-identity state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Holds the claims decoded at the last action boundary. The token itself is
//! never stored here; every action re-reads credential storage so an
//! externally ended session is caught at the next boundary.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::auth::claims::Claims;

/// Identity state tracking the decoded claims of the signed-in user.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub identity: Option<Claims>,
}

impl AuthState {
    /// Email shown in the header and used to scope API calls; empty when no
    /// usable identity is present.
    pub fn email(&self) -> &str {
        self.identity.as_ref().map_or("", |claims| &claims.email)
    }

    /// Drop any displayed identity (malformed-token policy).
    pub fn clear(&mut self) {
        self.identity = None;
    }
}
