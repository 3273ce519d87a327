//! Identity resolution at action boundaries.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use crate::auth::claims::{Claims, ClaimsError, decode_claims};
use crate::auth::session::{SessionProvider, session_token};
use crate::net::api::ApiError;

/// Token and claims resolved for exactly one action.
///
/// Never cached across actions: a session invalidated mid-session is caught
/// at the next boundary at the cost of a repeated decode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub token: String,
    pub claims: Claims,
}

/// Failure modes of one synchronizer action.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// No active session or no stored token; the view navigates away.
    #[error("no active session")]
    NoSession,
    /// Token present but unusable; identity is cleared, nothing is sent.
    #[error("identity token is malformed: {0}")]
    MalformedToken(#[from] ClaimsError),
    /// The request was sent and failed; local state stays last-known-good.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Resolve the current identity from credential storage.
///
/// Absence of a session and absence of a stored token collapse into
/// [`SyncError::NoSession`]; a stored but undecodable token is
/// [`SyncError::MalformedToken`]. No network is touched either way.
pub fn resolve_identity<P: SessionProvider + ?Sized>(provider: &P) -> Result<Identity, SyncError> {
    let token = session_token(provider).ok_or(SyncError::NoSession)?;
    let claims = decode_claims(&token)?;
    Ok(Identity { token, claims })
}
