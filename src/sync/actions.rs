//! Synchronizer actions and their shared boundary policy.
//!
//! DESIGN
//! ======
//! Mount, create, update, and delete all start from the same decision: read
//! storage, decode, and either proceed, clear the displayed identity, or
//! send the user back to the entry page. Centralizing the mapping keeps the
//! no-session/malformed-token policy identical at every boundary. The
//! operations themselves return typed results; how loudly a failure is
//! surfaced is the view's choice, not decided here.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use super::identity::{Identity, SyncError, resolve_identity};
use crate::auth::session::SessionProvider;
use crate::config::AppConfig;
use crate::net::api;
use crate::net::types::{CreateRecipeBody, RecipeItem, UpdateRecipeBody, recipe_id_from_sk};

/// What the view should do at an action boundary.
#[derive(Clone, Debug, PartialEq)]
pub enum IdentityDirective {
    /// No session: navigate to the entry page, send nothing.
    RedirectToEntry,
    /// Malformed token: clear displayed identity, send nothing, stay put.
    ClearIdentity,
    /// Usable identity: carry on with the action.
    Proceed(Identity),
}

/// Resolve identity and map the outcome onto a view directive.
///
/// Called at mount and again at every create/update/delete; the token is
/// deliberately not cached in between.
pub fn resolve_directive<P: SessionProvider + ?Sized>(provider: &P) -> IdentityDirective {
    match resolve_identity(provider) {
        Ok(identity) => IdentityDirective::Proceed(identity),
        Err(SyncError::NoSession) => IdentityDirective::RedirectToEntry,
        Err(_) => IdentityDirective::ClearIdentity,
    }
}

/// Fetch the full list scoped to the resolved identity's email.
pub async fn load_recipes(
    config: &AppConfig,
    identity: &Identity,
) -> Result<Vec<RecipeItem>, SyncError> {
    Ok(api::fetch_recipes(config, &identity.token, &identity.claims.email).await?)
}

/// Create an item from a user-entered title plus the placeholder fields.
pub async fn create_recipe(
    config: &AppConfig,
    identity: &Identity,
    title: &str,
) -> Result<RecipeItem, SyncError> {
    let body = CreateRecipeBody::with_title(&identity.claims.email, title);
    Ok(api::create_recipe(config, &identity.token, &body).await?)
}

/// Patch an item's changed fields, addressing it by secondary key.
pub async fn update_recipe(
    config: &AppConfig,
    identity: &Identity,
    sk: &str,
    body: &UpdateRecipeBody,
) -> Result<RecipeItem, SyncError> {
    Ok(api::update_recipe(
        config,
        &identity.token,
        recipe_id_from_sk(sk),
        &identity.claims.email,
        body,
    )
    .await?)
}

/// Delete an item, addressing it by secondary key.
pub async fn delete_recipe(
    config: &AppConfig,
    identity: &Identity,
    sk: &str,
) -> Result<(), SyncError> {
    Ok(api::delete_recipe(
        config,
        &identity.token,
        recipe_id_from_sk(sk),
        &identity.claims.email,
    )
    .await?)
}
