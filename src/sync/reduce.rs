//! Pure state transitions for the recipe list.
//!
//! Every dashboard signal update funnels through one of these functions so
//! the whole phase machine is exercisable without a browser. Failure
//! reducers leave the list untouched: local state stays last-known-good and
//! the caller decides how loudly to report.

#[cfg(test)]
#[path = "reduce_test.rs"]
mod reduce_test;

use crate::net::types::RecipeItem;
use crate::state::recipes::{PendingAction, RecipesState, SyncPhase};

/// Mount with a usable identity: initial fetch under way.
pub fn begin_loading(state: &mut RecipesState) {
    state.phase = SyncPhase::Loading;
}

/// Mount without a session: the view is about to navigate away.
pub fn mark_unauthenticated(state: &mut RecipesState) {
    state.phase = SyncPhase::Unauthenticated;
}

/// Successful fetch: replace the list wholesale, never merge.
pub fn apply_loaded(state: &mut RecipesState, items: Vec<RecipeItem>) {
    state.items = items;
    state.phase = SyncPhase::Ready;
}

/// Failed fetch: keep whatever list we had.
pub fn apply_load_failed(state: &mut RecipesState) {
    state.phase = SyncPhase::Ready;
}

/// A mutating call left the station.
pub fn begin_action(state: &mut RecipesState, action: PendingAction) {
    state.phase = SyncPhase::ActionInFlight(action);
}

/// Successful create: append the server echo, no reordering.
pub fn apply_created(state: &mut RecipesState, item: RecipeItem) {
    state.items.push(item);
    state.phase = SyncPhase::Ready;
}

/// Successful update: replace the matching item in place.
///
/// A miss (the item raced a delete) leaves the list unchanged.
pub fn apply_updated(state: &mut RecipesState, item: RecipeItem) {
    if let Some(existing) = state.items.iter_mut().find(|i| i.sk == item.sk) {
        *existing = item;
    }
    state.phase = SyncPhase::Ready;
}

/// Confirmed delete: remove the item matching the original secondary key.
pub fn apply_deleted(state: &mut RecipesState, sk: &str) {
    state.items.retain(|item| item.sk != sk);
    state.phase = SyncPhase::Ready;
}

/// Failed mutating call: list unchanged, no rollback needed.
pub fn apply_action_failed(state: &mut RecipesState) {
    state.phase = SyncPhase::Ready;
}
