//! Recipe-list state shared between the dashboard and the sync layer.
//!
//! DESIGN
//! ======
//! The list mirrors the last known server state. Mutations happen only
//! through the reducers in `sync::reduce`, keeping every transition a pure,
//! testable function.

#[cfg(test)]
#[path = "recipes_test.rs"]
mod recipes_test;

use crate::net::types::RecipeItem;

/// Which mutating call is currently in flight.
///
/// Bookkeeping for the view only: actions are not de-duplicated, and
/// overlapping calls race with last-response-wins semantics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingAction {
    Create,
    Update,
    Delete,
}

/// Lifecycle of the synchronized list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SyncPhase {
    /// No session; the view navigates to the entry page.
    Unauthenticated,
    /// Initial fetch under way.
    #[default]
    Loading,
    /// List mirrors the last known server state.
    Ready,
    /// A mutating call is in flight.
    ActionInFlight(PendingAction),
}

/// Shared recipe-list state.
#[derive(Clone, Debug, Default)]
pub struct RecipesState {
    pub phase: SyncPhase,
    pub items: Vec<RecipeItem>,
}
