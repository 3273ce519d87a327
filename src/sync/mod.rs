//! List synchronization between the view and the remote API.
//!
//! ARCHITECTURE
//! ============
//! `identity` re-resolves session → token → claims at every action boundary,
//! `actions` turns resolution outcomes into view directives, and `reduce`
//! holds the pure state transitions the dashboard applies to its signals.

pub mod actions;
pub mod identity;
pub mod reduce;
