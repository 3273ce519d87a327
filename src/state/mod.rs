//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `recipes`) so components can depend on
//! small focused models provided as signals via context.

pub mod auth;
pub mod recipes;
