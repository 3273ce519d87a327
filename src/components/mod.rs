//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render list chrome and read shared state from Leptos context
//! providers; network-affecting behavior stays in the pages.

pub mod header;
pub mod recipe_row;
