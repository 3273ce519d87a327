//! Session and identity-token handling.
//!
//! SYSTEM CONTEXT
//! ==============
//! The hosted identity provider owns login, logout, and token lifetime; its
//! SDK persists tokens in browser credential storage. This module only reads
//! that storage (`session`) and decodes token payloads locally (`claims`).

pub mod claims;
pub mod session;
