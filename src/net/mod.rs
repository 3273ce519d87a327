//! Networking modules for the remote recipes API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema, `request` builds authenticated request
//! descriptors, and `api` executes them over HTTP in the browser.

pub mod api;
pub mod request;
pub mod types;
