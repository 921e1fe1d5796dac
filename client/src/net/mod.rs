//! Networking modules for the remote assistant HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the chat request and owns the session thread identifier,
//! and `types` defines the JSON wire schema shared with the assistant service.

pub mod api;
pub mod types;
