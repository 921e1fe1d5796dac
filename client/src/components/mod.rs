//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chat surface and sidebar while reading/writing
//! shared state from Leptos context providers.

pub mod chat_header;
pub mod chat_interface;
pub mod chat_message;
pub mod related_products;
pub mod sources_list;
