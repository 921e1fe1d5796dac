//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate rendering and environment concerns from page and
//! component logic to improve reuse and testability.

pub mod catalog;
pub mod markdown;
pub mod thread_id;
