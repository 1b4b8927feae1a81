//! Utility helpers shared across page and component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure formatting, parsing, and list-editing helpers live here so screen
//! modules stay focused on state wiring and markup.

pub mod chips;
pub mod money;
pub mod search;
