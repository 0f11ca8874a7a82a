//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate navigation policy from page and component logic
//! so it can be tested without a browser.

pub mod auth;
