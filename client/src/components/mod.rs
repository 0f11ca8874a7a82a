//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and route gates while reading shared state
//! from Leptos context providers.

pub mod guards;
pub mod layout;
pub mod loading;
