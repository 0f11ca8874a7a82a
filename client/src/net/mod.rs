//! Networking modules for the REST backend and the image host.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` talks to the account backend, `assets` uploads images to the
//! third-party host, and `types` defines the shared wire schema.

pub mod api;
pub mod assets;
pub mod types;
