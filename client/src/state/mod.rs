//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` is the plain session snapshot, `session` owns it and performs every
//! mutation, `reconcile` decides startup validity, and `profile` holds the
//! profile page's editable draft.

pub mod auth;
pub mod profile;
pub mod reconcile;
pub mod session;
