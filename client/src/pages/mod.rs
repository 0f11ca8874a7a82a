//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (form signals, spawning backend
//! calls) and delegates session mutations to `SessionStore`.

pub mod home;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod register;
