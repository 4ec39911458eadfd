//! Session data models.
//!
//! Type-safe wrappers for session state stored through tower-sessions.

pub mod user;
