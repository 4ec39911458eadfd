//! Server models and type definitions.
//!
//! Application state, API DTOs, and session data structures bridging the
//! database entities and the HTTP handlers.

pub mod api;
pub mod app;
pub mod onboarding;
pub mod session;
