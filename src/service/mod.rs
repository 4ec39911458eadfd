//! Business logic services.
//!
//! Services compose repositories, own the transaction boundaries, and
//! enforce the authorization rules that must hold regardless of what the
//! client claims.

pub mod notification;
pub mod onboarding;
