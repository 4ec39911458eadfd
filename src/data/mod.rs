//! Data access layer repositories.
//!
//! Repositories abstract the database operations for each aggregate. They
//! are generic over [`sea_orm::ConnectionTrait`] so the same repository runs
//! against the pooled connection or inside a transaction.

pub mod app_user;
pub mod candidate;
pub mod document;
pub mod job;
pub mod onboarding;
