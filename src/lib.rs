//! Crewline server core modules.
//!
//! This crate contains the backend of the Crewline recruitment platform's
//! onboarding subsystem: HTTP routing, session-based actor context, and the
//! services managing onboarding templates, new hires, tasks with derived
//! progress, notes, and document links. All data is scoped by the acting
//! user's company.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;

#[cfg(test)]
pub(crate) mod test_support;
