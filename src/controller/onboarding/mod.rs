//! Controllers for the onboarding subsystem.
//!
//! Every handler resolves the acting user from the session first; tenant
//! scoping throughout derives from that user's company.

pub mod document;
pub mod new_hire;
pub mod note;
pub mod task;
pub mod task_template;
pub mod template;

pub static ONBOARDING_TAG: &str = "onboarding";
