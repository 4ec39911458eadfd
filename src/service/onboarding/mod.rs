//! Services for the onboarding subsystem.

pub mod document;
pub mod new_hire;
pub mod note;
pub mod progress;
pub mod task;
pub mod task_template;
pub mod template;
