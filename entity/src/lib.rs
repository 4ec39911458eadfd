//! Database entity definitions for the Crewline onboarding platform.

pub mod prelude;

pub mod app_user;
pub mod candidate;
pub mod company;
pub mod document;
pub mod job;
pub mod new_hire;
pub mod new_hire_document;
pub mod new_hire_note;
pub mod note;
pub mod onboarding_task;
pub mod onboarding_task_template;
pub mod onboarding_template;
pub mod status;
pub mod template_task_map;
