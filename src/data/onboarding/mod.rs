//! Repositories for the onboarding aggregates: templates, the task-template
//! catalog, new hires, their task sets, notes, and document links.

pub mod document;
pub mod new_hire;
pub mod note;
pub mod task;
pub mod task_template;
pub mod template;
