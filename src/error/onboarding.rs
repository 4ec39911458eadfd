use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::debug;

use crate::model::api::ErrorDto;

/// Domain errors for the onboarding subsystem.
///
/// Not-found variants map to 404, validation to 400, and authorization
/// failures to 403. Authorization failures are never downgraded to no-ops:
/// the mutation is rejected and prior state is left intact.
#[derive(Error, Debug)]
pub enum OnboardingError {
    #[error("Onboarding template ID {0} not found")]
    TemplateNotFound(i32),
    #[error("Task template ID {0} not found")]
    TaskTemplateNotFound(i32),
    #[error("New hire ID {0} not found")]
    NewHireNotFound(i32),
    #[error("Onboarding task ID {0} not found")]
    TaskNotFound(i32),
    #[error("Note ID {0} not found")]
    NoteNotFound(i32),
    #[error("Document ID {0} not found")]
    DocumentNotFound(i32),
    #[error("Job ID {0} not found")]
    JobNotFound(i32),
    #[error("Candidate ID {0} not found")]
    CandidateNotFound(i32),
    #[error("Onboarding template ID {0} has no tasks to apply")]
    EmptyTemplate(i32),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("User ID {user_id} is not the author of note ID {note_id}")]
    NotNoteAuthor { user_id: i32, note_id: i32 },
    #[error("User ID {user_id} is not assigned to task ID {task_id}")]
    NotTaskAssignee { user_id: i32, task_id: i32 },
    #[error("User ID {user_id} may not manage documents for new hire ID {new_hire_id}")]
    DocumentAccessDenied { user_id: i32, new_hire_id: i32 },
    #[error("User ID {0} may not perform this action")]
    ActionNotPermitted(i32),
}

impl OnboardingError {
    fn status(&self) -> StatusCode {
        match self {
            Self::TemplateNotFound(_)
            | Self::TaskTemplateNotFound(_)
            | Self::NewHireNotFound(_)
            | Self::TaskNotFound(_)
            | Self::NoteNotFound(_)
            | Self::DocumentNotFound(_)
            | Self::JobNotFound(_)
            | Self::CandidateNotFound(_) => StatusCode::NOT_FOUND,
            Self::EmptyTemplate(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotNoteAuthor { .. }
            | Self::NotTaskAssignee { .. }
            | Self::DocumentAccessDenied { .. }
            | Self::ActionNotPermitted(_) => StatusCode::FORBIDDEN,
        }
    }
}

impl IntoResponse for OnboardingError {
    fn into_response(self) -> Response {
        debug!("{}", self);

        (
            self.status(),
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
