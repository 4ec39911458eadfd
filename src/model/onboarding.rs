//! API DTOs for the onboarding subsystem.
//!
//! Response DTOs expose derived fields (`status`, `progress`) read-only:
//! none of the request payloads carry them, so clients cannot write them.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Public profile of a user, as embedded in enriched listings.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserProfileDto {
    pub id: i32,
    pub full_name: String,
    pub email: String,
}

impl From<entity::app_user::Model> for UserProfileDto {
    fn from(user: entity::app_user::Model) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name(),
            email: user.email,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TemplateDto {
    pub id: i32,
    pub name: String,
    pub item_count: i32,
    pub created_by: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::onboarding_template::Model> for TemplateDto {
    fn from(template: entity::onboarding_template::Model) -> Self {
        Self {
            id: template.id,
            name: template.name,
            item_count: template.item_count,
            created_by: template.created_by,
            created_at: template.created_at,
            updated_at: template.updated_at,
        }
    }
}

/// One entry of a template's ordered task mapping.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TemplateTaskDto {
    pub task_template_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub sequence: i32,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TaskTemplateDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
}

impl From<entity::onboarding_task_template::Model> for TaskTemplateDto {
    fn from(task_template: entity::onboarding_task_template::Model) -> Self {
        Self {
            id: task_template.id,
            title: task_template.title,
            description: task_template.description,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NewHireDto {
    pub id: i32,
    pub company_id: i32,
    pub candidate_id: i32,
    pub job_id: i32,
    pub manager_id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub position: String,
    pub department: String,
    pub work_location: Option<String>,
    pub start_date: NaiveDate,
    pub status: String,
    pub progress: i32,
}

impl From<entity::new_hire::Model> for NewHireDto {
    fn from(new_hire: entity::new_hire::Model) -> Self {
        Self {
            id: new_hire.id,
            company_id: new_hire.company_id,
            candidate_id: new_hire.candidate_id,
            job_id: new_hire.job_id,
            manager_id: new_hire.manager_id,
            first_name: new_hire.first_name,
            last_name: new_hire.last_name,
            email: new_hire.email,
            position: new_hire.position,
            department: new_hire.department,
            work_location: new_hire.work_location,
            start_date: new_hire.start_date,
            status: new_hire.status.to_string(),
            progress: new_hire.progress,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct OnboardingTaskDto {
    pub id: i32,
    pub new_hire_id: i32,
    pub task_template_id: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub status: String,
    pub assigned_to: Option<i32>,
    pub priority: Option<String>,
    pub category: Option<String>,
    pub completed_by: Option<i32>,
    pub completed_date: Option<NaiveDateTime>,
}

impl From<entity::onboarding_task::Model> for OnboardingTaskDto {
    fn from(task: entity::onboarding_task::Model) -> Self {
        Self {
            id: task.id,
            new_hire_id: task.new_hire_id,
            task_template_id: task.task_template_id,
            title: task.title,
            description: task.description,
            due_date: task.due_date,
            status: task.status.to_string(),
            assigned_to: task.assigned_to,
            priority: task.priority,
            category: task.category,
            completed_by: task.completed_by,
            completed_date: task.completed_date,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NoteDto {
    pub id: i32,
    pub title: Option<String>,
    pub content: String,
    pub author: UserProfileDto,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DocumentDto {
    pub id: i32,
    pub name: String,
    pub file_path: String,
}

impl From<entity::document::Model> for DocumentDto {
    fn from(document: entity::document::Model) -> Self {
        Self {
            id: document.id,
            name: document.name,
            file_path: document.file_path,
        }
    }
}

/// A document link enriched with the document itself and the linking user's
/// public profile, never bare foreign keys.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NewHireDocumentDto {
    pub id: i32,
    pub new_hire_id: i32,
    pub document: DocumentDto,
    pub added_by_user: UserProfileDto,
    pub added_at: NaiveDateTime,
}

// ---- Request payloads ----

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LoginDto {
    pub email: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct InitiateOnboardingDto {
    pub candidate_id: i32,
    pub job_id: i32,
    pub manager_id: Option<i32>,
    pub work_location: Option<String>,
    pub start_date: NaiveDate,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub position: String,
    pub department: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateTemplateDto {
    pub name: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateTemplateDto {
    pub name: String,
}

/// One item of a template task replacement: either a reference to an
/// existing catalog entry or an inline definition that creates one.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TemplateTaskInputDto {
    pub task_template_id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ReplaceTemplateTasksDto {
    pub tasks: Vec<TemplateTaskInputDto>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateTaskTemplateDto {
    pub title: String,
    pub description: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateTaskTemplateDto {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Explicit task passed to template application (mode a) or task creation.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NewTaskDto {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub assigned_to: Option<i32>,
    pub priority: Option<String>,
    pub category: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ApplyTemplateDto {
    pub new_hire_id: i32,
    pub template_id: i32,
    pub due_date: NaiveDate,
    pub tasks: Option<Vec<NewTaskDto>>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateTaskDto {
    pub new_hire_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub assigned_to: Option<i32>,
    pub priority: Option<String>,
    pub category: Option<String>,
}

/// Task update payload. `status` is the string form of
/// [`entity::status::TaskStatus`]; an unknown value is a validation error.
#[derive(Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateTaskDto {
    pub new_hire_id: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub assigned_to: Option<i32>,
    pub priority: Option<String>,
    pub category: Option<String>,
}

/// New hire update payload. Derived `status`/`progress` are deliberately
/// absent: they can only change through task mutations.
#[derive(Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateNewHireDto {
    pub manager_id: Option<i32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub work_location: Option<String>,
    pub start_date: Option<NaiveDate>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateNoteDto {
    pub title: Option<String>,
    pub content: String,
}

#[derive(Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateNoteDto {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AddDocumentDto {
    pub document_id: i32,
}
