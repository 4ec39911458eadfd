use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    controller::{onboarding::ONBOARDING_TAG, util::require_session_user},
    error::Error,
    model::{
        api::{ErrorDto, MessageDto},
        app::AppState,
        onboarding::{ApplyTemplateDto, CreateTaskDto, OnboardingTaskDto, UpdateTaskDto},
    },
    service::onboarding::task::TaskService,
};

/// Applies a template, or an explicit task list, to a new hire
#[utoipa::path(
    post,
    path = "/api/onboarding/new-hires/apply-template",
    tag = ONBOARDING_TAG,
    request_body = ApplyTemplateDto,
    responses(
        (status = 201, description = "The created tasks", body = Vec<OnboardingTaskDto>),
        (status = 400, description = "Template has no tasks", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "New hire or template not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn apply_template(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<ApplyTemplateDto>,
) -> Result<impl IntoResponse, Error> {
    let user = require_session_user(&session).await?;

    let tasks = TaskService::new(&state.db)
        .apply_template(user.company_id, dto)
        .await?;

    Ok((StatusCode::CREATED, Json(tasks)))
}

/// Lists a new hire's onboarding tasks
#[utoipa::path(
    get,
    path = "/api/onboarding/new-hires/{id}/tasks",
    tag = ONBOARDING_TAG,
    params(("id" = i32, Path, description = "New hire ID")),
    responses(
        (status = 200, description = "The hire's tasks", body = Vec<OnboardingTaskDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "New hire not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_new_hire_tasks(
    State(state): State<AppState>,
    session: Session,
    Path(new_hire_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = require_session_user(&session).await?;

    let tasks = TaskService::new(&state.db)
        .get_tasks(new_hire_id, user.company_id)
        .await?;

    Ok((StatusCode::OK, Json(tasks)))
}

/// Creates an ad-hoc onboarding task
#[utoipa::path(
    post,
    path = "/api/onboarding/tasks",
    tag = ONBOARDING_TAG,
    request_body = CreateTaskDto,
    responses(
        (status = 201, description = "Task created", body = OnboardingTaskDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "New hire not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_task(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateTaskDto>,
) -> Result<impl IntoResponse, Error> {
    let user = require_session_user(&session).await?;

    let task = TaskService::new(&state.db)
        .create_task(user.company_id, dto)
        .await?;

    Ok((StatusCode::CREATED, Json(task)))
}

/// Updates an onboarding task
///
/// Status transitions are assignee-only and completion stamps move with the
/// status change.
#[utoipa::path(
    put,
    path = "/api/onboarding/tasks/{id}",
    tag = ONBOARDING_TAG,
    params(("id" = i32, Path, description = "Task ID")),
    request_body = UpdateTaskDto,
    responses(
        (status = 200, description = "Task updated", body = OnboardingTaskDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Acting user is not the assignee", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_task(
    State(state): State<AppState>,
    session: Session,
    Path(task_id): Path<i32>,
    Json(dto): Json<UpdateTaskDto>,
) -> Result<impl IntoResponse, Error> {
    let user = require_session_user(&session).await?;

    let task = TaskService::new(&state.db)
        .update_task(user, task_id, dto)
        .await?;

    Ok((StatusCode::OK, Json(task)))
}

/// Deletes an onboarding task, recalculating the owning hire
#[utoipa::path(
    delete,
    path = "/api/onboarding/tasks/{id}",
    tag = ONBOARDING_TAG,
    params(("id" = i32, Path, description = "Task ID")),
    responses(
        (status = 200, description = "Task deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_task(
    State(state): State<AppState>,
    session: Session,
    Path(task_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = require_session_user(&session).await?;

    TaskService::new(&state.db).delete_task(user, task_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Task deleted".to_string(),
        }),
    ))
}
