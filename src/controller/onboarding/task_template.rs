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
        onboarding::{CreateTaskTemplateDto, TaskTemplateDto, UpdateTaskTemplateDto},
    },
    service::onboarding::task_template::TaskTemplateService,
};

/// Lists the tenant's task template catalog
#[utoipa::path(
    get,
    path = "/api/onboarding/task-templates",
    tag = ONBOARDING_TAG,
    responses(
        (status = 200, description = "The tenant's task templates", body = Vec<TaskTemplateDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_task_templates(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = require_session_user(&session).await?;

    let task_templates = TaskTemplateService::new(&state.db)
        .get_task_templates(user.company_id)
        .await?;

    Ok((StatusCode::OK, Json(task_templates)))
}

/// Creates a catalog task template
#[utoipa::path(
    post,
    path = "/api/onboarding/task-templates",
    tag = ONBOARDING_TAG,
    request_body = CreateTaskTemplateDto,
    responses(
        (status = 201, description = "Task template created", body = TaskTemplateDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_task_template(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateTaskTemplateDto>,
) -> Result<impl IntoResponse, Error> {
    let user = require_session_user(&session).await?;

    let task_template = TaskTemplateService::new(&state.db)
        .create_task_template(user.company_id, dto)
        .await?;

    Ok((StatusCode::CREATED, Json(task_template)))
}

/// Updates a catalog task template
#[utoipa::path(
    put,
    path = "/api/onboarding/task-templates/{id}",
    tag = ONBOARDING_TAG,
    params(("id" = i32, Path, description = "Task template ID")),
    request_body = UpdateTaskTemplateDto,
    responses(
        (status = 200, description = "Task template updated", body = TaskTemplateDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Task template not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_task_template(
    State(state): State<AppState>,
    session: Session,
    Path(task_template_id): Path<i32>,
    Json(dto): Json<UpdateTaskTemplateDto>,
) -> Result<impl IntoResponse, Error> {
    let user = require_session_user(&session).await?;

    let task_template = TaskTemplateService::new(&state.db)
        .update_task_template(task_template_id, user.company_id, dto)
        .await?;

    Ok((StatusCode::OK, Json(task_template)))
}

/// Deletes a catalog task template, leaving instantiated tasks intact
#[utoipa::path(
    delete,
    path = "/api/onboarding/task-templates/{id}",
    tag = ONBOARDING_TAG,
    params(("id" = i32, Path, description = "Task template ID")),
    responses(
        (status = 200, description = "Task template deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Task template not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_task_template(
    State(state): State<AppState>,
    session: Session,
    Path(task_template_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = require_session_user(&session).await?;

    TaskTemplateService::new(&state.db)
        .delete_task_template(task_template_id, user.company_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Task template deleted".to_string(),
        }),
    ))
}
