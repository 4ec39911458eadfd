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
        onboarding::{
            CreateTemplateDto, ReplaceTemplateTasksDto, TemplateDto, TemplateTaskDto,
            UpdateTemplateDto,
        },
    },
    service::onboarding::template::TemplateService,
};

/// Lists the tenant's onboarding templates
#[utoipa::path(
    get,
    path = "/api/onboarding/templates",
    tag = ONBOARDING_TAG,
    responses(
        (status = 200, description = "The tenant's templates", body = Vec<TemplateDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_templates(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = require_session_user(&session).await?;

    let templates = TemplateService::new(&state.db)
        .get_templates(user.company_id)
        .await?;

    Ok((StatusCode::OK, Json(templates)))
}

/// Creates an onboarding template
#[utoipa::path(
    post,
    path = "/api/onboarding/templates",
    tag = ONBOARDING_TAG,
    request_body = CreateTemplateDto,
    responses(
        (status = 201, description = "Template created", body = TemplateDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_template(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateTemplateDto>,
) -> Result<impl IntoResponse, Error> {
    let user = require_session_user(&session).await?;

    let template = TemplateService::new(&state.db)
        .create_template(user.company_id, user.user_id, dto)
        .await?;

    Ok((StatusCode::CREATED, Json(template)))
}

/// Renames an onboarding template
#[utoipa::path(
    put,
    path = "/api/onboarding/templates/{id}",
    tag = ONBOARDING_TAG,
    params(("id" = i32, Path, description = "Template ID")),
    request_body = UpdateTemplateDto,
    responses(
        (status = 200, description = "Template updated", body = TemplateDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Template not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_template(
    State(state): State<AppState>,
    session: Session,
    Path(template_id): Path<i32>,
    Json(dto): Json<UpdateTemplateDto>,
) -> Result<impl IntoResponse, Error> {
    let user = require_session_user(&session).await?;

    let template = TemplateService::new(&state.db)
        .update_template(template_id, user.company_id, dto)
        .await?;

    Ok((StatusCode::OK, Json(template)))
}

/// Deletes an onboarding template and its task mapping
#[utoipa::path(
    delete,
    path = "/api/onboarding/templates/{id}",
    tag = ONBOARDING_TAG,
    params(("id" = i32, Path, description = "Template ID")),
    responses(
        (status = 200, description = "Template deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Template not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_template(
    State(state): State<AppState>,
    session: Session,
    Path(template_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = require_session_user(&session).await?;

    TemplateService::new(&state.db)
        .delete_template(template_id, user.company_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Template deleted".to_string(),
        }),
    ))
}

/// Gets a template's ordered task list
#[utoipa::path(
    get,
    path = "/api/onboarding/templates/{id}/tasks",
    tag = ONBOARDING_TAG,
    params(("id" = i32, Path, description = "Template ID")),
    responses(
        (status = 200, description = "The template's tasks in sequence order", body = Vec<TemplateTaskDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Template not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_template_tasks(
    State(state): State<AppState>,
    session: Session,
    Path(template_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = require_session_user(&session).await?;

    let tasks = TemplateService::new(&state.db)
        .get_template_tasks(template_id, user.company_id)
        .await?;

    Ok((StatusCode::OK, Json(tasks)))
}

/// Replaces a template's task list in full
#[utoipa::path(
    put,
    path = "/api/onboarding/templates/{id}/tasks",
    tag = ONBOARDING_TAG,
    params(("id" = i32, Path, description = "Template ID")),
    request_body = ReplaceTemplateTasksDto,
    responses(
        (status = 200, description = "The replaced task list", body = Vec<TemplateTaskDto>),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Template not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn replace_template_tasks(
    State(state): State<AppState>,
    session: Session,
    Path(template_id): Path<i32>,
    Json(dto): Json<ReplaceTemplateTasksDto>,
) -> Result<impl IntoResponse, Error> {
    let user = require_session_user(&session).await?;

    let tasks = TemplateService::new(&state.db)
        .replace_template_tasks(template_id, user.company_id, dto)
        .await?;

    Ok((StatusCode::OK, Json(tasks)))
}
