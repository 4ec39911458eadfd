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
        onboarding::{AddDocumentDto, NewHireDocumentDto},
    },
    service::onboarding::document::DocumentService,
};

/// Links an existing document to a new hire
#[utoipa::path(
    post,
    path = "/api/onboarding/new-hires/{id}/documents",
    tag = ONBOARDING_TAG,
    params(("id" = i32, Path, description = "New hire ID")),
    request_body = AddDocumentDto,
    responses(
        (status = 201, description = "Document linked", body = NewHireDocumentDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Acting user may not manage this hire's documents", body = ErrorDto),
        (status = 404, description = "New hire or document not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_document(
    State(state): State<AppState>,
    session: Session,
    Path(new_hire_id): Path<i32>,
    Json(dto): Json<AddDocumentDto>,
) -> Result<impl IntoResponse, Error> {
    let user = require_session_user(&session).await?;

    let link = DocumentService::new(&state.db)
        .add_document(user, new_hire_id, dto)
        .await?;

    Ok((StatusCode::CREATED, Json(link)))
}

/// Lists a new hire's document links with document and linker profile
#[utoipa::path(
    get,
    path = "/api/onboarding/new-hires/{id}/documents",
    tag = ONBOARDING_TAG,
    params(("id" = i32, Path, description = "New hire ID")),
    responses(
        (status = 200, description = "The hire's document links", body = Vec<NewHireDocumentDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Acting user may not manage this hire's documents", body = ErrorDto),
        (status = 404, description = "New hire not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_documents(
    State(state): State<AppState>,
    session: Session,
    Path(new_hire_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = require_session_user(&session).await?;

    let links = DocumentService::new(&state.db)
        .get_documents(user, new_hire_id)
        .await?;

    Ok((StatusCode::OK, Json(links)))
}

/// Unlinks a document from a new hire, leaving the document itself intact
#[utoipa::path(
    delete,
    path = "/api/onboarding/new-hires/{id}/documents/{document_id}",
    tag = ONBOARDING_TAG,
    params(
        ("id" = i32, Path, description = "New hire ID"),
        ("document_id" = i32, Path, description = "Document ID")
    ),
    responses(
        (status = 200, description = "Document unlinked", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Acting user may not manage this hire's documents", body = ErrorDto),
        (status = 404, description = "New hire or link not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_document(
    State(state): State<AppState>,
    session: Session,
    Path((new_hire_id, document_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let user = require_session_user(&session).await?;

    DocumentService::new(&state.db)
        .remove_document(user, new_hire_id, document_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Document unlinked".to_string(),
        }),
    ))
}
