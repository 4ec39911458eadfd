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
        onboarding::{CreateNoteDto, NoteDto, UpdateNoteDto},
    },
    service::onboarding::note::NoteService,
};

/// Adds a note to a new hire, authored by the acting user
#[utoipa::path(
    post,
    path = "/api/onboarding/new-hires/{id}/notes",
    tag = ONBOARDING_TAG,
    params(("id" = i32, Path, description = "New hire ID")),
    request_body = CreateNoteDto,
    responses(
        (status = 201, description = "Note created", body = NoteDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "New hire not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_note(
    State(state): State<AppState>,
    session: Session,
    Path(new_hire_id): Path<i32>,
    Json(dto): Json<CreateNoteDto>,
) -> Result<impl IntoResponse, Error> {
    let user = require_session_user(&session).await?;

    let note = NoteService::new(&state.db)
        .add_note(user, new_hire_id, dto)
        .await?;

    Ok((StatusCode::CREATED, Json(note)))
}

/// Lists a new hire's notes, newest first
#[utoipa::path(
    get,
    path = "/api/onboarding/new-hires/{id}/notes",
    tag = ONBOARDING_TAG,
    params(("id" = i32, Path, description = "New hire ID")),
    responses(
        (status = 200, description = "The hire's notes with author profiles", body = Vec<NoteDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "New hire not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notes(
    State(state): State<AppState>,
    session: Session,
    Path(new_hire_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = require_session_user(&session).await?;

    let notes = NoteService::new(&state.db)
        .get_notes(new_hire_id, user.company_id)
        .await?;

    Ok((StatusCode::OK, Json(notes)))
}

/// Updates a note; only its author may do so
#[utoipa::path(
    put,
    path = "/api/onboarding/notes/{id}",
    tag = ONBOARDING_TAG,
    params(("id" = i32, Path, description = "Note ID")),
    request_body = UpdateNoteDto,
    responses(
        (status = 200, description = "Note updated", body = NoteDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Acting user is not the author", body = ErrorDto),
        (status = 404, description = "Note not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_note(
    State(state): State<AppState>,
    session: Session,
    Path(note_id): Path<i32>,
    Json(dto): Json<UpdateNoteDto>,
) -> Result<impl IntoResponse, Error> {
    let user = require_session_user(&session).await?;

    let note = NoteService::new(&state.db)
        .update_note(user, note_id, dto)
        .await?;

    Ok((StatusCode::OK, Json(note)))
}

/// Deletes a note; only its author may do so
#[utoipa::path(
    delete,
    path = "/api/onboarding/notes/{id}",
    tag = ONBOARDING_TAG,
    params(("id" = i32, Path, description = "Note ID")),
    responses(
        (status = 200, description = "Note deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Acting user is not the author", body = ErrorDto),
        (status = 404, description = "Note not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_note(
    State(state): State<AppState>,
    session: Session,
    Path(note_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = require_session_user(&session).await?;

    NoteService::new(&state.db).delete_note(user, note_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Note deleted".to_string(),
        }),
    ))
}
