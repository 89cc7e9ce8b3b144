//! Handlers for note CRUD.
//!
//! Each storage failure is reported with the operation's fixed public
//! message; the underlying error is logged, never returned.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tagnotes_core::error::CoreError;
use tagnotes_core::types::DbId;
use tagnotes_db::models::note::{CreateNote, UpdateNote};
use tagnotes_db::repositories::NoteRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::response::MessageResponse;
use crate::state::AppState;

const NOTE_ENTITY: &str = "Note";

/// Parse a path identifier. Anything that is not a UUID cannot name an
/// existing note, so it is reported as not found.
fn parse_note_id(raw: &str) -> AppResult<DbId> {
    raw.parse::<DbId>().map_err(|_| {
        AppError::Core(CoreError::NotFound {
            entity: NOTE_ENTITY,
            id: raw.to_string(),
        })
    })
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: NOTE_ENTITY,
        id: id.to_string(),
    })
}

/// GET /notes
///
/// List every note, newest first.
pub async fn list_notes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let notes = NoteRepo::list(&state.pool)
        .await
        .map_err(AppError::storage("Failed to fetch notes"))?;

    Ok(Json(notes))
}

/// POST /notes
///
/// Create a note. `tags` defaults to an empty list.
pub async fn create_note(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateNote>,
) -> AppResult<impl IntoResponse> {
    let note = NoteRepo::create(&state.pool, &input)
        .await
        .map_err(AppError::storage("Failed to create note"))?;

    tracing::info!(note_id = %note.id, tags = note.tags.len(), "Note created");

    Ok((StatusCode::CREATED, Json(note)))
}

/// PUT /notes/{id}
///
/// Partially update a note; absent fields are left unchanged. An empty
/// body returns the note as stored.
pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(input): ValidatedJson<UpdateNote>,
) -> AppResult<impl IntoResponse> {
    let id = parse_note_id(&id)?;

    // An empty patch is a read: no write, so `updatedAt` stays put.
    if input.is_empty() {
        let note = NoteRepo::find_by_id(&state.pool, id)
            .await
            .map_err(AppError::storage("Failed to update note"))?
            .ok_or_else(|| not_found(id))?;
        return Ok(Json(note));
    }

    let note = NoteRepo::update(&state.pool, id, &input)
        .await
        .map_err(AppError::storage("Failed to update note"))?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(note_id = %note.id, "Note updated");

    Ok(Json(note))
}

/// DELETE /notes/{id}
///
/// Permanently delete a note.
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_note_id(&id)?;

    let deleted = NoteRepo::delete(&state.pool, id)
        .await
        .map_err(AppError::storage("Failed to delete note"))?;

    if !deleted {
        return Err(not_found(id));
    }

    tracing::info!(note_id = %id, "Note deleted");

    Ok(Json(MessageResponse::new("Note deleted successfully")))
}
