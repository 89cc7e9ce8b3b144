//! Handler for the derived tag list.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use tagnotes_db::repositories::NoteRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /tags
///
/// Every distinct tag across all notes, sorted lexicographically.
pub async fn list_tags(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let tags = NoteRepo::list_tags(&state.pool)
        .await
        .map_err(AppError::storage("Failed to fetch tags"))?;

    Ok(Json(tags))
}
