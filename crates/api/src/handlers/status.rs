//! Read-only handlers for the status registries.

use axum::extract::State;
use axum::Json;
use taskboard_db::models::status::StatusEntry;
use taskboard_db::repositories::StatusRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/project-statuses
pub async fn list_project_statuses(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<StatusEntry>>> {
    Ok(Json(StatusRepo::list_project_statuses(&state.pool).await?))
}

/// GET /api/v1/task-statuses
pub async fn list_task_statuses(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<StatusEntry>>> {
    Ok(Json(StatusRepo::list_task_statuses(&state.pool).await?))
}
