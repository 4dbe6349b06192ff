use axum::routing::get;
use axum::Router;

use crate::handlers::status;
use crate::state::AppState;

/// Read-only status registry listings.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/project-statuses", get(status::list_project_statuses))
        .route("/task-statuses", get(status::list_task_statuses))
}
