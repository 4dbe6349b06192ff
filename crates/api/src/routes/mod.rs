pub mod health;
pub mod project;
pub mod status;
pub mod task;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                     list, create
/// /projects/{id}                get, update, delete (cascades to tasks)
///
/// /tasks                        list (?project_id=&assignee_id=), create
/// /tasks/{id}                   get, update, delete
///
/// /users                        list, create
/// /users/{id}                   get, update, delete
///
/// /project-statuses             list
/// /task-statuses                list
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/tasks", task::router())
        .nest("/users", user::router())
        .merge(status::router())
}
