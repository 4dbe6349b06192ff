//! Handlers for the `/tasks` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use taskboard_core::error::CoreError;
use taskboard_core::status::StatusId;
use taskboard_core::types::DbId;
use taskboard_core::validation::{
    parse_optional_date, require_field, require_non_blank, require_positive_id,
};
use taskboard_db::models::task::{CreateTask, Task, TaskFilter, UpdateTask};
use validator::Validate;

use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery, IdPath};
use crate::nullable;
use crate::services::task as service;
use crate::state::AppState;
use crate::validation::validate_request;

/// Body of `POST /tasks`. New tasks always start as "To Do".
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(max = 10000))]
    pub description: Option<String>,
    pub due_date: Option<String>,
    #[validate(range(min = 1))]
    pub project_id: Option<DbId>,
    #[validate(range(min = 1))]
    pub assignee_id: Option<DbId>,
}

impl CreateTaskRequest {
    fn into_input(self) -> Result<CreateTask, CoreError> {
        let title = require_field(self.title, "title")?;
        require_non_blank(&title, "title")?;
        let project_id = require_field(self.project_id, "project_id")?;

        Ok(CreateTask {
            title,
            description: self.description,
            due_date: parse_optional_date(self.due_date.as_deref(), "due_date")?,
            project_id,
            assignee_id: self.assignee_id,
        })
    }
}

/// Body of `PUT /tasks/{id}`.
///
/// The owning project cannot be changed. `assignee_id` distinguishes an
/// omitted key (keep) from an explicit `null` (unassign).
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(max = 10000))]
    pub description: Option<String>,
    pub due_date: Option<String>,
    #[validate(range(min = 1))]
    pub status_id: Option<StatusId>,
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub assignee_id: Option<Option<DbId>>,
}

impl UpdateTaskRequest {
    fn into_input(self) -> Result<UpdateTask, CoreError> {
        if let Some(title) = &self.title {
            require_non_blank(title, "title")?;
        }
        if let Some(Some(assignee_id)) = self.assignee_id {
            require_positive_id(assignee_id, "assignee_id")?;
        }

        Ok(UpdateTask {
            due_date: parse_optional_date(self.due_date.as_deref(), "due_date")?,
            title: self.title,
            description: self.description,
            status_id: self.status_id,
            assignee_id: self.assignee_id,
        })
    }
}

/// POST /api/v1/tasks
pub async fn create(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateTaskRequest>,
) -> AppResult<(StatusCode, Json<Task>)> {
    validate_request(&body)?;
    let input = body.into_input()?;
    let task = service::create_task(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/v1/tasks?project_id=&assignee_id=
pub async fn list(
    State(state): State<AppState>,
    AppQuery(filter): AppQuery<TaskFilter>,
) -> AppResult<Json<Vec<Task>>> {
    if let Some(project_id) = filter.project_id {
        require_positive_id(project_id, "project_id")?;
    }
    if let Some(assignee_id) = filter.assignee_id {
        require_positive_id(assignee_id, "assignee_id")?;
    }
    let tasks = service::list_tasks(&state.pool, &filter).await?;
    Ok(Json(tasks))
}

/// GET /api/v1/tasks/{id}
pub async fn get_by_id(State(state): State<AppState>, IdPath(id): IdPath) -> AppResult<Json<Task>> {
    let task = service::get_task(&state.pool, id).await?;
    Ok(Json(task))
}

/// PUT /api/v1/tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    AppJson(body): AppJson<UpdateTaskRequest>,
) -> AppResult<Json<Task>> {
    validate_request(&body)?;
    let input = body.into_input()?;
    let task = service::update_task(&state.pool, id, &input).await?;
    Ok(Json(task))
}

/// DELETE /api/v1/tasks/{id}
pub async fn delete(State(state): State<AppState>, IdPath(id): IdPath) -> AppResult<StatusCode> {
    service::delete_task(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
