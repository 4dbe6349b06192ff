//! Handlers for the `/projects` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use taskboard_core::error::CoreError;
use taskboard_core::status::StatusId;
use taskboard_core::validation::{parse_date, parse_optional_date, require_field, require_non_blank};
use taskboard_db::models::project::{CreateProject, Project, UpdateProject};
use validator::Validate;

use crate::error::AppResult;
use crate::extract::{AppJson, IdPath};
use crate::services::project as service;
use crate::state::AppState;
use crate::validation::validate_request;

/// Body of `POST /projects`. There is no status field: any `status_id` in
/// the payload is ignored.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProjectRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 10000))]
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl CreateProjectRequest {
    fn into_input(self) -> Result<CreateProject, CoreError> {
        let name = require_field(self.name, "name")?;
        require_non_blank(&name, "name")?;
        let description = require_field(self.description, "description")?;
        require_non_blank(&description, "description")?;
        let start_date = parse_date(&require_field(self.start_date, "start_date")?, "start_date")?;
        let end_date = parse_date(&require_field(self.end_date, "end_date")?, "end_date")?;

        Ok(CreateProject {
            name,
            description,
            start_date,
            end_date,
        })
    }
}

/// Body of `PUT /projects/{id}`. Omitted fields are left unchanged.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProjectRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 10000))]
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[validate(range(min = 1))]
    pub status_id: Option<StatusId>,
}

impl UpdateProjectRequest {
    fn into_input(self) -> Result<UpdateProject, CoreError> {
        if let Some(name) = &self.name {
            require_non_blank(name, "name")?;
        }
        if let Some(description) = &self.description {
            require_non_blank(description, "description")?;
        }

        Ok(UpdateProject {
            start_date: parse_optional_date(self.start_date.as_deref(), "start_date")?,
            end_date: parse_optional_date(self.end_date.as_deref(), "end_date")?,
            name: self.name,
            description: self.description,
            status_id: self.status_id,
        })
    }
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateProjectRequest>,
) -> AppResult<(StatusCode, Json<Project>)> {
    validate_request(&body)?;
    let input = body.into_input()?;
    let project = service::create_project(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = service::list_projects(&state.pool).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Project>> {
    let project = service::get_project(&state.pool, id).await?;
    Ok(Json(project))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    AppJson(body): AppJson<UpdateProjectRequest>,
) -> AppResult<Json<Project>> {
    validate_request(&body)?;
    let input = body.into_input()?;
    let project = service::update_project(&state.pool, id, &input).await?;
    Ok(Json(project))
}

/// DELETE /api/v1/projects/{id}
///
/// Also deletes every task in the project.
pub async fn delete(State(state): State<AppState>, IdPath(id): IdPath) -> AppResult<StatusCode> {
    service::delete_project(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
