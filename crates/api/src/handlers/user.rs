//! Handlers for the `/users` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use taskboard_core::error::CoreError;
use taskboard_core::validation::{require_field, require_non_blank};
use taskboard_db::models::user::{CreateUser, UpdateUser, User};
use validator::Validate;

use crate::error::AppResult;
use crate::extract::{AppJson, IdPath};
use crate::services::user as service;
use crate::state::AppState;
use crate::validation::validate_request;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub role: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub role: Option<String>,
}

impl CreateUserRequest {
    fn into_input(self) -> Result<CreateUser, CoreError> {
        let name = require_field(self.name, "name")?;
        require_non_blank(&name, "name")?;
        let role = require_field(self.role, "role")?;
        require_non_blank(&role, "role")?;
        Ok(CreateUser { name, role })
    }
}

impl UpdateUserRequest {
    fn into_input(self) -> Result<UpdateUser, CoreError> {
        if let Some(name) = &self.name {
            require_non_blank(name, "name")?;
        }
        if let Some(role) = &self.role {
            require_non_blank(role, "role")?;
        }
        Ok(UpdateUser {
            name: self.name,
            role: self.role,
        })
    }
}

/// POST /api/v1/users
pub async fn create(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<User>)> {
    validate_request(&body)?;
    let user = service::create_user(&state.pool, &body.into_input()?).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/v1/users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    Ok(Json(service::list_users(&state.pool).await?))
}

/// GET /api/v1/users/{id}
pub async fn get_by_id(State(state): State<AppState>, IdPath(id): IdPath) -> AppResult<Json<User>> {
    Ok(Json(service::get_user(&state.pool, id).await?))
}

/// PUT /api/v1/users/{id}
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    AppJson(body): AppJson<UpdateUserRequest>,
) -> AppResult<Json<User>> {
    validate_request(&body)?;
    let user = service::update_user(&state.pool, id, &body.into_input()?).await?;
    Ok(Json(user))
}

/// DELETE /api/v1/users/{id}
pub async fn delete(State(state): State<AppState>, IdPath(id): IdPath) -> AppResult<StatusCode> {
    service::delete_user(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
