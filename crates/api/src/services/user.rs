//! User CRUD. A name taken by another user is a `409 CONFLICT`.

use taskboard_core::error::CoreError;
use taskboard_core::types::DbId;
use taskboard_db::models::user::{CreateUser, UpdateUser, User};
use taskboard_db::repositories::UserRepo;
use taskboard_db::DbPool;

use crate::error::{AppError, AppResult};

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound { entity: "User", id }
}

const UNIQUE_NAME: &str = "uq_users_name";

/// Turn a `uq_users_name` violation into a `Conflict` naming the taken name.
fn name_conflict(err: sqlx::Error, name: Option<&str>) -> AppError {
    match &err {
        sqlx::Error::Database(db) if db.constraint() == Some(UNIQUE_NAME) => {
            CoreError::Conflict(format!(
                "A user named '{}' already exists",
                name.unwrap_or_default()
            ))
            .into()
        }
        _ => err.into(),
    }
}

pub async fn list_users(pool: &DbPool) -> AppResult<Vec<User>> {
    Ok(UserRepo::list(pool).await?)
}

pub async fn get_user(pool: &DbPool, id: DbId) -> AppResult<User> {
    UserRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| not_found(id).into())
}

pub async fn create_user(pool: &DbPool, input: &CreateUser) -> AppResult<User> {
    let user = UserRepo::create(pool, input)
        .await
        .map_err(|e| name_conflict(e, Some(&input.name)))?;
    tracing::info!(user_id = user.id, "User created");
    Ok(user)
}

pub async fn update_user(pool: &DbPool, id: DbId, input: &UpdateUser) -> AppResult<User> {
    let user = UserRepo::update(pool, id, input)
        .await
        .map_err(|e| name_conflict(e, input.name.as_deref()))?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(user_id = id, "User updated");
    Ok(user)
}

/// Delete a user. Tasks assigned to them become unassigned.
pub async fn delete_user(pool: &DbPool, id: DbId) -> AppResult<()> {
    if !UserRepo::delete(pool, id).await? {
        return Err(not_found(id).into());
    }
    tracing::info!(user_id = id, "User deleted");
    Ok(())
}
