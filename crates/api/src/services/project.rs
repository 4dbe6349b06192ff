//! Project lifecycle: creation in the initial status, partial updates with
//! status relinking, and cascade delete.

use taskboard_core::error::CoreError;
use taskboard_core::status::ProjectStatus;
use taskboard_core::types::DbId;
use taskboard_db::models::project::{CreateProject, Project, UpdateProject};
use taskboard_db::repositories::{ProjectRepo, StatusRepo, TaskRepo};
use taskboard_db::DbPool;

use crate::error::AppResult;

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: "Project",
        id,
    }
}

pub async fn list_projects(pool: &DbPool) -> AppResult<Vec<Project>> {
    Ok(ProjectRepo::list(pool).await?)
}

pub async fn get_project(pool: &DbPool, id: DbId) -> AppResult<Project> {
    ProjectRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| not_found(id).into())
}

/// Create a project. Its status is always [`ProjectStatus::INITIAL`].
pub async fn create_project(pool: &DbPool, input: &CreateProject) -> AppResult<Project> {
    let project = ProjectRepo::create(pool, input, ProjectStatus::INITIAL.id()).await?;
    tracing::info!(project_id = project.id, "Project created");
    Ok(project)
}

/// Apply a partial update.
///
/// The status check and the write share one transaction, so an unknown
/// `status_id` leaves the row untouched.
pub async fn update_project(pool: &DbPool, id: DbId, input: &UpdateProject) -> AppResult<Project> {
    if input.is_empty() {
        return Err(CoreError::Validation("No fields supplied for update".into()).into());
    }

    let mut tx = pool.begin().await?;

    if let Some(status_id) = input.status_id {
        if !StatusRepo::project_status_exists(&mut *tx, status_id).await? {
            return Err(CoreError::ReferenceNotFound {
                entity: "ProjectStatus",
                id: status_id.into(),
            }
            .into());
        }
    }

    let project = ProjectRepo::update(&mut *tx, id, input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tx.commit().await?;

    tracing::info!(
        project_id = id,
        status_id = project.status_id,
        "Project updated"
    );
    Ok(project)
}

/// Delete a project together with all of its tasks.
pub async fn delete_project(pool: &DbPool, id: DbId) -> AppResult<()> {
    let mut tx = pool.begin().await?;

    let tasks_removed = TaskRepo::count_by_project(&mut *tx, id).await?;
    if !ProjectRepo::delete(&mut *tx, id).await? {
        return Err(not_found(id).into());
    }

    tx.commit().await?;

    tracing::info!(project_id = id, tasks_removed, "Project deleted");
    Ok(())
}
