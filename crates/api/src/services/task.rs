//! Task lifecycle: reference-checked creation, tri-state assignee updates,
//! and deletion.
//!
//! Reference checks lock the referenced project/user rows with
//! `FOR KEY SHARE`, so they cannot be deleted between the check and the
//! write that depends on them.

use sqlx::PgConnection;
use taskboard_core::error::CoreError;
use taskboard_core::status::TaskStatus;
use taskboard_core::types::DbId;
use taskboard_db::models::task::{CreateTask, Task, TaskFilter, UpdateTask};
use taskboard_db::repositories::{ProjectRepo, StatusRepo, TaskRepo, UserRepo};
use taskboard_db::DbPool;

use crate::error::AppResult;

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound { entity: "Task", id }
}

async fn require_assignee(conn: &mut PgConnection, user_id: DbId) -> AppResult<()> {
    if UserRepo::lock_for_reference(conn, user_id).await? {
        Ok(())
    } else {
        Err(CoreError::ReferenceNotFound {
            entity: "User",
            id: user_id,
        }
        .into())
    }
}

pub async fn list_tasks(pool: &DbPool, filter: &TaskFilter) -> AppResult<Vec<Task>> {
    Ok(TaskRepo::list(pool, filter).await?)
}

pub async fn get_task(pool: &DbPool, id: DbId) -> AppResult<Task> {
    TaskRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| not_found(id).into())
}

/// Create a task under an existing project, optionally assigned.
///
/// Fails with `ReferenceNotFound` (and writes nothing) if the project or the
/// assignee does not exist. The status is always [`TaskStatus::INITIAL`].
pub async fn create_task(pool: &DbPool, input: &CreateTask) -> AppResult<Task> {
    let mut tx = pool.begin().await?;

    if !ProjectRepo::lock_for_reference(&mut *tx, input.project_id).await? {
        return Err(CoreError::ReferenceNotFound {
            entity: "Project",
            id: input.project_id,
        }
        .into());
    }
    if let Some(assignee_id) = input.assignee_id {
        require_assignee(&mut *tx, assignee_id).await?;
    }

    let id = TaskRepo::create(&mut *tx, input, TaskStatus::INITIAL.id()).await?;
    let task = TaskRepo::find_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| CoreError::Internal(format!("Task {id} vanished after insert")))?;

    tx.commit().await?;

    tracing::info!(
        task_id = id,
        project_id = input.project_id,
        assignee_id = ?input.assignee_id,
        "Task created"
    );
    Ok(task)
}

/// Apply a partial update.
///
/// `status_id` must name an existing task status. `assignee_id` follows the
/// tri-state of [`UpdateTask::assignee_id`]; a new assignee must exist.
pub async fn update_task(pool: &DbPool, id: DbId, input: &UpdateTask) -> AppResult<Task> {
    let mut tx = pool.begin().await?;

    if let Some(status_id) = input.status_id {
        if !StatusRepo::task_status_exists(&mut *tx, status_id).await? {
            return Err(CoreError::ReferenceNotFound {
                entity: "TaskStatus",
                id: status_id.into(),
            }
            .into());
        }
    }
    if let Some(Some(assignee_id)) = input.assignee_id {
        require_assignee(&mut *tx, assignee_id).await?;
    }

    if !TaskRepo::update(&mut *tx, id, input).await? {
        return Err(not_found(id).into());
    }
    let task = TaskRepo::find_by_id(&mut *tx, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    tx.commit().await?;

    match input.assignee_id {
        Some(None) => tracing::info!(task_id = id, "Task unassigned"),
        Some(Some(user_id)) => tracing::info!(task_id = id, user_id, "Task reassigned"),
        None => {}
    }
    tracing::info!(task_id = id, status_id = task.status_id, "Task updated");
    Ok(task)
}

pub async fn delete_task(pool: &DbPool, id: DbId) -> AppResult<()> {
    if !TaskRepo::delete(pool, id).await? {
        return Err(not_found(id).into());
    }
    tracing::info!(task_id = id, "Task deleted");
    Ok(())
}
