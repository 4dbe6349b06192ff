//! Task entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskboard_core::status::StatusId;
use taskboard_core::types::{DbId, Timestamp};

use crate::models::status::StatusEntry;

/// A `tasks` row joined with its status, project and assignee names.
#[derive(Debug, Clone, FromRow)]
pub struct TaskRow {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<Timestamp>,
    pub project_id: DbId,
    pub assignee_id: Option<DbId>,
    pub status_id: StatusId,
    pub status_name: String,
    pub project_name: String,
    pub assignee_name: Option<String>,
    pub assignee_role: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Display projection of the owning project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskProject {
    pub id: DbId,
    pub name: String,
}

/// Display projection of the assigned user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskAssignee {
    pub id: DbId,
    pub name: String,
    pub role: String,
}

/// Task as returned to API clients, enriched with related display names.
#[derive(Debug, Clone, Serialize)]
pub struct Task {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<Timestamp>,
    pub project_id: DbId,
    pub assignee_id: Option<DbId>,
    pub status_id: StatusId,
    pub status: StatusEntry,
    pub project: TaskProject,
    pub assignee: Option<TaskAssignee>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        // The LEFT JOIN yields name/role only when the user row exists.
        let assignee = match (row.assignee_id, row.assignee_name, row.assignee_role) {
            (Some(id), Some(name), Some(role)) => Some(TaskAssignee { id, name, role }),
            _ => None,
        };

        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            due_date: row.due_date,
            project_id: row.project_id,
            assignee_id: row.assignee_id,
            status_id: row.status_id,
            status: StatusEntry {
                id: row.status_id,
                name: row.status_name,
            },
            project: TaskProject {
                id: row.project_id,
                name: row.project_name,
            },
            assignee,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// DTO for creating a new task. The status is always the initial one.
#[derive(Debug, Clone)]
pub struct CreateTask {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<Timestamp>,
    pub project_id: DbId,
    pub assignee_id: Option<DbId>,
}

/// DTO for updating an existing task. All fields are optional.
///
/// `assignee_id` is tri-state:
/// - `None` leaves the assignee untouched,
/// - `Some(None)` unassigns the task,
/// - `Some(Some(id))` reassigns it to user `id`.
#[derive(Debug, Clone, Default)]
pub struct UpdateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<Timestamp>,
    pub status_id: Option<StatusId>,
    pub assignee_id: Option<Option<DbId>>,
}

/// Query parameters for `GET /tasks` (`?project_id=&assignee_id=`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskFilter {
    pub project_id: Option<DbId>,
    pub assignee_id: Option<DbId>,
}
