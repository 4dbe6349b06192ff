//! Project entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use taskboard_core::status::StatusId;
use taskboard_core::types::{DbId, Timestamp};

use crate::models::status::StatusEntry;

/// A `projects` row joined with its `project_statuses` name.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectRow {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub status_id: StatusId,
    pub status_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Project as returned to API clients, with its status resolved.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub status_id: StatusId,
    pub status: StatusEntry,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            start_date: row.start_date,
            end_date: row.end_date,
            status_id: row.status_id,
            status: StatusEntry {
                id: row.status_id,
                name: row.status_name,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// DTO for creating a new project.
///
/// Carries no status: new projects always start in `ProjectStatus::INITIAL`.
#[derive(Debug, Clone)]
pub struct CreateProject {
    pub name: String,
    pub description: String,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Default)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub status_id: Option<StatusId>,
}

impl UpdateProject {
    /// `true` when the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.status_id.is_none()
    }
}
