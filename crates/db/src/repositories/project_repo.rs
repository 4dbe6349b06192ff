//! Repository for the `projects` table.

use sqlx::PgExecutor;
use taskboard_core::status::StatusId;
use taskboard_core::types::DbId;

use crate::models::project::{CreateProject, Project, ProjectRow, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, description, start_date, end_date, status_id, created_at, updated_at";

/// Projection of a `p`-aliased project row plus its status name.
const JOINED_COLUMNS: &str = "p.id, p.name, p.description, p.start_date, p.end_date, \
                              p.status_id, ps.name AS status_name, p.created_at, p.updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project with the given status, returning the created row.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        input: &CreateProject,
        status_id: StatusId,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "WITH p AS (
                INSERT INTO projects (name, description, start_date, end_date, status_id)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING {COLUMNS}
             )
             SELECT {JOINED_COLUMNS} FROM p
             JOIN project_statuses ps ON ps.id = p.status_id"
        );
        let row = sqlx::query_as::<_, ProjectRow>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(status_id)
            .fetch_one(executor)
            .await?;
        Ok(row.into())
    }

    /// Find a project by its ID.
    pub async fn find_by_id<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM projects p
             JOIN project_statuses ps ON ps.id = p.status_id
             WHERE p.id = $1"
        );
        let row = sqlx::query_as::<_, ProjectRow>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(row.map(Project::from))
    }

    /// List all projects in creation order.
    pub async fn list<'e>(executor: impl PgExecutor<'e>) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM projects p
             JOIN project_statuses ps ON ps.id = p.status_id
             ORDER BY p.id"
        );
        let rows = sqlx::query_as::<_, ProjectRow>(&query)
            .fetch_all(executor)
            .await?;
        Ok(rows.into_iter().map(Project::from).collect())
    }

    /// Lock a project row against deletion for the rest of the transaction.
    ///
    /// Returns `false` if no such project exists. Used before inserting rows
    /// that reference the project.
    pub async fn lock_for_reference<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let row: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM projects WHERE id = $1 FOR KEY SHARE")
                .bind(id)
                .fetch_optional(executor)
                .await?;
        Ok(row.is_some())
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "WITH p AS (
                UPDATE projects SET
                    name = COALESCE($2, name),
                    description = COALESCE($3, description),
                    start_date = COALESCE($4, start_date),
                    end_date = COALESCE($5, end_date),
                    status_id = COALESCE($6, status_id)
                WHERE id = $1
                RETURNING {COLUMNS}
             )
             SELECT {JOINED_COLUMNS} FROM p
             JOIN project_statuses ps ON ps.id = p.status_id"
        );
        let row = sqlx::query_as::<_, ProjectRow>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.status_id)
            .fetch_optional(executor)
            .await?;
        Ok(row.map(Project::from))
    }

    /// Permanently delete a project by ID. Its tasks go with it (FK cascade).
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
