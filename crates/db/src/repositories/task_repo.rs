//! Repository for the `tasks` table.

use sqlx::PgExecutor;
use taskboard_core::status::StatusId;
use taskboard_core::types::DbId;

use crate::models::task::{CreateTask, Task, TaskFilter, TaskRow, UpdateTask};

/// Enriched task projection: status, project and (optional) assignee names.
const SELECT_DETAIL: &str = "SELECT \
        t.id, t.title, t.description, t.due_date, t.project_id, t.assignee_id, t.status_id, \
        ts.name AS status_name, \
        p.name AS project_name, \
        u.name AS assignee_name, \
        u.role AS assignee_role, \
        t.created_at, t.updated_at \
     FROM tasks t \
     JOIN task_statuses ts ON ts.id = t.status_id \
     JOIN projects p ON p.id = t.project_id \
     LEFT JOIN users u ON u.id = t.assignee_id";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task with the given status, returning its ID.
    ///
    /// Callers are expected to have checked the project and assignee
    /// references; a dangling one surfaces as a foreign-key violation.
    pub async fn create<'e>(
        executor: impl PgExecutor<'e>,
        input: &CreateTask,
        status_id: StatusId,
    ) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO tasks (title, description, due_date, project_id, assignee_id, status_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id",
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.due_date)
        .bind(input.project_id)
        .bind(input.assignee_id)
        .bind(status_id)
        .fetch_one(executor)
        .await?;
        Ok(id)
    }

    /// Find an enriched task by its ID.
    pub async fn find_by_id<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("{SELECT_DETAIL} WHERE t.id = $1");
        let row = sqlx::query_as::<_, TaskRow>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await?;
        Ok(row.map(Task::from))
    }

    /// List enriched tasks, optionally narrowed by project and/or assignee.
    pub async fn list<'e>(
        executor: impl PgExecutor<'e>,
        filter: &TaskFilter,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "{SELECT_DETAIL} \
             WHERE ($1::BIGINT IS NULL OR t.project_id = $1) \
               AND ($2::BIGINT IS NULL OR t.assignee_id = $2) \
             ORDER BY t.id"
        );
        let rows = sqlx::query_as::<_, TaskRow>(&query)
            .bind(filter.project_id)
            .bind(filter.assignee_id)
            .fetch_all(executor)
            .await?;
        Ok(rows.into_iter().map(Task::from).collect())
    }

    /// Count the tasks owned by a project.
    pub async fn count_by_project<'e>(
        executor: impl PgExecutor<'e>,
        project_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tasks WHERE project_id = $1")
            .bind(project_id)
            .fetch_one(executor)
            .await?;
        Ok(count)
    }

    /// Update a task. Only non-`None` fields in `input` are applied.
    ///
    /// The assignee column follows the tri-state in [`UpdateTask::assignee_id`]:
    /// omitted keeps it, `Some(None)` clears it, `Some(Some(id))` sets it.
    /// Returns `true` if the row was updated.
    pub async fn update<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE tasks SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                due_date = COALESCE($4, due_date),
                status_id = COALESCE($5, status_id),
                assignee_id = CASE WHEN $6::BOOLEAN THEN $7::BIGINT ELSE assignee_id END
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.due_date)
        .bind(input.status_id)
        .bind(input.assignee_id.is_some())
        .bind(input.assignee_id.flatten())
        .execute(executor)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete a task by ID. Returns `true` if a row was removed.
    pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
