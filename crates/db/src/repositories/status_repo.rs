//! Repository for the `project_statuses` and `task_statuses` lookup tables.

use sqlx::PgExecutor;
use taskboard_core::status::{ProjectStatus, StatusId, TaskStatus};

use crate::models::status::StatusEntry;
use crate::DbPool;

/// Read access to the status registries, plus the idempotent seed.
pub struct StatusRepo;

impl StatusRepo {
    /// List all project statuses in id order.
    pub async fn list_project_statuses<'e>(
        executor: impl PgExecutor<'e>,
    ) -> Result<Vec<StatusEntry>, sqlx::Error> {
        sqlx::query_as::<_, StatusEntry>("SELECT id, name FROM project_statuses ORDER BY id")
            .fetch_all(executor)
            .await
    }

    /// List all task statuses in id order.
    pub async fn list_task_statuses<'e>(
        executor: impl PgExecutor<'e>,
    ) -> Result<Vec<StatusEntry>, sqlx::Error> {
        sqlx::query_as::<_, StatusEntry>("SELECT id, name FROM task_statuses ORDER BY id")
            .fetch_all(executor)
            .await
    }

    /// Whether `id` names a row in `project_statuses`.
    pub async fn project_status_exists<'e>(
        executor: impl PgExecutor<'e>,
        id: StatusId,
    ) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM project_statuses WHERE id = $1)")
                .bind(id)
                .fetch_one(executor)
                .await?;
        Ok(exists)
    }

    /// Whether `id` names a row in `task_statuses`.
    pub async fn task_status_exists<'e>(
        executor: impl PgExecutor<'e>,
        id: StatusId,
    ) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM task_statuses WHERE id = $1)")
                .bind(id)
                .fetch_one(executor)
                .await?;
        Ok(exists)
    }

    /// Make sure every registry entry known to the code exists in the database.
    ///
    /// Existing rows are left alone, so this is safe to run on every start.
    /// Returns the number of rows inserted.
    pub async fn ensure_seeded(pool: &DbPool) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut inserted = 0;

        for status in ProjectStatus::ALL {
            inserted += sqlx::query(
                "INSERT INTO project_statuses (id, name) VALUES ($1, $2) \
                 ON CONFLICT (id) DO NOTHING",
            )
            .bind(status.id())
            .bind(status.name())
            .execute(&mut *tx)
            .await?
            .rows_affected();
        }

        for status in TaskStatus::ALL {
            inserted += sqlx::query(
                "INSERT INTO task_statuses (id, name) VALUES ($1, $2) \
                 ON CONFLICT (id) DO NOTHING",
            )
            .bind(status.id())
            .bind(status.name())
            .execute(&mut *tx)
            .await?
            .rows_affected();
        }

        tx.commit().await?;

        if inserted > 0 {
            tracing::info!(inserted, "Seeded missing status registry rows");
        }
        Ok(inserted)
    }
}
