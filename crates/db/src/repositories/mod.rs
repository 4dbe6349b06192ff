//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods.
//! Methods take any `PgExecutor` so callers can pass `&PgPool` directly or
//! `&mut *tx` to run several calls inside one transaction.

pub mod project_repo;
pub mod status_repo;
pub mod task_repo;
pub mod user_repo;

pub use project_repo::ProjectRepo;
pub use status_repo::StatusRepo;
pub use task_repo::TaskRepo;
pub use user_repo::UserRepo;
