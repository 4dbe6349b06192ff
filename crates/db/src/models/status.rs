//! Status registry rows.

use serde::Serialize;
use sqlx::FromRow;
use taskboard_core::status::StatusId;

/// One `(id, name)` entry of a status lookup table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct StatusEntry {
    pub id: StatusId,
    pub name: String,
}
