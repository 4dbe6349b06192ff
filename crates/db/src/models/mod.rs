//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` row struct matching the (joined) query result
//! - A `Serialize` entity struct returned to API clients
//! - A create DTO for inserts
//! - An update DTO (all `Option` fields) for patches

pub mod project;
pub mod status;
pub mod task;
pub mod user;
