//! Lifecycle services.
//!
//! Handlers parse and validate requests, then call into these functions,
//! which own the transaction boundaries and the relationship checks.

pub mod project;
pub mod task;
pub mod user;
