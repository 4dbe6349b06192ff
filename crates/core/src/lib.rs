//! Domain types and pure logic for the taskboard backend.
//!
//! Nothing in this crate touches the database or the network.

pub mod error;
pub mod status;
pub mod types;
pub mod validation;
