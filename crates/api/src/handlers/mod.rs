pub mod project;
pub mod status;
pub mod task;
pub mod user;
