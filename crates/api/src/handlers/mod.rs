//! HTTP handlers, one module per resource.

pub mod auth;
pub mod dashboard;
pub mod messages;
pub mod profile;
pub mod projects;
pub mod skills;
