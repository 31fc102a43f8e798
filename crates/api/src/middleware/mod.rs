//! Request extractors and guards.

pub mod auth;
