//! Domain types, form validation, and the auth error taxonomy for the
//! portfolio backend.
//!
//! Nothing in this crate performs I/O. The document store lives in
//! `folio-db`, the HTTP surface and auth session in `folio-api`.

pub mod auth;
pub mod error;
pub mod forms;
pub mod skill;
pub mod types;
pub mod validation;
