//! Portfolio API server library.
//!
//! Exposes the building blocks (config, state, auth session, synchronized
//! collections, error handling, routes) so integration tests and the binary
//! entrypoint share them.

pub mod auth;
pub mod collections;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
