//! Document store boundary and per-entity repositories.
//!
//! - [`store::DocumentStore`] -- the four operations the application needs
//!   from the hosted document database.
//! - [`firestore::FirestoreStore`] -- Firestore REST v1 implementation.
//! - [`memory::MemoryStore`] -- in-process implementation for local
//!   development and tests.
//! - [`repositories`] -- typed, stateless access per entity.

pub mod config;
pub mod document;
pub mod error;
pub mod firestore;
pub mod memory;
pub mod models;
pub mod repositories;
pub mod store;

pub use document::{Direction, Document, FieldAccess, FieldValue, Fields, OrderBy};
pub use error::StoreError;
pub use store::DocumentStore;

/// Collection names in the hosted database.
pub mod collections {
    pub const PROJECTS: &str = "projects";
    pub const SKILLS: &str = "skills";
    pub const MESSAGES: &str = "messages";
    pub const PROFILE: &str = "profile";
}
