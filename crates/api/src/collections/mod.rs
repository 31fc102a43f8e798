//! Synchronized collections, one per entity.
//!
//! Each collection owns a ticketed snapshot ([`state::SyncedState`]) and
//! exposes fetch plus the entity's mutators. A mutator writes through the
//! store and, on success, re-syncs the whole collection; on failure it logs
//! and returns the error without touching the snapshot.

pub mod messages;
pub mod profile;
pub mod projects;
pub mod skills;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;

pub use messages::MessagesCollection;
pub use profile::ProfileCollection;
pub use projects::ProjectsCollection;
pub use skills::SkillsCollection;
pub use state::{Phase, Snapshot};
