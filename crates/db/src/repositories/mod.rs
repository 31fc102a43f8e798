//! Stateless repositories, one per collection.
//!
//! Each repository is a zero-sized struct whose methods take the
//! [`DocumentStore`](crate::store::DocumentStore) as their first argument.

pub mod message_repo;
pub mod profile_repo;
pub mod project_repo;
pub mod skill_repo;

pub use message_repo::MessageRepo;
pub use profile_repo::ProfileRepo;
pub use project_repo::ProjectRepo;
pub use skill_repo::SkillRepo;
