use crate::types::DocumentId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound {
        entity: &'static str,
        id: DocumentId,
    },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}
