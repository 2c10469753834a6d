use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A lookup with no addressable id (e.g. "latest draft for this user").
    #[error("{0} not found")]
    Missing(&'static str),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}
