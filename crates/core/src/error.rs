use crate::types::EntityId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: EntityId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// The request is well-formed but the referenced data cannot satisfy it,
    /// e.g. a reminder for a debt whose client has no phone number.
    #[error("Precondition failed: {0}")]
    PreconditionFailed(String),
}

impl CoreError {
    /// Shorthand for [`CoreError::NotFound`] from any string-like id.
    pub fn not_found(entity: &'static str, id: impl Into<EntityId>) -> Self {
        CoreError::NotFound {
            entity,
            id: id.into(),
        }
    }
}
