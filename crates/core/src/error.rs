use crate::types::DbId;

/// Domain-level errors shared across the workspace.
///
/// The catalog only models one failure mode of its own: a row that does
/// not exist. Everything else (malformed JSON, constraint violations,
/// connection failures) surfaces as framework or driver errors.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },
}
