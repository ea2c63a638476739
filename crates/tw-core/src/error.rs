use crate::id::{ItemId, LocationId};

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when assembling or manipulating a world graph.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested location ID does not exist in the world.
    #[error("location not found: {0}")]
    LocationNotFound(LocationId),

    /// The requested item ID does not exist in the world.
    #[error("item not found: {0}")]
    ItemNotFound(ItemId),

    /// A precondition could not be built from its authored form.
    #[error("invalid precondition: {0}")]
    InvalidPrecondition(String),

    /// A story file could not be read or written.
    #[error("story format error: {0}")]
    Format(#[from] serde_json::Error),
}
