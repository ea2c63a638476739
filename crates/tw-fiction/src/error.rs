//! Error types for the fiction engine.

use thiserror::Error;
use tw_core::CoreError;

/// Result type for fiction operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors that can occur while running a session.
///
/// Player mistakes are not errors; they produce narration. These variants
/// signal authoring faults or references to things that do not exist.
#[derive(Debug, Error)]
pub enum FictionError {
    /// A special command was dispatched to an item that does not define it.
    #[error("cannot perform the action \"{phrase}\" on {item}")]
    UnknownAction {
        /// Item name.
        item: String,
        /// The phrase that was looked up.
        phrase: String,
    },

    /// World graph error.
    #[error(transparent)]
    Core(#[from] CoreError),
}
