//! Error types for board domain validation and parsing.

use super::ThingId;
use thiserror::Error;

/// Errors returned by board domain operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// No column on the board holds the thing.
    #[error("thing not found: {0}")]
    ThingNotFound(ThingId),

    /// A thing with the same identifier is already on the board.
    #[error("duplicate thing identifier: {0}")]
    DuplicateThing(ThingId),

    /// The identifier text is not a UUID.
    #[error("invalid thing identifier '{0}'")]
    InvalidThingId(String),

    /// The title is missing or empty while the board requires one.
    #[error("thing title must not be empty")]
    EmptyTitle,
}

/// Error returned while parsing column tags.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown column: {0}")]
pub struct ParseColumnError(pub String);
