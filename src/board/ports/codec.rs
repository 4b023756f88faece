//! Codec port for drag-and-drop transfer payloads.

use crate::board::domain::Thing;
use thiserror::Error;

/// Result type for transfer codec operations.
pub type TransferResult<T> = Result<T, TransferError>;

/// Encodes and decodes things carried by a drag session.
pub trait TransferCodec: Send + Sync {
    /// Type identifier the payload is published under.
    fn type_identifier(&self) -> &str;

    /// Encodes a thing into a drag payload.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::Malformed`] when the thing cannot be
    /// represented in the payload format.
    fn encode(&self, thing: &Thing) -> TransferResult<Vec<u8>>;

    /// Decodes a drag payload published under `type_identifier`.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::UnsupportedType`] for a foreign type
    /// identifier, [`TransferError::PayloadTooLarge`] for oversized
    /// payloads, and [`TransferError::Malformed`] when decoding fails.
    fn decode(&self, type_identifier: &str, payload: &[u8]) -> TransferResult<Thing>;
}

/// Errors returned by transfer codecs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransferError {
    /// The payload could not be decoded into a thing.
    #[error("malformed transfer payload: {0}")]
    Malformed(String),

    /// The payload exceeds the configured size limit.
    #[error("transfer payload of {actual_bytes} bytes exceeds limit of {limit_bytes} bytes")]
    PayloadTooLarge {
        /// The payload size in bytes.
        actual_bytes: usize,
        /// The maximum accepted size in bytes.
        limit_bytes: usize,
    },

    /// The payload was published under a type this codec does not read.
    #[error("unsupported transfer type: {0}")]
    UnsupportedType(String),
}

impl TransferError {
    /// Wraps a decoding failure.
    pub fn malformed(err: impl std::fmt::Display) -> Self {
        Self::Malformed(err.to_string())
    }
}
