//! `serde_json` implementation of the [`TransferCodec`] port.

use super::TransferRecord;
use crate::board::{
    config::BoardConfig,
    domain::Thing,
    ports::{TransferCodec, TransferError, TransferResult},
};

/// JSON codec for drag payloads.
#[derive(Debug, Clone, Default)]
pub struct JsonTransferCodec {
    config: BoardConfig,
}

impl JsonTransferCodec {
    /// Creates a codec with the given configuration.
    #[must_use]
    pub const fn new(config: BoardConfig) -> Self {
        Self { config }
    }

    /// Returns the codec configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }
}

impl TransferCodec for JsonTransferCodec {
    fn type_identifier(&self) -> &str {
        &self.config.transfer_type_identifier
    }

    fn encode(&self, thing: &Thing) -> TransferResult<Vec<u8>> {
        serde_json::to_vec(&TransferRecord::from(thing)).map_err(TransferError::malformed)
    }

    fn decode(&self, type_identifier: &str, payload: &[u8]) -> TransferResult<Thing> {
        if type_identifier != self.config.transfer_type_identifier {
            return Err(TransferError::UnsupportedType(type_identifier.to_owned()));
        }
        let limit_bytes = self.config.max_transfer_payload_bytes;
        if payload.len() > limit_bytes {
            return Err(TransferError::PayloadTooLarge {
                actual_bytes: payload.len(),
                limit_bytes,
            });
        }
        let record: TransferRecord =
            serde_json::from_slice(payload).map_err(TransferError::malformed)?;
        Thing::try_from(record)
    }
}
