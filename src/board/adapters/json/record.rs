//! Wire record for drag payloads.

use crate::board::{
    domain::{Column, Thing, ThingId},
    ports::TransferError,
};
use serde::{Deserialize, Serialize};

/// Serialized form of a thing inside a drag payload.
///
/// Every field is optional on the wire. `description` carries the thing's
/// detail text and `state` carries its column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRecord {
    /// Thing identifier as UUID text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Detail text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Column name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Due date in seconds since the Unix epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<f64>,
    /// Advisory last-updated marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl From<&Thing> for TransferRecord {
    fn from(thing: &Thing) -> Self {
        Self {
            id: Some(thing.id().to_string()),
            title: thing.title().map(str::to_owned),
            description: thing.detail().map(str::to_owned),
            state: Some(thing.column().as_str().to_owned()),
            due_date: thing.due_date(),
            updated_at: thing.updated_at().map(str::to_owned),
        }
    }
}

impl TryFrom<TransferRecord> for Thing {
    type Error = TransferError;

    fn try_from(record: TransferRecord) -> Result<Self, Self::Error> {
        let raw_id = record
            .id
            .ok_or_else(|| TransferError::Malformed("missing id".to_owned()))?;
        let id = ThingId::parse(&raw_id).map_err(TransferError::malformed)?;
        let raw_state = record
            .state
            .ok_or_else(|| TransferError::Malformed("missing state".to_owned()))?;
        let column = Column::try_from(raw_state.as_str()).map_err(TransferError::malformed)?;

        let mut thing = Self::with_id(id, column);
        if let Some(title) = record.title {
            thing = thing.with_title(title);
        }
        if let Some(detail) = record.description {
            thing = thing.with_detail(detail);
        }
        if let Some(due_date) = record.due_date {
            thing = thing.with_due_date(due_date);
        }
        if let Some(updated_at) = record.updated_at {
            thing = thing.with_updated_at(updated_at);
        }
        Ok(thing)
    }
}
