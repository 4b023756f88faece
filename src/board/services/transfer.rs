//! Resolution of completed drag-and-drop gestures into board moves.

use std::sync::Arc;

use super::{BoardController, BoardError, BoardResult};
use crate::board::{
    domain::{BoardDomainError, Column, MoveOutcome, Thing, ThingId},
    ports::TransferCodec,
};
use mockable::Clock;

/// Index used when a drop lands outside any existing row.
const END_OF_COLUMN: isize = isize::MAX;

/// A completed drop of one dragged thing onto a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropEvent {
    /// Identifier of the dragged thing.
    pub dragged: ThingId,
    /// Column the thing was dropped on.
    pub destination: Column,
    /// Row the thing was dropped at, or `None` for a drop past the last row.
    pub index: Option<isize>,
}

impl DropEvent {
    /// Creates a drop at the end of `destination`.
    #[must_use]
    pub const fn new(dragged: ThingId, destination: Column) -> Self {
        Self {
            dragged,
            destination,
            index: None,
        }
    }

    /// Sets the destination row.
    #[must_use]
    pub const fn at(mut self, index: isize) -> Self {
        self.index = Some(index);
        self
    }

    /// Returns the index the move is applied at.
    #[must_use]
    pub const fn resolved_index(&self) -> isize {
        match self.index {
            Some(index) => index,
            None => END_OF_COLUMN,
        }
    }
}

/// How a drop changed the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferOutcome {
    /// The thing changed position within its column.
    Reordered(MoveOutcome),
    /// The thing moved to another column.
    Transferred(MoveOutcome),
    /// The dropped payload named a thing not on the board; it was added.
    Inserted {
        /// The inserted thing.
        thing: Thing,
        /// Position it was inserted at.
        index: usize,
    },
}

impl TransferOutcome {
    /// Returns the thing affected by the drop.
    #[must_use]
    pub const fn thing(&self) -> &Thing {
        match self {
            Self::Reordered(outcome) | Self::Transferred(outcome) => &outcome.thing,
            Self::Inserted { thing, .. } => thing,
        }
    }

    fn from_move(outcome: MoveOutcome) -> Self {
        if outcome.is_reorder() {
            Self::Reordered(outcome)
        } else {
            Self::Transferred(outcome)
        }
    }
}

/// Drag feedback shown while a drop is hovering.
///
/// Advisory only: every accepted drop is resolved as a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOperation {
    /// The drop would be rejected.
    Cancel,
    /// The drag started on the same surface.
    Move,
    /// The drag came from another surface.
    Copy,
}

/// Turns drop events and drag payloads into board moves.
pub struct TransferResolver<C, K>
where
    C: Clock + Send + Sync,
    K: TransferCodec,
{
    controller: BoardController<C>,
    codec: Arc<K>,
}

impl<C, K> Clone for TransferResolver<C, K>
where
    C: Clock + Send + Sync,
    K: TransferCodec,
{
    fn clone(&self) -> Self {
        Self {
            controller: self.controller.clone(),
            codec: Arc::clone(&self.codec),
        }
    }
}

impl<C, K> TransferResolver<C, K>
where
    C: Clock + Send + Sync,
    K: TransferCodec,
{
    /// Creates a resolver acting on `controller`.
    #[must_use]
    pub const fn new(controller: BoardController<C>, codec: Arc<K>) -> Self {
        Self { controller, codec }
    }

    /// Returns the controller drops are applied to.
    #[must_use]
    pub const fn controller(&self) -> &BoardController<C> {
        &self.controller
    }

    /// Returns the drag feedback for a hovering session.
    ///
    /// Only single-item sessions are accepted.
    #[must_use]
    pub const fn drop_proposal(item_count: usize, drag_is_local: bool) -> DropOperation {
        if item_count != 1 {
            DropOperation::Cancel
        } else if drag_is_local {
            DropOperation::Move
        } else {
            DropOperation::Copy
        }
    }

    /// Encodes a thing on the board as a drag payload.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::ThingNotFound`] when no column holds the
    /// thing, or [`BoardError::MalformedTransfer`] when encoding fails.
    pub fn begin_drag(&self, id: ThingId) -> BoardResult<Vec<u8>> {
        let thing = self
            .controller
            .find(id)?
            .ok_or(BoardDomainError::ThingNotFound(id))?;
        Ok(self.codec.encode(&thing)?)
    }

    /// Applies a drop as a single move.
    ///
    /// Same-column drops are reorders and go through the same move.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::ThingNotFound`] when the dragged thing is
    /// no longer on the board.
    pub fn resolve(&self, event: DropEvent) -> BoardResult<TransferOutcome> {
        let outcome = self.controller.move_thing(
            event.dragged,
            event.destination,
            event.resolved_index(),
        )?;
        Ok(TransferOutcome::from_move(outcome))
    }

    /// Decodes a drag payload and applies it to `destination`.
    ///
    /// A payload naming a thing already on the board moves that thing. A
    /// payload naming an unknown thing adds it at the drop position.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::MalformedTransfer`] when the payload cannot be
    /// decoded; the board is left unchanged.
    pub fn resolve_payload(
        &self,
        type_identifier: &str,
        payload: &[u8],
        destination: Column,
        index: Option<isize>,
    ) -> BoardResult<TransferOutcome> {
        let thing = self
            .codec
            .decode(type_identifier, payload)
            .inspect_err(|err| tracing::warn!(error = %err, "rejected drag payload"))?;

        let event = DropEvent {
            dragged: thing.id(),
            destination,
            index,
        };
        match self.resolve(event) {
            Err(BoardError::Domain(BoardDomainError::ThingNotFound(_))) => {
                let (inserted, position) =
                    self.controller
                        .insert_new(thing, destination, event.resolved_index())?;
                Ok(TransferOutcome::Inserted {
                    thing: inserted,
                    index: position,
                })
            }
            other => other,
        }
    }
}
