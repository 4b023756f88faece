//! Board aggregate owning the three column stores.

use super::{BoardDomainError, Column, ColumnStore, Thing, ThingId};
use mockable::Clock;

/// Field changes applied by an edit. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThingPatch {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement detail text.
    pub detail: Option<String>,
    /// Replacement due date in seconds since the Unix epoch.
    pub due_date: Option<f64>,
}

/// Result of a completed move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The moved thing, already re-tagged with its destination column.
    pub thing: Thing,
    /// Column the thing was taken from.
    pub from: Column,
    /// Position the thing occupied in the source column.
    pub from_index: usize,
    /// Destination column.
    pub to: Column,
    /// Clamped position the thing now occupies in the destination column.
    pub to_index: usize,
}

impl MoveOutcome {
    /// Returns `true` when the thing stayed in its column.
    #[must_use]
    pub fn is_reorder(&self) -> bool {
        self.from == self.to
    }
}

/// The three columns of the board.
///
/// Invariant: an identifier appears in at most one store, and a thing's
/// `column` equals the store holding it. Every mutating method either
/// completes or leaves the board untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    stores: [ColumnStore; 3],
    revision: u64,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates a board with three empty columns.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            stores: [
                ColumnStore::new(Column::Todo),
                ColumnStore::new(Column::Doing),
                ColumnStore::new(Column::Done),
            ],
            revision: 0,
        }
    }

    /// Returns the number of successful mutations applied so far.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the store for `column`.
    #[must_use]
    pub fn store(&self, column: Column) -> &ColumnStore {
        let [todo, doing, done] = &self.stores;
        match column {
            Column::Todo => todo,
            Column::Doing => doing,
            Column::Done => done,
        }
    }

    fn store_mut(&mut self, column: Column) -> &mut ColumnStore {
        let [todo, doing, done] = &mut self.stores;
        match column {
            Column::Todo => todo,
            Column::Doing => doing,
            Column::Done => done,
        }
    }

    /// Iterates the stores in board order.
    pub fn stores(&self) -> impl Iterator<Item = &ColumnStore> {
        self.stores.iter()
    }

    /// Returns the total number of things on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stores.iter().map(ColumnStore::len).sum()
    }

    /// Returns `true` when no column holds a thing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stores.iter().all(ColumnStore::is_empty)
    }

    /// Finds the column and position of a thing by scanning every store.
    ///
    /// The scan is authoritative; a thing's own `column` field is not
    /// consulted.
    #[must_use]
    pub fn locate(&self, id: ThingId) -> Option<(Column, usize)> {
        self.stores
            .iter()
            .find_map(|store| store.position(id).map(|index| (store.column(), index)))
    }

    /// Returns the thing with the given identifier.
    #[must_use]
    pub fn find(&self, id: ThingId) -> Option<&Thing> {
        self.stores.iter().find_map(|store| store.get(id))
    }

    /// Appends a new thing to the column named by its `column` field.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateThing`] when the identifier is
    /// already on the board.
    pub fn create(
        &mut self,
        mut thing: Thing,
        clock: &impl Clock,
    ) -> Result<Thing, BoardDomainError> {
        if self.locate(thing.id()).is_some() {
            return Err(BoardDomainError::DuplicateThing(thing.id()));
        }
        thing.touch(clock);
        self.store_mut(thing.column()).append(thing.clone());
        self.bump();
        Ok(thing)
    }

    /// Inserts a new thing into `column` at a clamped position.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateThing`] when the identifier is
    /// already on the board.
    pub fn insert_new(
        &mut self,
        mut thing: Thing,
        column: Column,
        index: isize,
        clock: &impl Clock,
    ) -> Result<(Thing, usize), BoardDomainError> {
        if self.locate(thing.id()).is_some() {
            return Err(BoardDomainError::DuplicateThing(thing.id()));
        }
        thing.set_column(column);
        thing.touch(clock);
        let position = self.store_mut(column).insert(thing.clone(), index);
        self.bump();
        Ok((thing, position))
    }

    /// Applies `patch` to the thing in place and stamps `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::ThingNotFound`] when no column holds the
    /// thing.
    pub fn edit(
        &mut self,
        id: ThingId,
        patch: ThingPatch,
        clock: &impl Clock,
    ) -> Result<Thing, BoardDomainError> {
        let (column, _) = self
            .locate(id)
            .ok_or(BoardDomainError::ThingNotFound(id))?;
        let thing = self
            .store_mut(column)
            .get_mut(id)
            .ok_or(BoardDomainError::ThingNotFound(id))?;

        if let Some(title) = patch.title {
            thing.set_title(title);
        }
        if let Some(detail) = patch.detail {
            thing.set_detail(detail);
        }
        if let Some(due_date) = patch.due_date {
            thing.set_due_date(due_date);
        }
        thing.touch(clock);
        let edited = thing.clone();
        self.bump();
        Ok(edited)
    }

    /// Moves a thing to `to` at a clamped `index`.
    ///
    /// The thing is removed from whichever store holds it, re-tagged, and
    /// inserted into the destination. Moving within the same column is a
    /// reorder. The index is interpreted against the destination after the
    /// removal.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::ThingNotFound`] when no column holds the
    /// thing; the board is left unchanged.
    pub fn move_thing(
        &mut self,
        id: ThingId,
        to: Column,
        index: isize,
    ) -> Result<MoveOutcome, BoardDomainError> {
        let (from, from_index) = self
            .locate(id)
            .ok_or(BoardDomainError::ThingNotFound(id))?;
        let mut thing = self
            .store_mut(from)
            .remove(id)
            .ok_or(BoardDomainError::ThingNotFound(id))?;
        thing.set_column(to);
        let to_index = self.store_mut(to).insert(thing.clone(), index);
        self.bump();
        Ok(MoveOutcome {
            thing,
            from,
            from_index,
            to,
            to_index,
        })
    }

    /// Removes the thing from whichever column holds it.
    ///
    /// Deleting an absent identifier is a no-op that returns `None`.
    pub fn delete(&mut self, id: ThingId) -> Option<(Column, Thing)> {
        let (column, _) = self.locate(id)?;
        let removed = self.store_mut(column).remove(id)?;
        self.bump();
        Some((column, removed))
    }

    const fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
