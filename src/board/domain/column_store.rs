//! Ordered storage for the things of one column.

use super::{Column, Thing, ThingId};

/// Ordered sequence of things belonging to a single column.
///
/// The order is the only notion of position exposed to views. A store never
/// holds two things with the same identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnStore {
    column: Column,
    things: Vec<Thing>,
}

impl ColumnStore {
    /// Creates an empty store for `column`.
    #[must_use]
    pub const fn new(column: Column) -> Self {
        Self {
            column,
            things: Vec::new(),
        }
    }

    /// Returns the column tag of this store.
    #[must_use]
    pub const fn column(&self) -> Column {
        self.column
    }

    /// Returns the number of things in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.things.len()
    }

    /// Returns `true` when the column holds no things.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.things.is_empty()
    }

    /// Returns an owned copy of the current order.
    ///
    /// The returned vector is detached from the store; later mutations are
    /// not reflected in it.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Thing> {
        self.things.clone()
    }

    /// Iterates the things in order.
    pub fn iter(&self) -> impl Iterator<Item = &Thing> {
        self.things.iter()
    }

    /// Returns `true` when the column holds the thing.
    #[must_use]
    pub fn contains(&self, id: ThingId) -> bool {
        self.position(id).is_some()
    }

    /// Returns the zero-based position of the thing.
    #[must_use]
    pub fn position(&self, id: ThingId) -> Option<usize> {
        self.things.iter().position(|thing| thing.id() == id)
    }

    /// Returns the thing with the given identifier.
    #[must_use]
    pub fn get(&self, id: ThingId) -> Option<&Thing> {
        self.things.iter().find(|thing| thing.id() == id)
    }

    /// Returns the thing with the given identifier for in-place edits.
    pub fn get_mut(&mut self, id: ThingId) -> Option<&mut Thing> {
        self.things.iter_mut().find(|thing| thing.id() == id)
    }

    /// Inserts `thing` at `index`, shifting later things right.
    ///
    /// Out-of-range indices are clamped rather than rejected: a negative
    /// index inserts at the front and an index past the end appends. Drop
    /// targets may be stale by the time they are applied.
    ///
    /// Returns the position the thing was inserted at.
    pub fn insert(&mut self, thing: Thing, index: isize) -> usize {
        let position = clamp_index(index, self.things.len());
        self.things.insert(position, thing);
        position
    }

    /// Appends `thing` to the end of the column.
    ///
    /// Returns the position the thing was inserted at.
    pub fn append(&mut self, thing: Thing) -> usize {
        self.things.push(thing);
        self.things.len().saturating_sub(1)
    }

    /// Removes and returns the thing with the given identifier.
    ///
    /// Removing an absent identifier is a no-op that returns `None`.
    pub fn remove(&mut self, id: ThingId) -> Option<Thing> {
        let position = self.position(id)?;
        Some(self.things.remove(position))
    }
}

/// Clamps a possibly negative index into `[0, len]`.
pub(crate) fn clamp_index(index: isize, len: usize) -> usize {
    usize::try_from(index).map_or(0, |position| position.min(len))
}
