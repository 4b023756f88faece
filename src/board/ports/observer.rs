//! Observer port through which views receive column snapshots.

use crate::board::domain::{Column, Thing, ThingId};

/// Ordered contents of one column as of a board revision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSnapshot {
    /// Board revision the snapshot was taken at.
    pub revision: u64,
    /// Column the snapshot describes.
    pub column: Column,
    /// Things in display order.
    pub things: Vec<Thing>,
}

impl ColumnSnapshot {
    /// Returns the identifiers in display order.
    #[must_use]
    pub fn ids(&self) -> Vec<ThingId> {
        self.things.iter().map(Thing::id).collect()
    }
}

/// Read-only consumer of board changes.
///
/// Observers hold no mutation rights. Each mutation delivers one snapshot
/// per column it touched, after the mutation has fully completed.
/// Deliveries from concurrent mutations may arrive out of order; compare
/// [`ColumnSnapshot::revision`] to discard stale ones.
#[cfg_attr(test, mockall::automock)]
pub trait BoardObserver: Send + Sync {
    /// Receives the new contents of a column.
    fn column_changed(&self, snapshot: &ColumnSnapshot);
}
