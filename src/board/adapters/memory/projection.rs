//! In-memory view projection.
//!
//! Keeps the latest snapshot of each column as delivered to the
//! [`BoardObserver`] port. Useful for tests and headless front ends.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{Column, Thing, ThingId},
    ports::{BoardObserver, ColumnSnapshot},
};

/// Thread-safe projection of the board's columns.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjection {
    state: Arc<RwLock<ProjectionState>>,
}

#[derive(Debug, Default)]
struct ProjectionState {
    columns: HashMap<Column, ColumnSnapshot>,
    deliveries: usize,
}

impl InMemoryProjection {
    /// Creates an empty projection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the projected things of `column` in display order.
    ///
    /// Columns that never received a snapshot project as empty.
    #[must_use]
    pub fn things(&self, column: Column) -> Vec<Thing> {
        self.read(|state| {
            state
                .columns
                .get(&column)
                .map(|snapshot| snapshot.things.clone())
                .unwrap_or_default()
        })
    }

    /// Returns the projected identifiers of `column` in display order.
    #[must_use]
    pub fn ids(&self, column: Column) -> Vec<ThingId> {
        self.read(|state| {
            state
                .columns
                .get(&column)
                .map(ColumnSnapshot::ids)
                .unwrap_or_default()
        })
    }

    /// Returns the revision of the snapshot held for `column`.
    #[must_use]
    pub fn revision(&self, column: Column) -> Option<u64> {
        self.read(|state| state.columns.get(&column).map(|snapshot| snapshot.revision))
    }

    /// Returns how many snapshots have been applied.
    #[must_use]
    pub fn deliveries(&self) -> usize {
        self.read(|state| state.deliveries)
    }

    fn read<T: Default>(&self, f: impl FnOnce(&ProjectionState) -> T) -> T {
        self.state.read().map(|state| f(&state)).unwrap_or_default()
    }
}

impl BoardObserver for InMemoryProjection {
    fn column_changed(&self, snapshot: &ColumnSnapshot) {
        let Ok(mut state) = self.state.write() else {
            tracing::warn!(column = %snapshot.column, "projection state poisoned; dropping snapshot");
            return;
        };
        let is_stale = state
            .columns
            .get(&snapshot.column)
            .is_some_and(|current| current.revision > snapshot.revision);
        if is_stale {
            tracing::debug!(
                column = %snapshot.column,
                revision = snapshot.revision,
                "ignoring stale column snapshot"
            );
            return;
        }
        state.columns.insert(snapshot.column, snapshot.clone());
        state.deliveries = state.deliveries.saturating_add(1);
    }
}
