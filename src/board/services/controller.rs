//! Board controller: the single owner of board mutations.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::board::{
    config::BoardConfig,
    domain::{Board, BoardDomainError, Column, MoveOutcome, Thing, ThingId, ThingPatch},
    ports::{BoardObserver, ColumnSnapshot, TransferError},
};
use mockable::Clock;
use thiserror::Error;

/// Request payload for creating a thing.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateThingRequest {
    id: Option<ThingId>,
    column: Column,
    title: Option<String>,
    detail: Option<String>,
    due_date: Option<f64>,
}

impl CreateThingRequest {
    /// Creates a request for a thing in `column`.
    #[must_use]
    pub const fn new(column: Column) -> Self {
        Self {
            id: None,
            column,
            title: None,
            detail: None,
            due_date: None,
        }
    }

    /// Uses a caller-chosen identifier instead of a fresh one.
    #[must_use]
    pub const fn with_id(mut self, id: ThingId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the detail text.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Sets the due date in seconds since the Unix epoch.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: f64) -> Self {
        self.due_date = Some(due_date);
        self
    }

    fn into_thing(self) -> Thing {
        let mut thing = Thing::with_id(self.id.unwrap_or_default(), self.column);
        if let Some(title) = self.title {
            thing = thing.with_title(title);
        }
        if let Some(detail) = self.detail {
            thing = thing.with_detail(detail);
        }
        if let Some(due_date) = self.due_date {
            thing = thing.with_due_date(due_date);
        }
        thing
    }
}

/// Request payload for editing a thing. Unset fields are left untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct EditThingRequest {
    id: ThingId,
    patch: ThingPatch,
}

impl EditThingRequest {
    /// Creates an edit request that changes nothing yet.
    #[must_use]
    pub fn new(id: ThingId) -> Self {
        Self {
            id,
            patch: ThingPatch::default(),
        }
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.patch.title = Some(title.into());
        self
    }

    /// Replaces the detail text.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.patch.detail = Some(detail.into());
        self
    }

    /// Replaces the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: f64) -> Self {
        self.patch.due_date = Some(due_date);
        self
    }

    /// Returns the identifier of the thing to edit.
    #[must_use]
    pub const fn id(&self) -> ThingId {
        self.id
    }
}

/// Service-level errors for board operations.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Domain rule rejected the operation; the board is unchanged.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// A drag payload could not be decoded.
    #[error(transparent)]
    MalformedTransfer(#[from] TransferError),
    /// A thread panicked while holding the board lock.
    #[error("board state lock poisoned")]
    StatePoisoned,
}

/// Result type for board service operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// Owns the board and serializes every mutation behind one lock.
///
/// Clones share the same board. A move is a compound remove-then-insert
/// performed entirely under the write lock, so no reader ever observes a
/// thing missing from both columns. Observers are notified after the lock
/// is released.
pub struct BoardController<C>
where
    C: Clock + Send + Sync,
{
    board: Arc<RwLock<Board>>,
    observers: Arc<RwLock<Vec<Arc<dyn BoardObserver>>>>,
    clock: Arc<C>,
    config: Arc<BoardConfig>,
}

impl<C> Clone for BoardController<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            board: Arc::clone(&self.board),
            observers: Arc::clone(&self.observers),
            clock: Arc::clone(&self.clock),
            config: Arc::clone(&self.config),
        }
    }
}

impl<C> BoardController<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a controller over an empty board with default configuration.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self::with_config(clock, BoardConfig::default())
    }

    /// Creates a controller over an empty board.
    #[must_use]
    pub fn with_config(clock: Arc<C>, config: BoardConfig) -> Self {
        Self {
            board: Arc::new(RwLock::new(Board::new())),
            observers: Arc::new(RwLock::new(Vec::new())),
            clock,
            config: Arc::new(config),
        }
    }

    /// Returns the controller configuration.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Registers a view observer.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::StatePoisoned`] when the observer list lock is
    /// poisoned.
    pub fn subscribe(&self, observer: Arc<dyn BoardObserver>) -> BoardResult<()> {
        let mut observers = self.observers.write().map_err(|_| poisoned())?;
        observers.push(observer);
        Ok(())
    }

    /// Creates a thing and appends it to its column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateThing`] when a supplied
    /// identifier is already on the board, or
    /// [`BoardDomainError::EmptyTitle`] when titles are required and the
    /// request has none.
    pub fn create(&self, request: CreateThingRequest) -> BoardResult<Thing> {
        self.check_title(request.title.as_deref(), true)?;
        let thing = request.into_thing();
        let column = thing.column();

        let (created, snapshots) = {
            let mut board = self.write()?;
            let created = board.create(thing, &*self.clock)?;
            (created, collect_snapshots(&board, &[column]))
        };

        tracing::debug!(thing_id = %created.id(), %column, "created thing");
        self.notify(&snapshots);
        Ok(created)
    }

    /// Inserts an externally supplied thing into `column` at a clamped
    /// position, keeping its identifier.
    ///
    /// Returns the inserted thing and its position.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::DuplicateThing`] when the identifier is
    /// already on the board.
    pub fn insert_new(
        &self,
        thing: Thing,
        column: Column,
        index: isize,
    ) -> BoardResult<(Thing, usize)> {
        self.check_title(thing.title(), true)?;
        let (inserted, snapshots) = {
            let mut board = self.write()?;
            let inserted = board.insert_new(thing, column, index, &*self.clock)?;
            (inserted, collect_snapshots(&board, &[column]))
        };

        tracing::debug!(
            thing_id = %inserted.0.id(),
            %column,
            index = inserted.1,
            "inserted transferred thing"
        );
        self.notify(&snapshots);
        Ok(inserted)
    }

    /// Updates the supplied fields of a thing and stamps `updated_at`.
    ///
    /// The thing keeps its identifier, column and position.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::ThingNotFound`] when no column holds the
    /// thing; nothing is mutated.
    pub fn edit(&self, request: EditThingRequest) -> BoardResult<Thing> {
        self.check_title(request.patch.title.as_deref(), false)?;
        let id = request.id;

        let (edited, snapshots) = {
            let mut board = self.write()?;
            let edited = board.edit(id, request.patch, &*self.clock)?;
            let column = edited.column();
            (edited, collect_snapshots(&board, &[column]))
        };

        tracing::debug!(thing_id = %id, column = %edited.column(), "edited thing");
        self.notify(&snapshots);
        Ok(edited)
    }

    /// Moves a thing to `to` at a clamped `index`.
    ///
    /// Same-column moves reorder. The thing is located by scanning all
    /// columns, not by trusting its `column` field.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::ThingNotFound`] when no column holds the
    /// thing; nothing is mutated.
    pub fn move_thing(&self, id: ThingId, to: Column, index: isize) -> BoardResult<MoveOutcome> {
        let (outcome, snapshots) = {
            let mut board = self.write()?;
            let outcome = board.move_thing(id, to, index)?;
            let touched = if outcome.is_reorder() {
                vec![outcome.to]
            } else {
                vec![outcome.from, outcome.to]
            };
            (outcome, collect_snapshots(&board, &touched))
        };

        if outcome.is_reorder() {
            tracing::debug!(
                thing_id = %id,
                column = %outcome.to,
                from_index = outcome.from_index,
                to_index = outcome.to_index,
                "reordered thing"
            );
        } else {
            tracing::info!(
                thing_id = %id,
                from = %outcome.from,
                to = %outcome.to,
                to_index = outcome.to_index,
                "moved thing across columns"
            );
        }
        self.notify(&snapshots);
        Ok(outcome)
    }

    /// Removes a thing from whichever column holds it.
    ///
    /// Returns the removed thing, or `None` when it was not on the board.
    /// Deleting twice is the same as deleting once.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::StatePoisoned`] when the board lock is
    /// poisoned.
    pub fn delete(&self, id: ThingId) -> BoardResult<Option<Thing>> {
        let removed = {
            let mut board = self.write()?;
            board
                .delete(id)
                .map(|(column, thing)| (thing, collect_snapshots(&board, &[column])))
        };

        let Some((thing, snapshots)) = removed else {
            tracing::debug!(thing_id = %id, "delete of absent thing ignored");
            return Ok(None);
        };
        tracing::debug!(thing_id = %id, column = %thing.column(), "deleted thing");
        self.notify(&snapshots);
        Ok(Some(thing))
    }

    /// Returns the current contents of `column`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::StatePoisoned`] when the board lock is
    /// poisoned.
    pub fn snapshot(&self, column: Column) -> BoardResult<ColumnSnapshot> {
        let board = self.read()?;
        Ok(column_snapshot(&board, column))
    }

    /// Returns the contents of all three columns taken under one lock.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::StatePoisoned`] when the board lock is
    /// poisoned.
    pub fn board_snapshot(&self) -> BoardResult<Vec<ColumnSnapshot>> {
        let board = self.read()?;
        Ok(collect_snapshots(&board, &Column::ALL))
    }

    /// Finds a thing by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::StatePoisoned`] when the board lock is
    /// poisoned.
    pub fn find(&self, id: ThingId) -> BoardResult<Option<Thing>> {
        let board = self.read()?;
        Ok(board.find(id).cloned())
    }

    /// Returns the current board revision.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::StatePoisoned`] when the board lock is
    /// poisoned.
    pub fn revision(&self) -> BoardResult<u64> {
        Ok(self.read()?.revision())
    }

    fn check_title(&self, title: Option<&str>, required: bool) -> Result<(), BoardDomainError> {
        if !self.config.require_title {
            return Ok(());
        }
        match title {
            Some(value) if value.trim().is_empty() => Err(BoardDomainError::EmptyTitle),
            None if required => Err(BoardDomainError::EmptyTitle),
            _ => Ok(()),
        }
    }

    fn read(&self) -> BoardResult<RwLockReadGuard<'_, Board>> {
        self.board.read().map_err(|_| poisoned())
    }

    fn write(&self) -> BoardResult<RwLockWriteGuard<'_, Board>> {
        self.board.write().map_err(|_| poisoned())
    }

    fn notify(&self, snapshots: &[ColumnSnapshot]) {
        let observers = match self.observers.read() {
            Ok(observers) => observers.clone(),
            Err(_) => {
                tracing::warn!("observer list poisoned; skipping notification");
                return;
            }
        };
        for observer in &observers {
            for snapshot in snapshots {
                observer.column_changed(snapshot);
            }
        }
    }
}

fn poisoned() -> BoardError {
    tracing::warn!("board lock poisoned");
    BoardError::StatePoisoned
}

fn column_snapshot(board: &Board, column: Column) -> ColumnSnapshot {
    ColumnSnapshot {
        revision: board.revision(),
        column,
        things: board.store(column).snapshot(),
    }
}

fn collect_snapshots(board: &Board, columns: &[Column]) -> Vec<ColumnSnapshot> {
    columns
        .iter()
        .map(|column| column_snapshot(board, *column))
        .collect()
}
