//! Shared helpers for in-memory board integration tests.

use std::collections::HashSet;
use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::board::{
    adapters::memory::InMemoryProjection,
    domain::{Column, ThingId},
    services::BoardController,
};

/// Controller type used across integration tests.
pub type TestController = BoardController<DefaultClock>;

/// Provides a controller over an empty board.
#[fixture]
pub fn controller() -> TestController {
    BoardController::new(Arc::new(DefaultClock))
}

/// Provides a controller with an attached in-memory projection.
///
/// # Errors
///
/// Returns an error if the projection cannot be subscribed.
pub fn observed_controller() -> eyre::Result<(TestController, InMemoryProjection)> {
    let controller = BoardController::new(Arc::new(DefaultClock));
    let projection = InMemoryProjection::new();
    controller.subscribe(Arc::new(projection.clone()))?;
    Ok((controller, projection))
}

/// Returns the identifiers of `column` in display order.
///
/// # Errors
///
/// Returns an error if the board lock is poisoned.
pub fn column_ids(controller: &TestController, column: Column) -> eyre::Result<Vec<ThingId>> {
    Ok(controller.snapshot(column)?.ids())
}

/// Asserts that no identity appears in two columns and that every thing is
/// tagged with the column holding it.
///
/// # Errors
///
/// Returns an error describing the first violation found.
pub fn assert_unique_placement(controller: &TestController) -> eyre::Result<()> {
    let mut seen = HashSet::new();
    for snapshot in controller.board_snapshot()? {
        for thing in &snapshot.things {
            eyre::ensure!(
                seen.insert(thing.id()),
                "{} appears in more than one column",
                thing.id()
            );
            eyre::ensure!(
                thing.column() == snapshot.column,
                "{} is tagged {} but stored in {}",
                thing.id(),
                thing.column(),
                snapshot.column
            );
        }
    }
    Ok(())
}
