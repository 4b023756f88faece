//! Shared world state for board move BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::board::{
    adapters::json::JsonTransferCodec,
    domain::{Column, ThingId},
    services::{BoardController, BoardError, TransferResolver},
};

/// Resolver type used by the BDD world.
pub type TestResolver = TransferResolver<DefaultClock, JsonTransferCodec>;

/// Scenario world for board move behaviour tests.
pub struct BoardWorld {
    pub resolver: TestResolver,
    pub things: HashMap<String, ThingId>,
    pub last_result: Option<Result<(), BoardError>>,
}

impl BoardWorld {
    /// Creates a world over an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            resolver: TransferResolver::new(
                BoardController::new(Arc::new(DefaultClock)),
                Arc::new(JsonTransferCodec::default()),
            ),
            things: HashMap::new(),
            last_result: None,
        }
    }

    /// Returns the controller behind the resolver.
    #[must_use]
    pub fn controller(&self) -> &BoardController<DefaultClock> {
        self.resolver.controller()
    }

    /// Looks up a thing created earlier in the scenario by title.
    ///
    /// # Errors
    ///
    /// Returns an error if no thing with that title was created.
    pub fn thing_id(&self, title: &str) -> eyre::Result<ThingId> {
        self.things
            .get(title)
            .copied()
            .ok_or_else(|| eyre::eyre!("no thing titled {title} in scenario world"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Parses a column name used in feature files.
///
/// # Errors
///
/// Returns an error if the name is not a board column.
pub fn parse_column(name: &str) -> eyre::Result<Column> {
    Column::try_from(name).map_err(|err| eyre::eyre!("invalid column in scenario: {err}"))
}
