//! Domain model for the task board.
//!
//! The board domain models things, their three fixed columns, ordered
//! column storage and the move rules, with no knowledge of observers or
//! transfer encodings.

mod board;
mod column;
mod column_store;
mod error;
mod ids;
mod thing;

pub use board::{Board, MoveOutcome, ThingPatch};
pub use column::Column;
pub use column_store::ColumnStore;
pub use error::{BoardDomainError, ParseColumnError};
pub use ids::ThingId;
pub use thing::Thing;
