//! In-memory adapters for the board.

mod projection;

pub use projection::InMemoryProjection;
