//! Port contracts for the task board.
//!
//! Ports define the boundaries to the view layer and to the drag payload
//! encoding, keeping both outside the board core.

pub mod codec;
pub mod observer;

pub use codec::{TransferCodec, TransferError, TransferResult};
pub use observer::{BoardObserver, ColumnSnapshot};

#[cfg(test)]
pub use observer::MockBoardObserver;
