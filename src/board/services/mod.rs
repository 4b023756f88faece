//! Application services for board orchestration.

mod controller;
mod transfer;

pub use controller::{
    BoardController, BoardError, BoardResult, CreateThingRequest, EditThingRequest,
};
pub use transfer::{DropEvent, DropOperation, TransferOutcome, TransferResolver};
