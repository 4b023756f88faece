//! JSON transfer codec.
//!
//! Reads and writes the drag payload record: `id`, `title`,
//! `description`, `state`, `dueDate`, `updatedAt`.

mod record;
mod transfer;

pub use record::TransferRecord;
pub use transfer::JsonTransferCodec;
