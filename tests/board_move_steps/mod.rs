//! Step definitions for board move behaviour tests.

pub mod given;
pub mod when;
pub mod world;
