//! Task board state management.
//!
//! Things live in one of three ordered columns (todo, doing, done). The
//! board controller owns every mutation and delivers ordered column
//! snapshots to read-only observers; the transfer resolver turns completed
//! drag-and-drop gestures into single atomic moves. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Shared configuration in [`config`]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
