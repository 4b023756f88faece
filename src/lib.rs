//! Taskboard: a three-column task board core.
//!
//! This crate provides the state machine behind a to-do / doing / done
//! board: ordered columns of uniquely identified things, create, edit,
//! move and delete operations, and resolution of completed drag-and-drop
//! gestures into moves.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board rules with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for views and payload codecs
//! - **Adapters**: Concrete implementations of ports (JSON, in-memory)
//!
//! # Modules
//!
//! - [`board`]: Things, columns, the board controller and transfer resolver

pub mod board;
