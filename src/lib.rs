//! Corkboard: kanban board state synchronization.
//!
//! This crate provides the client-side core of a project-management kanban
//! view: an in-memory projection of tasks grouped into ordered status
//! columns, kept synchronized with a remote task API under user-driven
//! mutations (add, move, edit, delete).
//!
//! # Architecture
//!
//! Corkboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board and task model with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for the remote task API
//! - **Adapters**: Concrete implementations of ports (HTTP, in-memory)
//!
//! # Modules
//!
//! - [`board`]: Board projection, task model, and store synchronization

pub mod board;
