//! Kanban board state management.
//!
//! Maintains the session-authoritative, derived-from-server view of tasks
//! bucketed into four fixed status columns, and keeps that view synchronized
//! with the remote task API under user-driven mutations. Local mutations are
//! applied optimistically; synchronization is best-effort and divergence
//! heals on the next full fetch. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
