//! In-memory gateway adapter for tests and offline development.

mod gateway;

pub use gateway::InMemoryTaskGateway;
