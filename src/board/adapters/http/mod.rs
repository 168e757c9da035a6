//! HTTP gateway adapter speaking the remote task API's REST wire format.

mod gateway;
mod models;

pub use gateway::HttpTaskGateway;
pub use models::{StatusPatch, TaskPatch, TaskRecord};
