//! Gateway port for the remote task API.

use crate::board::domain::{Task, TaskId, TaskStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task gateway operations.
pub type TaskGatewayResult<T> = Result<T, TaskGatewayError>;

/// Remote task API contract.
///
/// The gateway is treated as a black box: request in, decoded tasks or an
/// error out. The store layered on top applies its own failure policy (keep
/// last-known-good state, log swallowed sync failures); implementations only
/// report what happened.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskGateway: Send + Sync {
    /// Fetches the full task list.
    ///
    /// # Errors
    ///
    /// Returns a [`TaskGatewayError`] on transport failure, a non-success
    /// HTTP status, or an undecodable payload.
    async fn list_tasks(&self) -> TaskGatewayResult<Vec<Task>>;

    /// Creates a task remotely, returning the record the server stored.
    ///
    /// # Errors
    ///
    /// Returns a [`TaskGatewayError`] when the create request fails.
    async fn create_task(&self, task: &Task) -> TaskGatewayResult<Task>;

    /// Patches only the status of an existing task (board move).
    ///
    /// # Errors
    ///
    /// Returns a [`TaskGatewayError`] when the patch request fails.
    async fn update_status(&self, id: &TaskId, status: TaskStatus) -> TaskGatewayResult<()>;

    /// Patches the full field set of an existing task (edit form).
    ///
    /// # Errors
    ///
    /// Returns a [`TaskGatewayError`] when the patch request fails.
    async fn update_task(&self, task: &Task) -> TaskGatewayResult<()>;

    /// Deletes a task remotely.
    ///
    /// # Errors
    ///
    /// Returns a [`TaskGatewayError`] when the delete request fails.
    async fn delete_task(&self, id: &TaskId) -> TaskGatewayResult<()>;
}

/// Errors returned by task gateway implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskGatewayError {
    /// The request never produced a usable response (network, timeout).
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The remote API answered with a non-success status.
    #[error("remote task API returned HTTP {status}: {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// The response decoded into something other than the expected shape.
    #[error("malformed task payload: {0}")]
    Payload(String),
}

impl TaskGatewayError {
    /// Wraps a transport-level error.
    #[must_use]
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
