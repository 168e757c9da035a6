//! In-memory implementation of the `TaskGateway` port.
//!
//! Provides a simple, thread-safe stand-in for the remote task API, with
//! failure injection for exercising the store's degraded paths. Not suitable
//! for production use.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{Task, TaskId, TaskStatus},
    ports::{TaskGateway, TaskGatewayError, TaskGatewayResult},
};

/// Thread-safe in-memory task gateway.
///
/// Tasks are kept in insertion order, matching the stable ordering a real
/// server returns from `GET /tasks`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskGateway {
    state: Arc<RwLock<InMemoryGatewayState>>,
}

#[derive(Debug, Default)]
struct InMemoryGatewayState {
    tasks: Vec<Task>,
    failing: bool,
}

impl InMemoryTaskGateway {
    /// Creates an empty in-memory gateway.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a gateway pre-seeded with the given tasks.
    #[must_use]
    pub fn seeded(tasks: impl IntoIterator<Item = Task>) -> Self {
        let gateway = Self::new();
        if let Ok(mut state) = gateway.state.write() {
            state.tasks = tasks.into_iter().collect();
        }
        gateway
    }

    /// Makes every subsequent request fail with a transport error until
    /// cleared.
    pub fn set_failing(&self, failing: bool) {
        if let Ok(mut state) = self.state.write() {
            state.failing = failing;
        }
    }

    /// Returns a snapshot of the server-side task list, for assertions.
    ///
    /// # Errors
    ///
    /// Returns [`TaskGatewayError::Transport`] when the internal lock is
    /// poisoned.
    pub fn stored_tasks(&self) -> TaskGatewayResult<Vec<Task>> {
        let state = read_state(&self.state)?;
        Ok(state.tasks.clone())
    }

    /// Returns the stored task with the given identifier, for assertions.
    ///
    /// # Errors
    ///
    /// Returns [`TaskGatewayError::Transport`] when the internal lock is
    /// poisoned.
    pub fn stored_task(&self, id: &TaskId) -> TaskGatewayResult<Option<Task>> {
        let state = read_state(&self.state)?;
        Ok(state.tasks.iter().find(|task| task.id() == id).cloned())
    }
}

fn read_state(
    state: &Arc<RwLock<InMemoryGatewayState>>,
) -> TaskGatewayResult<std::sync::RwLockReadGuard<'_, InMemoryGatewayState>> {
    state
        .read()
        .map_err(|err| TaskGatewayError::transport(std::io::Error::other(err.to_string())))
}

fn write_state(
    state: &Arc<RwLock<InMemoryGatewayState>>,
) -> TaskGatewayResult<std::sync::RwLockWriteGuard<'_, InMemoryGatewayState>> {
    state
        .write()
        .map_err(|err| TaskGatewayError::transport(std::io::Error::other(err.to_string())))
}

fn injected_failure() -> TaskGatewayError {
    TaskGatewayError::transport(std::io::Error::other("injected gateway failure"))
}

#[async_trait]
impl TaskGateway for InMemoryTaskGateway {
    async fn list_tasks(&self) -> TaskGatewayResult<Vec<Task>> {
        let state = read_state(&self.state)?;
        if state.failing {
            return Err(injected_failure());
        }
        Ok(state.tasks.clone())
    }

    async fn create_task(&self, task: &Task) -> TaskGatewayResult<Task> {
        let mut state = write_state(&self.state)?;
        if state.failing {
            return Err(injected_failure());
        }
        if state.tasks.iter().any(|stored| stored.id() == task.id()) {
            return Err(TaskGatewayError::Http {
                status: 409,
                body: format!("task {} already exists", task.id()),
            });
        }
        state.tasks.push(task.clone());
        Ok(task.clone())
    }

    async fn update_status(&self, id: &TaskId, status: TaskStatus) -> TaskGatewayResult<()> {
        let mut state = write_state(&self.state)?;
        if state.failing {
            return Err(injected_failure());
        }
        let stored = state
            .tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or_else(|| TaskGatewayError::Http {
                status: 404,
                body: format!("task {id} not found"),
            })?;
        stored.align_status(status);
        Ok(())
    }

    async fn update_task(&self, task: &Task) -> TaskGatewayResult<()> {
        let mut state = write_state(&self.state)?;
        if state.failing {
            return Err(injected_failure());
        }
        let slot = state
            .tasks
            .iter_mut()
            .find(|stored| stored.id() == task.id())
            .ok_or_else(|| TaskGatewayError::Http {
                status: 404,
                body: format!("task {} not found", task.id()),
            })?;
        *slot = task.clone();
        Ok(())
    }

    async fn delete_task(&self, id: &TaskId) -> TaskGatewayResult<()> {
        let mut state = write_state(&self.state)?;
        if state.failing {
            return Err(injected_failure());
        }
        let before = state.tasks.len();
        state.tasks.retain(|task| task.id() != id);
        if state.tasks.len() == before {
            return Err(TaskGatewayError::Http {
                status: 404,
                body: format!("task {id} not found"),
            });
        }
        Ok(())
    }
}
