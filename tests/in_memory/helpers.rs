//! Shared test helpers for in-memory gateway integration tests.

#![expect(
    clippy::expect_used,
    reason = "Fixture builders use expect on literals known to be valid"
)]

use std::io;
use std::sync::Arc;

use chrono::{TimeZone, Utc};
use corkboard::board::{
    adapters::memory::InMemoryTaskGateway,
    domain::{ProjectId, RemoteTaskData, Task, TaskId, TaskPriority, TaskStatus, TaskTitle},
    services::BoardStore,
};
use mockable::DefaultClock;
use rstest::fixture;
use tokio::runtime::Runtime;

/// Store wired to an in-memory gateway.
pub type InMemoryStore = BoardStore<InMemoryTaskGateway, DefaultClock>;

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Provides a fresh in-memory gateway for each test.
#[fixture]
pub fn gateway() -> InMemoryTaskGateway {
    InMemoryTaskGateway::new()
}

/// Wires a store to the given gateway, sharing the gateway's state.
pub fn store_for(gateway: &InMemoryTaskGateway) -> InMemoryStore {
    BoardStore::new(Arc::new(gateway.clone()), Arc::new(DefaultClock))
}

/// Builds a server-shaped task with fixed timestamps.
///
/// # Panics
///
/// Panics when the literal arguments fail domain validation.
pub fn server_task(id: &str, status: TaskStatus) -> Task {
    let timestamp = Utc
        .with_ymd_and_hms(2024, 5, 14, 9, 30, 0)
        .single()
        .expect("valid fixture timestamp");
    Task::from_remote(RemoteTaskData {
        id: TaskId::new(id).expect("valid fixture task id"),
        title: TaskTitle::new(format!("Task {id}")).expect("valid fixture title"),
        description: None,
        status,
        priority: TaskPriority::Medium,
        due_date: None,
        project_id: ProjectId::new("project-1").expect("valid fixture project id"),
        assignee: None,
        created_at: timestamp,
        updated_at: timestamp,
    })
}

/// Parses a task identifier from a literal.
///
/// # Panics
///
/// Panics when the literal is not a valid identifier.
pub fn task_id(raw: &str) -> TaskId {
    TaskId::new(raw).expect("valid task id literal")
}
