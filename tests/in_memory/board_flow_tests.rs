//! End-to-end board flows against a live in-memory gateway.

use std::io;

use corkboard::board::{
    adapters::memory::InMemoryTaskGateway,
    domain::{TaskDraft, TaskPriority, TaskStatus},
};
use rstest::rstest;
use tokio::runtime::Runtime;

use crate::in_memory::helpers::{gateway, runtime, server_task, store_for, task_id};

/// Tests that fetching buckets server tasks into their status columns.
#[rstest]
fn fetch_populates_board_from_server(
    runtime: io::Result<Runtime>,
) -> Result<(), eyre::Report> {
    let rt = runtime?;
    let gateway = InMemoryTaskGateway::seeded([
        server_task("t1", TaskStatus::Todo),
        server_task("p1", TaskStatus::InProgress),
        server_task("d1", TaskStatus::Done),
    ]);
    let store = store_for(&gateway);

    rt.block_on(store.get_board());

    let board = store.board();
    assert_eq!(board.column(TaskStatus::Todo).len(), 1);
    assert_eq!(board.column(TaskStatus::InProgress).len(), 1);
    assert_eq!(board.column(TaskStatus::Review).len(), 0);
    assert_eq!(board.column(TaskStatus::Done).len(), 1);
    assert!(store.error().is_none());
    Ok(())
}

/// Tests the full card lifecycle: fetch, move to done, then delete.
#[rstest]
fn moves_and_deletes_propagate_to_the_server(
    runtime: io::Result<Runtime>,
) -> Result<(), eyre::Report> {
    let rt = runtime?;
    let gateway = InMemoryTaskGateway::seeded([server_task("t1", TaskStatus::Todo)]);
    let store = store_for(&gateway);
    rt.block_on(store.get_board());

    rt.block_on(store.move_task(&task_id("t1"), TaskStatus::Todo, TaskStatus::Done, 0));

    let stored = gateway
        .stored_task(&task_id("t1"))?
        .ok_or_else(|| eyre::eyre!("task missing"))?;
    assert_eq!(stored.status(), TaskStatus::Done);
    assert!(store.board().column(TaskStatus::Done).contains(&task_id("t1")));

    rt.block_on(store.delete_task(&task_id("t1"), TaskStatus::Done));

    assert!(gateway.stored_task(&task_id("t1"))?.is_none());
    assert!(store.board().is_empty());
    Ok(())
}

/// Tests that a created draft lands in the requested column on both sides.
#[rstest]
fn created_draft_persists_with_the_column_status(
    runtime: io::Result<Runtime>,
    gateway: InMemoryTaskGateway,
) -> Result<(), eyre::Report> {
    let rt = runtime?;
    let store = store_for(&gateway);

    let draft = TaskDraft::new("Sketch the sprint board", "project-1")
        .with_priority(TaskPriority::High)
        .with_assignee("user-3");
    let id = rt.block_on(store.create_task(draft, TaskStatus::Review))?;

    assert!(store.board().column(TaskStatus::Review).contains(&id));
    let stored = gateway
        .stored_task(&id)?
        .ok_or_else(|| eyre::eyre!("task missing"))?;
    assert_eq!(stored.status(), TaskStatus::Review);
    assert_eq!(stored.priority(), TaskPriority::High);
    assert_eq!(stored.title().as_str(), "Sketch the sprint board");
    Ok(())
}

/// Tests that an in-column edit overwrites the server record.
#[rstest]
fn edits_overwrite_the_server_record(
    runtime: io::Result<Runtime>,
) -> Result<(), eyre::Report> {
    let rt = runtime?;
    let gateway = InMemoryTaskGateway::seeded([server_task("t1", TaskStatus::Review)]);
    let store = store_for(&gateway);
    rt.block_on(store.get_board());

    let edited = server_task("t1", TaskStatus::Review);
    rt.block_on(store.update_task_in_column(&task_id("t1"), TaskStatus::Review, edited.clone()));

    let stored = gateway
        .stored_task(&task_id("t1"))?
        .ok_or_else(|| eyre::eyre!("task missing"))?;
    assert_eq!(stored, edited);
    Ok(())
}

/// Tests that a refetch after local mutations lands on the server's view.
#[rstest]
fn refetch_converges_on_the_server_state(
    runtime: io::Result<Runtime>,
) -> Result<(), eyre::Report> {
    let rt = runtime?;
    let gateway = InMemoryTaskGateway::seeded([
        server_task("t1", TaskStatus::Todo),
        server_task("t2", TaskStatus::Todo),
    ]);
    let store = store_for(&gateway);
    rt.block_on(store.get_board());

    rt.block_on(store.move_task(&task_id("t1"), TaskStatus::Todo, TaskStatus::InProgress, 0));
    rt.block_on(store.delete_task(&task_id("t2"), TaskStatus::Todo));
    let before_refetch = store.board();

    rt.block_on(store.get_board());

    let remaining = gateway.stored_tasks()?;
    assert_eq!(remaining.len(), 1);
    let summary = store.board().summary();
    assert_eq!(summary.in_progress, 1);
    assert_eq!(summary.total, 1);
    assert_eq!(before_refetch.summary().total, 1);
    Ok(())
}
