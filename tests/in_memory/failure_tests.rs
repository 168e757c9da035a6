//! Degraded-gateway behaviour: local mutations survive sync failures and the
//! next successful fetch converges on the server's view.

use std::io;

use corkboard::board::{
    adapters::memory::InMemoryTaskGateway,
    domain::{TaskDraft, TaskStatus},
};
use rstest::rstest;
use tokio::runtime::Runtime;

use crate::in_memory::helpers::{gateway, runtime, server_task, store_for, task_id};

/// Tests that a failed fetch keeps the last good board and flags the error.
#[rstest]
fn failed_fetch_preserves_last_good_board(
    runtime: io::Result<Runtime>,
) -> Result<(), eyre::Report> {
    let rt = runtime?;
    let gateway = InMemoryTaskGateway::seeded([server_task("t1", TaskStatus::Todo)]);
    let store = store_for(&gateway);
    rt.block_on(store.get_board());
    let last_good = store.board();

    gateway.set_failing(true);
    rt.block_on(store.get_board());

    assert_eq!(store.board(), last_good);
    assert_eq!(store.error(), Some("Failed to fetch tasks".to_owned()));
    assert!(!store.is_loading());
    Ok(())
}

/// Tests that a later successful fetch clears the error flag.
#[rstest]
fn recovered_fetch_clears_the_error(
    runtime: io::Result<Runtime>,
) -> Result<(), eyre::Report> {
    let rt = runtime?;
    let gateway = InMemoryTaskGateway::seeded([server_task("t1", TaskStatus::Todo)]);
    let store = store_for(&gateway);

    gateway.set_failing(true);
    rt.block_on(store.get_board());
    assert!(store.error().is_some());

    gateway.set_failing(false);
    rt.block_on(store.get_board());

    assert!(store.error().is_none());
    assert_eq!(store.board().task_count(), 1);
    Ok(())
}

/// Tests that an unsynced create stays local until the next fetch drops it.
#[rstest]
fn unsynced_create_heals_on_refetch(
    runtime: io::Result<Runtime>,
    gateway: InMemoryTaskGateway,
) -> Result<(), eyre::Report> {
    let rt = runtime?;
    let store = store_for(&gateway);

    gateway.set_failing(true);
    let id = rt.block_on(store.create_task(
        TaskDraft::new("Unsynced card", "project-1"),
        TaskStatus::Todo,
    ))?;

    // The optimistic insert is visible locally but never reached the server.
    assert!(store.board().column(TaskStatus::Todo).contains(&id));
    gateway.set_failing(false);
    assert!(gateway.stored_task(&id)?.is_none());

    rt.block_on(store.get_board());

    assert!(store.board().is_empty());
    Ok(())
}

/// Tests that an unsynced move is rolled back by the next fetch.
#[rstest]
fn unsynced_move_heals_on_refetch(
    runtime: io::Result<Runtime>,
) -> Result<(), eyre::Report> {
    let rt = runtime?;
    let gateway = InMemoryTaskGateway::seeded([server_task("t1", TaskStatus::Todo)]);
    let store = store_for(&gateway);
    rt.block_on(store.get_board());

    gateway.set_failing(true);
    rt.block_on(store.move_task(&task_id("t1"), TaskStatus::Todo, TaskStatus::Done, 0));

    assert!(store.board().column(TaskStatus::Done).contains(&task_id("t1")));

    gateway.set_failing(false);
    let server_side = gateway
        .stored_task(&task_id("t1"))?
        .ok_or_else(|| eyre::eyre!("task missing"))?;
    assert_eq!(server_side.status(), TaskStatus::Todo);

    rt.block_on(store.get_board());

    assert!(store.board().column(TaskStatus::Todo).contains(&task_id("t1")));
    assert!(store.board().column(TaskStatus::Done).is_empty());
    Ok(())
}

/// Tests that an unsynced delete resurrects the card on the next fetch.
#[rstest]
fn unsynced_delete_heals_on_refetch(
    runtime: io::Result<Runtime>,
) -> Result<(), eyre::Report> {
    let rt = runtime?;
    let gateway = InMemoryTaskGateway::seeded([server_task("t1", TaskStatus::Done)]);
    let store = store_for(&gateway);
    rt.block_on(store.get_board());

    gateway.set_failing(true);
    rt.block_on(store.delete_task(&task_id("t1"), TaskStatus::Done));

    assert!(store.board().is_empty());

    gateway.set_failing(false);
    assert!(gateway.stored_task(&task_id("t1"))?.is_some());

    rt.block_on(store.get_board());

    assert!(store.board().column(TaskStatus::Done).contains(&task_id("t1")));
    Ok(())
}

/// Tests that mutation failures never surface through the fetch error slot.
#[rstest]
fn mutation_failures_do_not_set_the_fetch_error(
    runtime: io::Result<Runtime>,
) -> Result<(), eyre::Report> {
    let rt = runtime?;
    let gateway = InMemoryTaskGateway::seeded([server_task("t1", TaskStatus::Todo)]);
    let store = store_for(&gateway);
    rt.block_on(store.get_board());

    gateway.set_failing(true);
    rt.block_on(store.move_task(&task_id("t1"), TaskStatus::Todo, TaskStatus::Done, 0));
    rt.block_on(store.delete_task(&task_id("t1"), TaskStatus::Done));

    assert!(store.error().is_none());
    Ok(())
}
