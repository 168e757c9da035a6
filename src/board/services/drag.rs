//! Translation of drag-and-drop drop results into store moves.

use mockable::Clock;

use super::BoardStore;
use crate::board::{
    domain::{TaskId, TaskStatus},
    ports::TaskGateway,
};

/// Drop result emitted by a drag-and-drop controller.
///
/// The controller owns no state; it only reports where a card was picked up
/// and where it landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropEvent {
    task_id: TaskId,
    source: TaskStatus,
    source_index: usize,
    destination: TaskStatus,
    destination_index: usize,
}

impl DropEvent {
    /// Creates a drop event from controller coordinates.
    #[must_use]
    pub const fn new(
        task_id: TaskId,
        source: TaskStatus,
        source_index: usize,
        destination: TaskStatus,
        destination_index: usize,
    ) -> Self {
        Self {
            task_id,
            source,
            source_index,
            destination,
            destination_index,
        }
    }

    /// Returns the dragged task's identifier.
    #[must_use]
    pub const fn task_id(&self) -> &TaskId {
        &self.task_id
    }

    /// Returns the column the card was picked up from.
    #[must_use]
    pub const fn source(&self) -> TaskStatus {
        self.source
    }

    /// Returns the column the card was dropped into.
    #[must_use]
    pub const fn destination(&self) -> TaskStatus {
        self.destination
    }

    /// Returns the zero-based insertion index within the destination column.
    #[must_use]
    pub const fn destination_index(&self) -> usize {
        self.destination_index
    }

    /// Returns `true` when the card was dropped back where it started.
    #[must_use]
    pub fn is_same_position(&self) -> bool {
        self.source == self.destination && self.source_index == self.destination_index
    }
}

/// Applies a drop to the store, suppressing same-position drops.
///
/// Returns `true` when the event was forwarded to the store. Drops landing
/// exactly where the card started never reach the store, mirroring the
/// controller contract.
pub async fn apply_drop<G, C>(store: &BoardStore<G, C>, event: &DropEvent) -> bool
where
    G: TaskGateway,
    C: Clock + Send + Sync,
{
    if event.is_same_position() {
        return false;
    }
    store
        .move_task(
            event.task_id(),
            event.source(),
            event.destination(),
            event.destination_index(),
        )
        .await;
    true
}
