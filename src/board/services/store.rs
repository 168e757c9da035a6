//! Board store: optimistic local mutation plus remote synchronization.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use mockable::Clock;
use tracing::warn;

use crate::board::{
    domain::{Board, BoardDomainError, BoardSummary, Task, TaskDraft, TaskId, TaskStatus},
    ports::TaskGateway,
};

/// User-visible message recorded when a full fetch fails.
const FETCH_ERROR: &str = "Failed to fetch tasks";

/// Session-authoritative board state synchronized with the remote task API.
///
/// Constructed explicitly and injected wherever the UI needs it; cloning is
/// cheap and clones share the same state. All mutators apply their local
/// change first, then issue the matching remote request. Only [`get_board`]
/// surfaces failures (via the observable error field); mutation-sync
/// failures are logged and swallowed, leaving the local state optimistic
/// until the next full fetch reconciles it. No public method returns an
/// error for a remote failure and none panics.
///
/// [`get_board`]: Self::get_board
pub struct BoardStore<G, C>
where
    G: TaskGateway,
    C: Clock + Send + Sync,
{
    gateway: Arc<G>,
    clock: Arc<C>,
    state: Arc<RwLock<StoreState>>,
}

impl<G, C> Clone for BoardStore<G, C>
where
    G: TaskGateway,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            clock: Arc::clone(&self.clock),
            state: Arc::clone(&self.state),
        }
    }
}

#[derive(Debug)]
struct StoreState {
    board: Board,
    loading: bool,
    error: Option<String>,
}

impl<G, C> BoardStore<G, C>
where
    G: TaskGateway,
    C: Clock + Send + Sync,
{
    /// Creates a store with an empty board.
    #[must_use]
    pub fn new(gateway: Arc<G>, clock: Arc<C>) -> Self {
        Self {
            gateway,
            clock,
            state: Arc::new(RwLock::new(StoreState {
                board: Board::new(),
                loading: false,
                error: None,
            })),
        }
    }

    /// Fetches the full task list and rebuilds the board from it.
    ///
    /// The replacement is atomic: observers see either the previous board or
    /// the fully rebuilt one, never a partial mix. On failure the board keeps
    /// its last-known-good content and the error field is set; a later
    /// success clears it. The loading flag is raised for the duration of the
    /// call.
    pub async fn get_board(&self) {
        self.write_state().loading = true;
        let outcome = self.gateway.list_tasks().await;
        let mut state = self.write_state();
        state.loading = false;
        match outcome {
            Ok(tasks) => {
                state.board = Board::from_tasks(tasks);
                state.error = None;
            }
            Err(err) => {
                warn!(error = %err, "board fetch failed, keeping last-known state");
                state.error = Some(FETCH_ERROR.to_owned());
            }
        }
    }

    /// Appends a task to the target column and creates it remotely.
    ///
    /// The task's status is aligned to the target column before insertion.
    /// The column reflects the new task before the create request resolves;
    /// a failed create is logged and not rolled back.
    pub async fn add_task(&self, mut task: Task, column: TaskStatus) {
        if task.status() != column {
            task.set_status(column, &*self.clock);
        }
        self.write_state().board.insert_task(task.clone());
        if let Err(err) = self.gateway.create_task(&task).await {
            warn!(task_id = %task.id(), error = %err, "task create sync failed");
        }
    }

    /// Validates a draft, appends the resulting task to the target column,
    /// and creates it remotely. Returns the generated task identifier.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardDomainError`] when the draft fails validation; the
    /// board is left unchanged in that case.
    pub async fn create_task(
        &self,
        draft: TaskDraft,
        column: TaskStatus,
    ) -> Result<TaskId, BoardDomainError> {
        let task = Task::from_draft(draft, &*self.clock)?;
        let id = task.id().clone();
        self.add_task(task, column).await;
        Ok(id)
    }

    /// Moves a task between columns and patches its status remotely.
    ///
    /// The local move is applied synchronously with splice insertion
    /// semantics (index clamped to the destination length). When the task is
    /// not present in the stated source column the call is a silent no-op
    /// and no patch is sent — stale drag events are expected. A failed patch
    /// is logged and not rolled back.
    pub async fn move_task(
        &self,
        id: &TaskId,
        from: TaskStatus,
        to: TaskStatus,
        new_index: usize,
    ) {
        let moved = self
            .write_state()
            .board
            .move_task(id, from, to, new_index, &*self.clock);
        if !moved {
            return;
        }
        if let Err(err) = self.gateway.update_status(id, to).await {
            warn!(task_id = %id, status = %to, error = %err, "task move sync failed");
        }
    }

    /// Replaces a task in place within the named column and patches the full
    /// field set remotely.
    ///
    /// Column membership is unchanged; the replacement's status is aligned
    /// to the column key. A silent no-op when the task is not in the column.
    pub async fn update_task_in_column(&self, id: &TaskId, column: TaskStatus, task: Task) {
        let replaced = self
            .write_state()
            .board
            .replace_task(id, column, task.clone());
        if !replaced {
            return;
        }
        if let Err(err) = self.gateway.update_task(&task).await {
            warn!(task_id = %id, error = %err, "task update sync failed");
        }
    }

    /// Removes a task from the named column and deletes it remotely.
    ///
    /// A silent no-op when the task is not in the column; no delete request
    /// is sent in that case. A failed delete is logged and not rolled back.
    pub async fn delete_task(&self, id: &TaskId, column: TaskStatus) {
        let removed = self.write_state().board.remove_task(id, column);
        if removed.is_none() {
            return;
        }
        if let Err(err) = self.gateway.delete_task(id).await {
            warn!(task_id = %id, error = %err, "task delete sync failed");
        }
    }

    /// Replaces the board wholesale without validation.
    ///
    /// Test hook and external-synchronization escape hatch; the caller is
    /// responsible for preserving the board invariants.
    pub fn set_board(&self, board: Board) {
        self.write_state().board = board;
    }

    /// Returns a snapshot of the current board.
    #[must_use]
    pub fn board(&self) -> Board {
        self.read_state().board.clone()
    }

    /// Returns the current fetch error message, if any.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.read_state().error.clone()
    }

    /// Returns `true` while a full fetch is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.read_state().loading
    }

    /// Returns per-column and total task counts for the current board.
    #[must_use]
    pub fn summary(&self) -> BoardSummary {
        self.read_state().board.summary()
    }

    // A poisoned lock means a panic elsewhere while holding the guard; the
    // board data itself is still structurally sound, so recover the guard
    // rather than propagating the poison.
    fn read_state(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
