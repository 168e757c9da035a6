//! Board projection: four fixed status columns holding ordered tasks.

use super::{Task, TaskId, TaskStatus};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// An ordered sequence of tasks sharing one status.
///
/// Order is display order only; it is not persisted by the remote API and is
/// rebuilt from server ordering on every full fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    status: TaskStatus,
    tasks: Vec<Task>,
}

impl Column {
    /// Creates an empty column for the given status.
    #[must_use]
    const fn new(status: TaskStatus) -> Self {
        Self {
            status,
            tasks: Vec::new(),
        }
    }

    /// Returns the status keying this column.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the column holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns `true` when a task with the given identifier is present.
    #[must_use]
    pub fn contains(&self, id: &TaskId) -> bool {
        self.tasks.iter().any(|task| task.id() == id)
    }

    /// Appends a task to the end of the column.
    fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Inserts a task at the given index, clamped to `[0, len]`.
    ///
    /// Splice semantics: subsequent tasks shift one position right.
    fn insert_clamped(&mut self, index: usize, task: Task) {
        let clamped = index.min(self.tasks.len());
        self.tasks.insert(clamped, task);
    }

    /// Removes and returns the task with the given identifier, if present.
    fn remove(&mut self, id: &TaskId) -> Option<Task> {
        let position = self.tasks.iter().position(|task| task.id() == id)?;
        Some(self.tasks.remove(position))
    }

    /// Replaces the task with the given identifier, returning `true` when a
    /// replacement happened.
    fn replace(&mut self, id: &TaskId, replacement: Task) -> bool {
        self.tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .map(|slot| *slot = replacement)
            .is_some()
    }
}

/// Per-column and total task counts, as surfaced on dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSummary {
    /// Tasks not yet started.
    pub todo: usize,
    /// Tasks underway.
    pub in_progress: usize,
    /// Tasks awaiting review.
    pub review: usize,
    /// Completed tasks.
    pub done: usize,
    /// Tasks across all columns.
    pub total: usize,
}

/// Client-side projection of all tasks, bucketed by status.
///
/// The four columns always exist, even when empty, and every task sits in
/// exactly the column matching its status. The board is a derived,
/// rebuildable cache of server state and is never persisted itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    todo: Column,
    in_progress: Column,
    review: Column,
    done: Column,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates a board with four empty columns.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            todo: Column::new(TaskStatus::Todo),
            in_progress: Column::new(TaskStatus::InProgress),
            review: Column::new(TaskStatus::Review),
            done: Column::new(TaskStatus::Done),
        }
    }

    /// Buckets a full task list into columns by status, preserving order.
    #[must_use]
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut board = Self::new();
        for task in tasks {
            board.insert_task(task);
        }
        board
    }

    /// Returns the column keyed by the given status.
    #[must_use]
    pub const fn column(&self, status: TaskStatus) -> &Column {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Review => &self.review,
            TaskStatus::Done => &self.done,
        }
    }

    fn column_mut(&mut self, status: TaskStatus) -> &mut Column {
        match status {
            TaskStatus::Todo => &mut self.todo,
            TaskStatus::InProgress => &mut self.in_progress,
            TaskStatus::Review => &mut self.review,
            TaskStatus::Done => &mut self.done,
        }
    }

    /// Returns the columns in canonical order.
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        [&self.todo, &self.in_progress, &self.review, &self.done].into_iter()
    }

    /// Appends a task to the end of the column matching its status.
    pub fn insert_task(&mut self, task: Task) {
        self.column_mut(task.status()).push(task);
    }

    /// Removes and returns the task with the given identifier from the named
    /// column. Returns `None` when the task is not in that column.
    pub fn remove_task(&mut self, id: &TaskId, column: TaskStatus) -> Option<Task> {
        self.column_mut(column).remove(id)
    }

    /// Moves a task between columns with splice insertion semantics.
    ///
    /// Locates the task in the source column; when absent the board is left
    /// unchanged and `false` is returned (stale drag events are expected and
    /// not an error). Otherwise the task is removed from the source column,
    /// its status is set to the destination with a refreshed change
    /// timestamp, and it is inserted at `new_index` in the destination
    /// column, clamped to the column length.
    pub fn move_task(
        &mut self,
        id: &TaskId,
        from: TaskStatus,
        to: TaskStatus,
        new_index: usize,
        clock: &impl Clock,
    ) -> bool {
        let Some(mut task) = self.column_mut(from).remove(id) else {
            return false;
        };
        task.set_status(to, clock);
        self.column_mut(to).insert_clamped(new_index, task);
        true
    }

    /// Replaces the task with the given identifier inside the named column,
    /// leaving column membership unchanged.
    ///
    /// The replacement's status is aligned to the column key so the
    /// status-equals-column invariant holds even when the caller passes an
    /// edited record carrying a different status. Returns `false` when no
    /// task with the identifier is in the column.
    pub fn replace_task(&mut self, id: &TaskId, column: TaskStatus, mut task: Task) -> bool {
        task.align_status(column);
        self.column_mut(column).replace(id, task)
    }

    /// Returns the number of tasks across all columns.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.columns().map(Column::len).sum()
    }

    /// Returns `true` when no column holds any task.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns().all(Column::is_empty)
    }

    /// Returns per-column and total task counts.
    #[must_use]
    pub fn summary(&self) -> BoardSummary {
        let todo = self.todo.len();
        let in_progress = self.in_progress.len();
        let review = self.review.len();
        let done = self.done.len();
        BoardSummary {
            todo,
            in_progress,
            review,
            done,
            total: todo + in_progress + review + done,
        }
    }
}
