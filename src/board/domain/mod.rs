//! Domain model for the kanban board projection.
//!
//! Models tasks, the four fixed status columns, and the board invariants
//! (exhaustive partition of tasks by status, clamped splice insertion) while
//! keeping all transport concerns outside of the domain boundary.

mod column;
mod draft;
mod error;
mod ids;
mod task;

pub use column::{Board, BoardSummary, Column};
pub use draft::TaskDraft;
pub use error::{BoardDomainError, ParseTaskPriorityError, ParseTaskStatusError};
pub use ids::{ProjectId, TaskId, UserId};
pub use task::{RemoteTaskData, Task, TaskPriority, TaskStatus, TaskTitle};
