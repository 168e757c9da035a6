//! Orchestration services for the board bounded context.

mod drag;
mod store;

pub use drag::{DropEvent, apply_drop};
pub use store::BoardStore;
