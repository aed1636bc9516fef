pub mod list;
pub mod task;

pub use list::{ListKind, TaskList};
pub use task::Task;
