//! Core domain model for the task list: validated tasks and their ordered collection.
pub mod task;
pub mod task_list;

pub use task::{MAX_DESCRIPTION_LENGTH, MIN_PRIORITY, Task, TaskError};
pub use task_list::TaskList;
