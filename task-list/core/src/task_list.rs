use crate::task::Task;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered collection of tasks. Tasks are only ever appended, so an index stays valid once handed out.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Appends a task to the end of the list
    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Looks up the task at a zero-based position.
    /// Returns `None` for negative positions and positions past the end.
    pub fn get_task(&self, index: i64) -> Option<&Task> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.tasks.get(index))
    }

    /// Mutable counterpart of [`TaskList::get_task`]
    pub fn get_task_mut(&mut self, index: i64) -> Option<&mut Task> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.tasks.get_mut(index))
    }

    pub fn size(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
