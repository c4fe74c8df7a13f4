use std::fmt;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Longest description a task accepts, counted in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 50;

/// Smallest priority that can be explicitly assigned. Zero means "no priority".
pub const MIN_PRIORITY: i32 = 1;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    #[error("Description exceeds the maximum length of {max}")]
    DescriptionTooLong { max: usize, actual: usize },
    #[error("Priority must be greater than {}", .min - 1)]
    PriorityTooLow { min: i32, actual: i32 },
}

/// A single unit of work: a bounded description, a completion flag and an optional priority.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "UncheckedTask"))]
pub struct Task {
    description: String,
    done: bool,
    priority: i32,
}

impl Task {
    /// Creates an open task with no priority.
    /// Returns an error if the description is longer than [`MAX_DESCRIPTION_LENGTH`].
    pub fn new(description: impl Into<String>) -> Result<Self, TaskError> {
        let description = description.into();
        check_description(&description)?;
        Ok(Task {
            description,
            done: false,
            priority: 0,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Gets the priority, 0 when none has been assigned
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Replaces the description, leaving the task untouched if the new one is too long
    pub fn set_description(&mut self, description: impl Into<String>) -> Result<(), TaskError> {
        let description = description.into();
        check_description(&description)?;
        self.description = description;
        Ok(())
    }

    pub fn set_done(&mut self, done: bool) {
        self.done = done;
    }

    /// Assigns a priority, rejecting anything below [`MIN_PRIORITY`]
    pub fn set_priority(&mut self, priority: i32) -> Result<(), TaskError> {
        if priority < MIN_PRIORITY {
            return Err(TaskError::PriorityTooLow {
                min: MIN_PRIORITY,
                actual: priority,
            });
        }
        self.priority = priority;
        Ok(())
    }
}

fn check_description(description: &str) -> Result<(), TaskError> {
    let length = description.chars().count();
    if length > MAX_DESCRIPTION_LENGTH {
        return Err(TaskError::DescriptionTooLong {
            max: MAX_DESCRIPTION_LENGTH,
            actual: length,
        });
    }
    Ok(())
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)?;
        if self.priority != 0 {
            write!(f, " Pr{}", self.priority)?;
        }
        if self.done {
            write!(f, " DONE")?;
        }
        Ok(())
    }
}

/// Wire shape of a task before the validation rules have been applied.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct UncheckedTask {
    description: String,
    #[serde(default)]
    done: bool,
    #[serde(default)]
    priority: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<UncheckedTask> for Task {
    type Error = TaskError;

    fn try_from(unchecked: UncheckedTask) -> Result<Self, Self::Error> {
        let mut task = Task::new(unchecked.description)?;
        task.set_done(unchecked.done);
        if unchecked.priority != 0 {
            task.set_priority(unchecked.priority)?;
        }
        Ok(task)
    }
}
