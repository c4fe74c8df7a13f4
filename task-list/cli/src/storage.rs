use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use task_list_core::TaskList;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("cannot access task file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("task file {path} is not a valid task list")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Durable home of the task list between sessions.
#[cfg_attr(test, mockall::automock)]
pub trait TaskStorage {
    /// Reads the stored list.
    fn load(&self) -> Result<TaskList, StorageError>;

    /// Replaces the stored list with `tasks`.
    fn save(&self, tasks: &TaskList) -> Result<(), StorageError>;
}

/// Stores the task list as a JSON document in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn format_error(&self, source: serde_json::Error) -> StorageError {
        StorageError::Format {
            path: self.path.clone(),
            source,
        }
    }
}

impl TaskStorage for JsonFileStorage {
    /// A file that does not exist yet is an empty list.
    fn load(&self) -> Result<TaskList, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("No task file at {}, starting empty", self.path.display());
                return Ok(TaskList::new());
            }
            Err(err) => return Err(self.io_error(err)),
        };
        let tasks: TaskList =
            serde_json::from_str(&contents).map_err(|err| self.format_error(err))?;
        debug!("Loaded {} tasks from {}", tasks.size(), self.path.display());
        Ok(tasks)
    }

    fn save(&self, tasks: &TaskList) -> Result<(), StorageError> {
        let file = File::create(&self.path).map_err(|err| self.io_error(err))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, tasks).map_err(|err| self.format_error(err))?;
        writer.flush().map_err(|err| self.io_error(err))?;
        debug!("Saved {} tasks to {}", tasks.size(), self.path.display());
        Ok(())
    }
}
