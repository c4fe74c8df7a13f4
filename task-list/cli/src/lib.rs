//! Interactive front end for the task list: command parsing, the read-evaluate loop,
//! JSON file storage and configuration.
pub mod command;
pub mod config;
pub mod interpreter;
pub mod storage;

pub use command::{Command, CommandError};
pub use interpreter::Interpreter;
pub use storage::{JsonFileStorage, StorageError, TaskStorage};
