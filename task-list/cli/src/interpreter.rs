use crate::command::{self, Command, CommandError};
use crate::storage::{StorageError, TaskStorage};
use std::io::{self, BufRead, Write};
use task_list_core::{Task, TaskList};
use tracing::{debug, warn};

pub const PROMPT: &str =
    "Enter command: add <task> | done <index> | priority <priority> for <index> | list | exit";

/// Read-evaluate loop over a single task list.
///
/// The list is loaded from storage when the interpreter is created and saved
/// back exactly once when the loop ends.
pub struct Interpreter<S: TaskStorage> {
    storage: S,
    tasks: TaskList,
    exit_requested: bool,
}

impl<S: TaskStorage> Interpreter<S> {
    /// Loads the task list from `storage`, starting empty if it cannot be read.
    pub fn new(storage: S) -> Self {
        let tasks = storage.load().unwrap_or_else(|err| {
            warn!(error = ?err, "Cannot load task list, starting with an empty one");
            TaskList::new()
        });
        Self {
            storage,
            tasks,
            exit_requested: false,
        }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Runs until `exit` or end of input, then saves the list.
    ///
    /// The list is saved even when `input` or `output` fails part way; that
    /// I/O error is returned once the save has succeeded.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: W) -> anyhow::Result<()> {
        let session = self.read_commands(input, output);
        if let Err(err) = &session {
            warn!(error = ?err, "Session ended by an I/O failure, saving tasks");
        }
        self.save()?;
        Ok(session?)
    }

    fn read_commands<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> io::Result<()> {
        let mut buf = Vec::new();
        while !self.exit_requested {
            writeln!(output, "{PROMPT}")?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                debug!("End of input");
                break;
            }
            // Invalid UTF-8 turns into U+FFFD and is parsed like any other input
            let decoded = String::from_utf8_lossy(&buf);
            let line = decoded.strip_suffix('\n').unwrap_or(&decoded);
            let line = line.strip_suffix('\r').unwrap_or(line);
            self.handle_line(line, &mut output)?;
        }
        Ok(())
    }

    /// Parses and executes one line, writing its output or failure message to `output`.
    pub fn handle_line<W: Write>(&mut self, line: &str, output: &mut W) -> io::Result<()> {
        match line
            .parse::<Command>()
            .and_then(|command| self.execute(command))
        {
            Ok(printed) => {
                for printed_line in printed {
                    writeln!(output, "{printed_line}")?;
                }
            }
            Err(err) => {
                debug!("Command {line:?} failed: {err:?}");
                writeln!(output, "{err}")?;
            }
        }
        Ok(())
    }

    pub fn save(&self) -> Result<(), StorageError> {
        self.storage.save(&self.tasks)
    }

    /// Applies a parsed command and returns the lines it prints.
    fn execute(&mut self, command: Command) -> Result<Vec<String>, CommandError> {
        debug!("Executing {command:?}");
        match command {
            Command::Add(description) => {
                self.tasks.add_task(Task::new(description)?);
            }
            Command::Done(raw_index) => {
                let index = command::parse_index(&raw_index)?;
                self.task_mut(index)?.set_done(true);
            }
            Command::Priority(remainder) => {
                let (raw_priority, raw_index) = command::priority_tokens(&remainder);
                let index = command::parse_index(raw_index.unwrap_or_default())?;
                let task = self.task_mut(index)?;
                let priority = command::parse_priority(raw_priority.unwrap_or_default())?;
                task.set_priority(priority)?;
            }
            Command::List => {
                return Ok((1..)
                    .zip(&self.tasks)
                    .map(|(position, task)| format!("{position}: {task}"))
                    .collect());
            }
            Command::Exit => {
                self.exit_requested = true;
            }
        }
        Ok(Vec::new())
    }

    fn task_mut(&mut self, index: i64) -> Result<&mut Task, CommandError> {
        self.tasks
            .get_task_mut(index)
            .ok_or(CommandError::OutOfBounds)
    }
}
