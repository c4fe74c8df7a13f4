use std::str::FromStr;
use task_list_core::TaskError;
use thiserror::Error;

/// Every way a single command can fail. The `Display` text is what the user sees.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command!")]
    Unknown,
    #[error("Invalid task index!")]
    InvalidIndex,
    #[error("Index is out of bounds!")]
    OutOfBounds,
    #[error(transparent)]
    Task(#[from] TaskError),
}

/// A well-formed line of input. Arguments are kept raw and only interpreted on dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Done(String),
    Priority(String),
    List,
    Exit,
}

impl FromStr for Command {
    type Err = CommandError;

    /// Splits on the first space into a keyword and the raw remainder.
    /// `list` and `exit` must stand alone; `add`, `done` and `priority` need a remainder,
    /// even an empty one.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.splitn(2, ' ');
        let keyword = parts.next().unwrap_or_default();
        match (keyword, parts.next()) {
            ("list", None) => Ok(Command::List),
            ("exit", None) => Ok(Command::Exit),
            ("add", Some(rest)) => Ok(Command::Add(rest.to_string())),
            ("done", Some(rest)) => Ok(Command::Done(rest.to_string())),
            ("priority", Some(rest)) => Ok(Command::Priority(rest.to_string())),
            _ => Err(CommandError::Unknown),
        }
    }
}

/// Converts a 1-based task number typed by the user into a 0-based list index.
pub fn parse_index(raw: &str) -> Result<i64, CommandError> {
    let number: i32 = raw.parse().map_err(|_| CommandError::InvalidIndex)?;
    Ok(i64::from(number) - 1)
}

/// Fails with the same message as [`parse_index`].
pub fn parse_priority(raw: &str) -> Result<i32, CommandError> {
    raw.parse().map_err(|_| CommandError::InvalidIndex)
}

/// Picks the priority and index tokens out of the `<p> for <n>` remainder.
/// Tokens are positional: the priority is first, the index third, and the
/// second token is never inspected.
pub fn priority_tokens(remainder: &str) -> (Option<&str>, Option<&str>) {
    let tokens: Vec<&str> = remainder.split_whitespace().collect();
    (tokens.first().copied(), tokens.get(2).copied())
}
