use anyhow::Context;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use task_list::config::Config;
use task_list::{Interpreter, JsonFileStorage};
use tracing::{Level, info};

/// Interactive task list kept in a JSON file between sessions
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Task file to use instead of the configured one
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .init();

    let storage_path = match args.file {
        Some(path) => path,
        None => {
            Config::load()
                .context("cannot load configuration")?
                .storage_path
        }
    };
    info!("Using task file {}", storage_path.display());

    let mut interpreter = Interpreter::new(JsonFileStorage::new(&storage_path));
    interpreter
        .run(io::stdin().lock(), io::stdout().lock())
        .with_context(|| format!("task session on {} failed", storage_path.display()))
}
