use clap::{Parser, Subcommand};
use colored::Colorize;
use eyre::{Result, eyre};
use std::path::PathBuf;
use todostore::{Action, FilterMode, JsonFile, TodoStore, visible_tasks};

#[derive(Parser)]
#[command(name = "todostore")]
#[command(about = "Todo list CLI backed by a JSON snapshot store")]
#[command(version)]
struct Cli {
    /// Path to the snapshot file (default: <data dir>/todostore/todoapp.json)
    #[arg(short, long)]
    store_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task
    Add {
        /// Task title; blank titles are silently ignored
        title: String,
    },

    /// Flip a task's completed flag
    Toggle { id: u64 },

    /// Delete a task
    Delete { id: u64 },

    /// List tasks
    List {
        /// Which tasks to show: all, active or completed
        #[arg(short, long, default_value_t = FilterMode::All)]
        filter: FilterMode,
    },
}

fn default_store_path() -> Result<PathBuf> {
    let base = dirs::data_dir().ok_or_else(|| eyre!("Could not determine platform data directory"))?;
    Ok(base.join("todostore").join("todoapp.json"))
}

fn main() -> Result<()> {
    // Setup tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let path = match cli.store_path {
        Some(p) => p,
        None => default_store_path()?,
    };
    let mut store = TodoStore::open(JsonFile::new(path))?;

    match cli.command {
        Commands::Add { title } => {
            let before = store.tasks().len();
            store.dispatch(Action::AddTask(title))?;
            if store.tasks().len() > before {
                if let Some(task) = store.tasks().last() {
                    println!("Added task {}: {}", task.id, task.title);
                }
            } else {
                println!("Nothing added: title was blank");
            }
        }
        Commands::Toggle { id } => {
            store.dispatch(Action::ToggleTask(id))?;
            println!("Toggled task {}", id);
        }
        Commands::Delete { id } => {
            store.dispatch(Action::DeleteTask(id))?;
            println!("Deleted task {}", id);
        }
        Commands::List { filter } => {
            let tasks = store.tasks();
            let shown = visible_tasks(tasks, filter);

            for task in &shown {
                if task.is_completed {
                    let line = format!("[x] {:>3}  {}", task.id, task.title);
                    println!("{}", line.dimmed().strikethrough());
                } else {
                    println!("[ ] {:>3}  {}", task.id, task.title);
                }
            }

            if !tasks.is_empty() {
                if shown.len() < tasks.len() {
                    println!("{} / {} task(s)", shown.len(), tasks.len());
                } else {
                    println!("{} task(s)", shown.len());
                }
            }
        }
    }

    Ok(())
}
