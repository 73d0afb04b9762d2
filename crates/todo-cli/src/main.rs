//! todo - todo list client
//!
//! Reads the list from the remote todo API and falls back to tasks saved on
//! this device when the API is unavailable.

mod commands;
mod render;
mod shell;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use todo_core::task::{TaskFilter, TaskPriority};
use todo_core::{IdStrategy, TodoConfig};

const DEFAULT_LOG_FILTER: &str = "todo_core=warn,todo_cli=warn";

/// todo - todo list backed by a remote API with a local fallback
#[derive(Parser, Debug)]
#[command(name = "todo")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Base URL of the todo API (overrides TODO_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Directory for tasks saved on this device (overrides TODO_DATA_DIR)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Hide priorities and keep list order
    #[arg(long)]
    no_priorities: bool,

    /// Give tasks created offline negative ids so they never clash with
    /// server ids
    #[arg(long)]
    local_ids: bool,

    /// Log filter, e.g. "debug" or "todo_core=info" (RUST_LOG wins if set)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show tasks
    #[command(alias = "ls")]
    List {
        /// all, active or completed
        #[arg(short, long, default_value_t = TaskFilter::All)]
        filter: TaskFilter,
    },

    /// Add a task
    Add {
        /// Task title
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,

        /// low, medium or high
        #[arg(short, long)]
        priority: Option<TaskPriority>,
    },

    /// Mark a task done, or not done again
    Toggle {
        /// Task id
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },

    /// Remove a task
    #[command(alias = "rm")]
    Delete {
        /// Task id
        #[arg(allow_negative_numbers = true)]
        id: i64,
    },

    /// Interactive session
    Shell {
        /// Initial filter
        #[arg(short, long, default_value_t = TaskFilter::All)]
        filter: TaskFilter,
    },
}

impl Cli {
    fn config(&self) -> TodoConfig {
        let mut config = TodoConfig::from_env();
        if let Some(url) = &self.api_url {
            config.api_base_url = url.clone();
        }
        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
        if self.no_priorities {
            config.priorities = false;
        }
        if self.local_ids {
            config.id_strategy = IdStrategy::LocalNegative;
        }
        config
    }
}

fn init_tracing(log_level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level.unwrap_or(DEFAULT_LOG_FILTER)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let config = cli.config();
    let store = commands::build_store(&config).await?;

    commands::mount(&store).await;

    let filter = match cli.command.unwrap_or(Commands::List {
        filter: TaskFilter::All,
    }) {
        Commands::List { filter } => filter,
        Commands::Add { title, priority } => {
            commands::add(&store, &title.join(" "), priority).await?;
            TaskFilter::All
        }
        Commands::Toggle { id } => {
            commands::toggle(&store, id).await;
            TaskFilter::All
        }
        Commands::Delete { id } => {
            commands::delete(&store, id).await;
            TaskFilter::All
        }
        Commands::Shell { filter } => {
            return shell::run(&store, filter).await;
        }
    };

    print!("{}", commands::render_store(&store, filter).await);
    Ok(())
}
