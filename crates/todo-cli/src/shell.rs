//! Interactive session
//!
//! Keeps one mounted store alive and applies commands read from stdin, the
//! way the list view stays open between user actions.

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use todo_core::task::{TaskFilter, TaskPriority};
use todo_core::TodoStore;

use crate::commands;

pub const HELP: &str = "\
Commands:
  list [all|active|completed]   show tasks (optionally switching the filter)
  filter <all|active|completed> switch the filter
  add [!low|!medium|!high] <title>
  toggle <id>                   mark done / not done
  delete <id>                   remove a task
  reload                        fetch the list again
  dismiss                       hide the current warning
  help
  quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    List(Option<TaskFilter>),
    Filter(TaskFilter),
    Add {
        title: String,
        priority: Option<TaskPriority>,
    },
    Toggle(i64),
    Delete(i64),
    Reload,
    Dismiss,
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> std::result::Result<Option<ShellCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "list" | "ls" => {
            if rest.is_empty() {
                ShellCommand::List(None)
            } else {
                ShellCommand::List(Some(parse_filter(rest)?))
            }
        }
        "filter" => ShellCommand::Filter(parse_filter(rest)?),
        "add" => {
            let (priority, title) = match rest.strip_prefix('!') {
                Some(tagged) => {
                    let (tag, title) = tagged.split_once(char::is_whitespace).unwrap_or((tagged, ""));
                    let priority = tag.parse::<TaskPriority>().map_err(|e| e.to_string())?;
                    (Some(priority), title.trim())
                }
                None => (None, rest),
            };
            ShellCommand::Add {
                title: title.to_string(),
                priority,
            }
        }
        "toggle" | "done" => ShellCommand::Toggle(parse_id(rest)?),
        "delete" | "rm" => ShellCommand::Delete(parse_id(rest)?),
        "reload" | "refresh" => ShellCommand::Reload,
        "dismiss" => ShellCommand::Dismiss,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        other => return Err(format!("Unknown command '{}', try 'help'", other)),
    };
    Ok(Some(command))
}

fn parse_filter(raw: &str) -> std::result::Result<TaskFilter, String> {
    raw.parse::<TaskFilter>().map_err(|e| e.to_string())
}

fn parse_id(raw: &str) -> std::result::Result<i64, String> {
    raw.parse::<i64>()
        .map_err(|_| format!("Expected a task id, got '{}'", raw))
}

/// Run the session until `quit` or end of input
pub async fn run(store: &TodoStore, mut filter: TaskFilter) -> Result<()> {
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    stdout
        .write_all(commands::render_store(store, filter).await.as_bytes())
        .await?;

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                stdout.write_all(format!("{}\n", message).as_bytes()).await?;
                continue;
            }
        };

        match command {
            ShellCommand::Quit => break,
            ShellCommand::Help => {
                stdout.write_all(format!("{}\n", HELP).as_bytes()).await?;
                continue;
            }
            ShellCommand::List(Some(next)) | ShellCommand::Filter(next) => filter = next,
            ShellCommand::List(None) => {}
            ShellCommand::Add { title, priority } => {
                if let Err(e) = store.add(&title, priority).await {
                    stdout.write_all(format!("{}\n", e).as_bytes()).await?;
                    continue;
                }
            }
            ShellCommand::Toggle(id) => {
                if !store.toggle(id).await {
                    stdout
                        .write_all(format!("No task with id {}\n", id).as_bytes())
                        .await?;
                }
            }
            ShellCommand::Delete(id) => {
                if store.delete(id).await == 0 {
                    stdout
                        .write_all(format!("No task with id {}\n", id).as_bytes())
                        .await?;
                }
            }
            ShellCommand::Reload => {
                store.load().await;
            }
            ShellCommand::Dismiss => store.dismiss_warning().await,
        }

        stdout
            .write_all(commands::render_store(store, filter).await.as_bytes())
            .await?;
    }

    Ok(())
}
