//! Terminal rendering of the view state

use todo_core::task::{Task, TaskFilter};
use todo_core::ViewState;

/// Render the warning banner, the filtered list and the summary line
pub fn render(state: &ViewState, filter: TaskFilter, priorities: bool) -> String {
    let mut out = String::new();

    if state.loading {
        out.push_str("Loading tasks...\n");
    }
    if let Some(warning) = &state.warning {
        out.push_str(&format!("! {}\n", warning));
    }

    let visible = state.visible(filter, priorities);
    if visible.is_empty() {
        match filter {
            TaskFilter::All => out.push_str("No tasks yet.\n"),
            other => out.push_str(&format!("No {} tasks.\n", other)),
        }
    } else {
        let width = visible
            .iter()
            .map(|t| t.id.to_string().len())
            .max()
            .unwrap_or(1);
        for task in visible {
            out.push_str(&render_task(task, width, priorities));
            out.push('\n');
        }
    }

    out.push_str(&format!("{}\n", state.summary()));
    out
}

fn render_task(task: &Task, id_width: usize, priorities: bool) -> String {
    let mark = if task.completed { "[x]" } else { "[ ]" };
    let mut line = format!("{} {:>width$}  {}", mark, task.id, task.title, width = id_width);
    if priorities {
        if let Some(priority) = task.priority {
            line.push_str(&format!("  ({})", priority));
        }
    }
    line
}
