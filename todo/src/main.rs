//! CLI shell for the todo list.
//!
//! The shell is the host form layer: a plain line of text is the submitted
//! `todoName` value, dispatched verbatim as `added_todo`; `del <id>`
//! dispatches `deleted_todo`; `q` quits. Empty submissions are swallowed
//! here, the way a browser form would block them; the state machine itself
//! accepts them.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use todoflow::{render_form, render_list, TodoAction, TodoEnvironment, TodoId, TodoReducer, TodoState};
use todoflow_runtime::Store;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Mount: fixed seed list, id source starting above the seeded ids.
    // The list lives for the process and is discarded on exit.
    let store = Store::new(
        TodoState::seed(),
        TodoReducer::new(),
        TodoEnvironment::seeded(),
    );

    println!("Todo lists");
    println!("Type a name to add it, `del <id>` to delete one, `q` to quit.\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        let listing = store.state(render_list).await;
        print!("{listing}");
        print!("{}", render_form());
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        // Only the line terminator is stripped; the value itself is not
        // trimmed or transformed.
        let submitted = line.trim_end_matches(['\r', '\n']);

        if submitted == "q" {
            break;
        }

        let action = if let Some(rest) = submitted.strip_prefix("del ") {
            match rest.parse::<u64>() {
                Ok(id) => TodoAction::DeletedTodo {
                    id: TodoId::new(id),
                },
                Err(_) => {
                    println!("not an id: {rest}\n");
                    continue;
                },
            }
        } else if submitted.is_empty() {
            continue;
        } else {
            TodoAction::AddedTodo {
                name: submitted.to_string(),
            }
        };

        // An unrecognized action type would end the process here; no
        // graceful surface exists for it.
        store.send(action).await?;
        println!();
    }

    Ok(())
}
