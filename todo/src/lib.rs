//! Minimal todo list driven by a reducer-based state machine.
//!
//! Two transitions exist: `added_todo` appends a record with a fresh,
//! strictly increasing id, and `deleted_todo` filters one record out by id.
//! Dispatching any other action type is a fatal error. State lives in a
//! [`todoflow_runtime::Store`]; the presentation layer only ever reads it
//! and requests changes through dispatch.
//!
//! # Quick Start
//!
//! ```no_run
//! use todoflow::{TodoAction, TodoEnvironment, TodoReducer, TodoState};
//! use todoflow_runtime::Store;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Mount the component: seeded state, matching id source
//! let store = Store::new(TodoState::seed(), TodoReducer::new(), TodoEnvironment::seeded());
//!
//! // Add a todo
//! store.send(TodoAction::AddedTodo {
//!     name: "Buy milk".to_string(),
//! }).await?;
//!
//! // Read state
//! let count = store.state(todoflow::TodoState::len).await;
//! println!("Total todos: {count}");
//! # Ok(())
//! # }
//! ```

pub mod reducer;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use reducer::{TodoEnvironment, TodoReducer};
pub use types::{Todo, TodoAction, TodoError, TodoId, TodoState};
pub use view::{render_form, render_list};
