//! Presentation layer: pure render functions over a read-only state view.
//!
//! The render contract is one line per record showing its id and name next
//! to the control that deletes it, plus a single-input form for adding. The
//! CLI shell in `main.rs` shows the `del <id>` command as the delete
//! control and a prompt named after the form input as the form.

use std::fmt::Write as _;

use crate::types::TodoState;

/// Name of the form's single text input
pub const FORM_INPUT: &str = "todoName";

/// Render the list, one line per record
#[must_use]
pub fn render_list(state: &TodoState) -> String {
    let mut out = String::new();
    for todo in state.iter() {
        // Writing to a String cannot fail
        let _ = writeln!(out, "{} - {}  [del {}]", todo.id, todo.name, todo.id);
    }
    out
}

/// Render the add form as a prompt
#[must_use]
pub fn render_form() -> String {
    format!("{FORM_INPUT}> ")
}
