//! Domain types for the todo list.
//!
//! A todo list is an ordered sequence of records. Additions append at the
//! end; deletion filters by id without reordering the survivors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unique identifier for a todo record
///
/// Ids are unique within the list at any point in time, and fresh ids are
/// strictly larger than every id issued before them in the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// Creates a `TodoId` from a raw integer
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw integer
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for TodoId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo record
///
/// Records are never mutated in place: created by `added_todo` with
/// `completed = false`, removed by `deleted_todo`. No transition toggles
/// the completed flag in this version.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier
    pub id: TodoId,
    /// Name of the todo, taken verbatim from the submitted form value
    pub name: String,
    /// Whether the todo is completed
    pub completed: bool,
}

impl Todo {
    /// Creates a new, not yet completed todo record
    #[must_use]
    pub const fn new(id: TodoId, name: String) -> Self {
        Self {
            id,
            name,
            completed: false,
        }
    }
}

/// State of the todo list
///
/// The store owns this exclusively; the presentation layer only ever sees
/// read-only views of it between dispatches.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoState {
    /// All todos in insertion order
    pub todos: Vec<Todo>,
}

impl TodoState {
    /// First id safe to issue on top of [`TodoState::seed`]
    pub const FIRST_FRESH_ID: u64 = 3;

    /// Creates a new empty todo state
    #[must_use]
    pub const fn new() -> Self {
        Self { todos: Vec::new() }
    }

    /// The fixed initial list the component mounts with
    #[must_use]
    pub fn seed() -> Self {
        Self {
            todos: vec![
                Todo::new(TodoId::new(1), "Learn React".to_string()),
                Todo::new(TodoId::new(2), "Build a todo app".to_string()),
            ],
        }
    }

    /// Returns the number of todos
    #[must_use]
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Checks whether the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Returns a todo by id
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// Checks whether a todo with the given id exists
    #[must_use]
    pub fn contains(&self, id: TodoId) -> bool {
        self.get(id).is_some()
    }

    /// Iterates over the todos in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Todo> {
        self.todos.iter()
    }

    /// Iterates over the ids in insertion order
    pub fn ids(&self) -> impl Iterator<Item = TodoId> + '_ {
        self.todos.iter().map(|todo| todo.id)
    }
}

/// Actions the state machine accepts
///
/// The tagged serde representation is the action protocol: the two known
/// shapes are `{"type": "added_todo", "name": ...}` and
/// `{"type": "deleted_todo", "id": ...}`. Anything else arriving from the
/// host layer lands on [`TodoAction::Unrecognized`], which the reducer
/// rejects as fatal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TodoAction {
    /// Append a new record carrying the submitted name
    AddedTodo {
        /// The literal form value; empty strings are accepted
        name: String,
    },

    /// Remove the record with the given id, if present
    DeletedTodo {
        /// Target id; a miss is a no-op
        id: TodoId,
    },

    /// Any discriminant the protocol does not define
    #[serde(other)]
    Unrecognized,
}

/// Errors raised by the todo state machine
///
/// There is exactly one kind: an unrecognized action type. Absent-id
/// deletes and empty-name adds are valid operations, not errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TodoError {
    /// The dispatched action's discriminant is not part of the protocol.
    /// Fatal to the dispatch that carried it.
    #[error("unknown action type")]
    UnrecognizedAction,
}
