//! Reducer logic for the todo list.
//!
//! Two transitions only: append a record, filter one out by id. The store
//! is always in exactly one settled list state between dispatches.

use std::sync::Arc;

use todoflow_core::{
    effect::Effect,
    environment::{IdGenerator, SequentialIds},
    reducer::Reducer,
    SmallVec,
};

use crate::types::{Todo, TodoAction, TodoError, TodoId, TodoState};

/// Environment dependencies for the todo reducer
#[derive(Clone)]
pub struct TodoEnvironment {
    /// Source of fresh record ids
    pub ids: Arc<dyn IdGenerator>,
}

impl TodoEnvironment {
    /// Creates a new `TodoEnvironment`
    #[must_use]
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }

    /// Environment matching [`TodoState::seed`]: fresh ids start above the
    /// seeded ones
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(Arc::new(SequentialIds::starting_at(
            TodoState::FIRST_FRESH_ID,
        )))
    }
}

/// Reducer for the todo list
#[derive(Clone, Debug)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for TodoReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;
    type Environment = TodoEnvironment;
    type Error = TodoError;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> Result<SmallVec<[Effect<Self::Action>; 4]>, Self::Error> {
        match action {
            TodoAction::AddedTodo { name } => {
                // No validation: the empty string is a valid name. The form
                // layer may block empty submissions, the state machine does
                // not.
                let id = TodoId::new(env.ids.next_id());
                state.todos.push(Todo::new(id, name));
                Ok(SmallVec::new())
            },

            TodoAction::DeletedTodo { id } => {
                // A miss leaves the list as it was; survivors keep their
                // relative order.
                state.todos.retain(|todo| todo.id != id);
                Ok(SmallVec::new())
            },

            TodoAction::Unrecognized => Err(TodoError::UnrecognizedAction),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use todoflow_testing::{assertions, test_ids, ReducerTest};

    fn seeded_env() -> TodoEnvironment {
        TodoEnvironment::seeded()
    }

    /// Build a list of `names.len()` records with ids 1..=len
    fn state_of(names: &[&str]) -> TodoState {
        TodoState {
            todos: names
                .iter()
                .enumerate()
                .map(|(index, name)| {
                    Todo::new(TodoId::new(index as u64 + 1), (*name).to_string())
                })
                .collect(),
        }
    }

    #[test]
    fn add_appends_to_seed() {
        ReducerTest::new(TodoReducer::new())
            .with_env(seeded_env())
            .given_state(TodoState::seed())
            .when_action(TodoAction::AddedTodo {
                name: "Buy milk".to_string(),
            })
            .then_state(|state| {
                assert_eq!(state.len(), 3);
                let added = state.todos.last().unwrap();
                assert_eq!(added.name, "Buy milk");
                assert!(!added.completed);
                assert_eq!(added.id, TodoId::new(3));
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn delete_removes_the_matching_record() {
        ReducerTest::new(TodoReducer::new())
            .with_env(seeded_env())
            .given_state(TodoState::seed())
            .when_action(TodoAction::DeletedTodo {
                id: TodoId::new(1),
            })
            .then_state(|state| {
                assert_eq!(state.len(), 1);
                assert_eq!(state.todos[0].id, TodoId::new(2));
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn delete_of_absent_id_is_a_noop() {
        ReducerTest::new(TodoReducer::new())
            .with_env(seeded_env())
            .given_state(TodoState::seed())
            .when_action(TodoAction::DeletedTodo {
                id: TodoId::new(999),
            })
            .then_state(|state| {
                assert_eq!(state, &TodoState::seed());
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn empty_name_is_accepted() {
        ReducerTest::new(TodoReducer::new())
            .with_env(seeded_env())
            .given_state(TodoState::new())
            .when_action(TodoAction::AddedTodo {
                name: String::new(),
            })
            .then_state(|state| {
                assert_eq!(state.len(), 1);
                assert_eq!(state.todos[0].name, "");
            })
            .run();
    }

    #[test]
    fn unrecognized_action_is_fatal_and_leaves_state_untouched() {
        ReducerTest::new(TodoReducer::new())
            .with_env(seeded_env())
            .given_state(TodoState::seed())
            .when_action(TodoAction::Unrecognized)
            .then_error(|error| {
                assert_eq!(error, &TodoError::UnrecognizedAction);
            })
            .then_state(|state| {
                assert_eq!(state, &TodoState::seed());
            })
            .run();
    }

    #[test]
    fn fresh_ids_increase_across_adds() {
        let reducer = TodoReducer::new();
        let env = seeded_env();
        let mut state = TodoState::seed();

        for name in ["one", "two", "three"] {
            reducer
                .reduce(
                    &mut state,
                    TodoAction::AddedTodo {
                        name: name.to_string(),
                    },
                    &env,
                )
                .unwrap();
        }

        let ids: Vec<u64> = state.ids().map(TodoId::as_u64).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn delete_is_idempotent() {
        let reducer = TodoReducer::new();
        let env = seeded_env();
        let mut state = TodoState::seed();

        let delete = TodoAction::DeletedTodo {
            id: TodoId::new(2),
        };
        reducer.reduce(&mut state, delete.clone(), &env).unwrap();
        let once = state.clone();
        reducer.reduce(&mut state, delete, &env).unwrap();

        assert_eq!(state, once);
    }

    #[test]
    fn test_ids_mock_keeps_fresh_ids_above_fixtures() {
        let env = TodoEnvironment::new(test_ids());
        let mut state = state_of(&["fixture"]);

        TodoReducer::new()
            .reduce(
                &mut state,
                TodoAction::AddedTodo {
                    name: "fresh".to_string(),
                },
                &env,
            )
            .unwrap();

        assert!(state.todos.last().unwrap().id.as_u64() >= 1000);
    }

    proptest! {
        /// add returns a list one longer whose last element carries the
        /// submitted name, is not completed, and has an id distinct from
        /// (and larger than) every existing one
        #[test]
        fn add_appends_exactly_one(names in proptest::collection::vec("[a-z ]{0,12}", 0..8), name in "[a-z ]{0,12}") {
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let mut state = state_of(&refs);
            let before = state.clone();
            let env = TodoEnvironment::new(Arc::new(SequentialIds::starting_at(
                before.len() as u64 + 1,
            )));

            TodoReducer::new()
                .reduce(&mut state, TodoAction::AddedTodo { name: name.clone() }, &env)
                .unwrap();

            prop_assert_eq!(state.len(), before.len() + 1);
            prop_assert_eq!(&state.todos[..before.len()], &before.todos[..]);
            let added = state.todos.last().unwrap();
            prop_assert_eq!(&added.name, &name);
            prop_assert!(!added.completed);
            prop_assert!(before.ids().all(|id| id < added.id));
        }

        /// delete removes at most the one matching record and preserves the
        /// relative order of the survivors
        #[test]
        fn delete_filters_without_reordering(names in proptest::collection::vec("[a-z ]{0,12}", 0..8), target in 0u64..12) {
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let mut state = state_of(&refs);
            let before = state.clone();
            let target = TodoId::new(target);
            let env = TodoEnvironment::seeded();

            TodoReducer::new()
                .reduce(&mut state, TodoAction::DeletedTodo { id: target }, &env)
                .unwrap();

            let expected_len = if before.contains(target) {
                before.len() - 1
            } else {
                before.len()
            };
            prop_assert_eq!(state.len(), expected_len);
            prop_assert!(!state.contains(target));

            let expected: Vec<_> = before
                .todos
                .iter()
                .filter(|todo| todo.id != target)
                .cloned()
                .collect();
            prop_assert_eq!(state.todos, expected);
        }
    }
}
