//! # Todoflow Testing
//!
//! Testing utilities and helpers for the Todoflow reducer architecture.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - A Given-When-Then harness for reducers
//! - Assertion helpers for effects
//!
//! ## Example
//!
//! ```ignore
//! use todoflow_testing::{assertions, ReducerTest};
//!
//! ReducerTest::new(TodoReducer::new())
//!     .with_env(test_environment())
//!     .given_state(TodoState::seed())
//!     .when_action(TodoAction::AddedTodo { name: "Buy milk".into() })
//!     .then_state(|state| assert_eq!(state.len(), 3))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```

/// Mock implementations of Environment traits
///
/// Mock implementations for testing.
pub mod mocks {
    use std::sync::Arc;

    use todoflow_core::environment::SequentialIds;

    /// Create an id generator for tests
    ///
    /// Starts at 1000 so test-issued ids never collide with ids assigned by
    /// hand in fixtures.
    #[must_use]
    pub fn test_ids() -> Arc<SequentialIds> {
        Arc::new(SequentialIds::starting_at(1000))
    }
}


pub use reducer_test::{assertions, ReducerTest};
pub use mocks::test_ids;
