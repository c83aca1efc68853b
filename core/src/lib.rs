//! # Todoflow Core
//!
//! Core traits and types for the Todoflow reducer architecture.
//!
//! This crate provides the fundamental abstractions for building small
//! state-machine-driven applications using the Reducer pattern.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature
//! - **Action**: All possible inputs to a reducer
//! - **Reducer**: Fallible pure function `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: Side effect descriptions (not execution)
//! - **Environment**: Injected dependencies via traits
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Explicit Effects (no hidden I/O)
//! - Dependency Injection via Environment
//!
//! ## Example
//!
//! ```ignore
//! use todoflow_core::{effect::Effect, reducer::Reducer, SmallVec};
//!
//! impl Reducer for TodoReducer {
//!     type State = TodoState;
//!     type Action = TodoAction;
//!     type Environment = TodoEnvironment;
//!     type Error = TodoError;
//!
//!     fn reduce(
//!         &self,
//!         state: &mut TodoState,
//!         action: TodoAction,
//!         env: &TodoEnvironment,
//!     ) -> Result<SmallVec<[Effect<TodoAction>; 4]>, TodoError> {
//!         // Business logic goes here
//!         Ok(SmallVec::new())
//!     }
//! }
//! ```

// Re-export so downstream crates spell the effect buffer the same way
pub use smallvec::{smallvec, SmallVec};

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions:
/// `(State, Action, Environment) → Result<(State, Effects), Error>`
///
/// They contain all business logic and are deterministic and testable.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    /// - `Error`: The error type for actions the reducer rejects
    ///
    /// # Failure contract
    ///
    /// A reducer either applies the action fully or rejects it: when
    /// `reduce` returns `Err`, the state must be left exactly as it was.
    /// Callers rely on never observing a partially applied transition.
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// The error type for rejected actions
        type Error: std::error::Error + Send + Sync + 'static;

        /// Reduce an action into state changes and effects
        ///
        /// This is a pure function that:
        /// 1. Validates the action
        /// 2. Updates state in place
        /// 3. Returns effect descriptions to be executed
        ///
        /// # Errors
        ///
        /// Returns `Self::Error` when the action is rejected. The dispatch
        /// that carried the action is aborted; state is untouched.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> Result<SmallVec<[Effect<Self::Action>; 4]>, Self::Error>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects describe side effects to be performed by the runtime.
/// They are values (not execution) and are composable.
pub mod effect {
    use std::future::Future;
    use std::pin::Pin;
    use std::time::Duration;

    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what
    /// should happen, returned from reducers and executed by the Store
    /// runtime.
    ///
    /// # Type Parameters
    ///
    /// - `Action`: The action type that effects can produce (feedback loop)
    #[allow(missing_docs)]
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Run effects in parallel
        Parallel(Vec<Effect<Action>>),

        /// Run effects sequentially
        Sequential(Vec<Effect<Action>>),

        /// Delayed action (for timeouts, retries)
        Delay {
            /// How long to wait
            duration: Duration,
            /// Action to dispatch after delay
            action: Box<Action>,
        },

        /// Arbitrary async computation
        ///
        /// Returns `Option<Action>` - if Some, the action is fed back into
        /// the reducer
        Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),
    }

    // Manual Debug implementation since Future doesn't implement Debug
    impl<Action> std::fmt::Debug for Effect<Action>
    where
        Action: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Parallel(effects) => {
                    f.debug_tuple("Effect::Parallel").field(effects).finish()
                },
                Effect::Sequential(effects) => {
                    f.debug_tuple("Effect::Sequential").field(effects).finish()
                },
                Effect::Delay { duration, action } => f
                    .debug_struct("Effect::Delay")
                    .field("duration", duration)
                    .field("action", action)
                    .finish(),
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Combine effects to run in parallel
        #[must_use]
        pub const fn merge(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Parallel(effects)
        }

        /// Chain effects to run sequentially
        #[must_use]
        pub const fn chain(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Sequential(effects)
        }
    }
}

/// Environment module - Dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected
/// via the Environment parameter.
pub mod environment {
    use std::sync::atomic::{AtomicU64, Ordering};

    /// `IdGenerator` trait - abstracts id issuance for testability
    ///
    /// Implementations must issue ids that are unique for the lifetime of
    /// the generator and strictly increasing in issuance order.
    ///
    /// # Examples
    ///
    /// ```
    /// use todoflow_core::environment::{IdGenerator, SequentialIds};
    ///
    /// let ids = SequentialIds::starting_at(3);
    /// assert_eq!(ids.next_id(), 3);
    /// assert_eq!(ids.next_id(), 4);
    /// ```
    pub trait IdGenerator: Send + Sync {
        /// Issue the next id
        fn next_id(&self) -> u64;
    }

    /// Production id generator backed by a monotonic counter
    #[derive(Debug)]
    pub struct SequentialIds {
        next: AtomicU64,
    }

    impl Default for SequentialIds {
        fn default() -> Self {
            Self::new()
        }
    }

    impl SequentialIds {
        /// Creates a generator whose first issued id is 1
        #[must_use]
        pub const fn new() -> Self {
            Self::starting_at(1)
        }

        /// Creates a generator whose first issued id is `first`
        ///
        /// Use this to keep fresh ids above ids that were assigned out of
        /// band, e.g. by a seeded initial state.
        #[must_use]
        pub const fn starting_at(first: u64) -> Self {
            Self {
                next: AtomicU64::new(first),
            }
        }
    }

    impl IdGenerator for SequentialIds {
        fn next_id(&self) -> u64 {
            // Single atomic counter; Relaxed is enough for unique,
            // increasing values.
            self.next.fetch_add(1, Ordering::Relaxed)
        }
    }
}
