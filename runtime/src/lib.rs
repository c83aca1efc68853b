//! # Todoflow Runtime
//!
//! Runtime implementation for the Todoflow reducer architecture.
//!
//! This crate provides the Store runtime that coordinates reducer execution
//! and effect handling.
//!
//! ## Core Components
//!
//! - **Store**: The runtime that manages state and executes effects
//! - **Effect Executor**: Executes effect descriptions and feeds actions back
//!   to reducers
//!
//! ## Example
//!
//! ```ignore
//! use todoflow_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Send an action; reducer rejections propagate to the caller
//! store.send(Action::DoSomething).await?;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//! ```

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use todoflow_core::{effect::Effect, reducer::Reducer};
use tokio::sync::RwLock;

/// The Store runtime
///
/// Holds the single authoritative state value and serializes all mutation
/// through dispatched actions. Reading happens through [`Store::state`],
/// writing only through [`Store::send`].
///
/// # Type Parameters
///
/// - `S`: State type
/// - `A`: Action type
/// - `E`: Environment type
/// - `R`: Reducer implementation
///
/// # Concurrency
///
/// Dispatches serialize at the state write lock: the reducer runs
/// synchronously while the lock is held, so no two dispatches interleave
/// and readers only ever observe settled states.
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    state: Arc<RwLock<S>>,
    reducer: R,
    environment: E,
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Clone + Send + Sync + 'static,
    S: Send + Sync + 'static,
    A: Send + 'static,
    E: Clone + Send + Sync + 'static,
{
    /// Create a new store with initial state, reducer, and environment
    #[must_use]
    pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial_state)),
            reducer,
            environment,
        }
    }

    /// Send an action to the store
    ///
    /// This is the primary way to interact with the store:
    /// 1. Acquires the write lock on state
    /// 2. Calls the reducer with (state, action, environment)
    /// 3. Executes returned effects asynchronously
    /// 4. Effects may produce more actions (feedback loop)
    ///
    /// The reducer executes synchronously while holding the write lock;
    /// effects execute in spawned tasks after the lock is released, so
    /// `send` returns once the transition is settled, not once effects
    /// complete.
    ///
    /// # Errors
    ///
    /// Returns the reducer's error when it rejects the action. The dispatch
    /// is aborted and state is left untouched; the error is fatal for this
    /// dispatch and not retried.
    #[tracing::instrument(skip(self, action), name = "store_send")]
    pub async fn send(&self, action: A) -> Result<(), R::Error> {
        let effects = {
            let mut state = self.state.write().await;
            self.reducer.reduce(&mut state, action, &self.environment)?
        };

        for effect in effects {
            self.spawn_effect(effect);
        }

        Ok(())
    }

    /// Read a value out of the current state
    ///
    /// Takes a closure over a read-only view so callers never hold the lock
    /// across awaits.
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        let state = self.state.read().await;
        f(&state)
    }

    /// Start executing an effect without blocking the caller
    fn spawn_effect(&self, effect: Effect<A>) {
        match effect {
            Effect::None => {},
            // Parallel at the top level needs no joining; each branch is
            // its own task.
            Effect::Parallel(effects) => {
                for inner in effects {
                    self.spawn_effect(inner);
                }
            },
            other => {
                let store = self.clone();
                tokio::spawn(async move {
                    store.run_effect(other).await;
                });
            },
        }
    }

    /// Execute one effect to completion, feeding produced actions back
    ///
    /// Boxed because `Sequential` and `Parallel` recurse.
    fn run_effect(&self, effect: Effect<A>) -> Pin<Box<dyn Future<Output = ()> + Send>> {
        let store = self.clone();
        Box::pin(async move {
            match effect {
                Effect::None => {},
                Effect::Parallel(effects) => {
                    let mut handles = Vec::with_capacity(effects.len());
                    for inner in effects {
                        let store = store.clone();
                        handles.push(tokio::spawn(async move {
                            store.run_effect(inner).await;
                        }));
                    }
                    for handle in handles {
                        if let Err(error) = handle.await {
                            tracing::error!(%error, "parallel effect task failed");
                        }
                    }
                },
                Effect::Sequential(effects) => {
                    for inner in effects {
                        store.run_effect(inner).await;
                    }
                },
                Effect::Delay { duration, action } => {
                    tokio::time::sleep(duration).await;
                    store.feed_back(*action).await;
                },
                Effect::Future(future) => {
                    if let Some(action) = future.await {
                        store.feed_back(action).await;
                    }
                },
            }
        })
    }

    /// Dispatch an effect-produced action
    ///
    /// Effects are fire-and-forget: a rejected feedback action is logged,
    /// never propagated.
    async fn feed_back(&self, action: A) {
        if let Err(error) = self.send(action).await {
            tracing::error!(%error, "effect-produced action was rejected");
        }
    }
}

impl<S, A, E, R> Clone for Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E> + Clone,
    E: Clone,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            reducer: self.reducer.clone(),
            environment: self.environment.clone(),
        }
    }
}
