//! Single-value Actor implementation for reactive state management
//!
//! Actor provides controlled state management with sequential message processing.
//! It owns a Mutable<T> and processes events from Relays to update state safely.

use std::future::Future;
use std::sync::Arc;
use zoon::{Mutable, Signal, Task, TaskHandle};

/// Single-value reactive state container for Actor+Relay architecture.
///
/// Actor controls all mutations to a piece of state through sequential
/// message processing. It prevents race conditions and provides traceability
/// for all state changes.
///
/// The processor future is not required to be `Send`: the dashboard runs on
/// the single-threaded browser event loop and processors routinely hold
/// browser fetch futures across await points.
///
/// # Core Principles
///
/// - **Single Point of Mutation**: Only the Actor can modify its state
/// - **Sequential Processing**: Events are processed one at a time in order
/// - **Reactive Signals**: UI can bind to state changes through signals
///
/// # Examples
///
/// ```rust
/// use crate::dataflow::{Actor, relay};
/// use futures::{StreamExt, select};
///
/// let (user_selected_relay, mut user_selected_stream) = relay();
///
/// let selection = Actor::new(None, async move |state| {
///     while let Some(user_id) = user_selected_stream.next().await {
///         state.set_neq(user_id);
///     }
/// });
///
/// // Emit events
/// user_selected_relay.send(Some(141));
///
/// // Bind to UI
/// selection.signal() // Always returns current state reactively
/// ```
#[derive(Clone, Debug)]
pub struct Actor<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub(super) state: Mutable<T>,
    #[allow(dead_code)]
    task_handle: Arc<TaskHandle>,
    #[cfg(debug_assertions)]
    #[allow(dead_code)]
    creation_location: &'static std::panic::Location<'static>,
}

impl<T> Actor<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a new Actor with initial state and event processing loop.
    ///
    /// The processor function should contain a loop that uses `select!`
    /// to handle multiple event streams sequentially. One-shot processors
    /// (a single load followed by a state update) are fine too; the task
    /// simply completes and the last state stays observable.
    ///
    /// # Arguments
    ///
    /// - `initial_state`: The starting value for this Actor's state
    /// - `processor`: Async function that processes events and updates state
    #[track_caller]
    pub fn new<F, Fut>(initial_state: T, processor: F) -> Self
    where
        F: FnOnce(Mutable<T>) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        let state = Mutable::new(initial_state);

        // Start the async processor task with droppable handle
        let task_handle = Arc::new(Task::start_droppable(processor(state.clone())));

        Self {
            state,
            task_handle,
            #[cfg(debug_assertions)]
            creation_location: std::panic::Location::caller(),
        }
    }

    /// Get a reactive signal for this Actor's state.
    ///
    /// This is the primary way to access Actor state from the UI.
    pub fn signal(&self) -> impl Signal<Item = T> + use<T> {
        self.state.signal_cloned()
    }

    /// Get a reactive signal with a reference to avoid cloning.
    ///
    /// Use this when the state is large and you want to avoid cloning
    /// on every signal emission.
    pub fn signal_ref<U, F>(
        &self,
        f: F,
    ) -> impl Signal<Item = U> + use<T, U, F>
    where
        F: Fn(&T) -> U + Send + Sync + 'static,
        U: PartialEq + Send + Sync + 'static,
    {
        self.state.signal_ref(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataflow::relay;
    use futures::{StreamExt, select};
    use zoon::{MutableExt, SignalExt};

    #[tokio::test]
    async fn test_actor_basic_functionality() {
        let (increment_relay, mut increment_stream) = relay();

        let counter = Actor::new(0, async move |state| {
            while let Some(amount) = increment_stream.next().await {
                state.update_mut(|current| *current += amount);
            }
        });

        // Wait a moment for the processor to start
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        for amount in [5, 3] {
            increment_relay.send(amount);
        }

        // Wait for processing
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        // Check final state through signal
        let final_value = counter.signal().to_stream().next().await.unwrap();
        assert_eq!(final_value, 8);
    }

    #[tokio::test]
    async fn test_actor_multiple_streams() {
        let (shown_relay, mut shown_stream) = relay();
        let (cleared_relay, mut cleared_stream) = relay();

        let rows = Actor::new(Vec::<u32>::new(), async move |state| {
            loop {
                select! {
                    new_rows = shown_stream.next() => {
                        let Some(new_rows) = new_rows else { break };
                        state.set(new_rows);
                    }
                    cleared = cleared_stream.next() => {
                        let Some(()) = cleared else { break };
                        state.set_neq(Vec::new());
                    }
                }
            }
        });

        // Wait for processor to start
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        shown_relay.send(vec![1, 2, 3]);
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
        assert_eq!(
            rows.signal().to_stream().next().await.unwrap(),
            vec![1, 2, 3]
        );

        cleared_relay.send(());
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
        assert!(rows.signal().to_stream().next().await.unwrap().is_empty());
    }
}
