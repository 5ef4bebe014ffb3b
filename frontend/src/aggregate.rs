//! Shared fetch lifecycle for the aggregate views.
//!
//! The four dashboard views are structurally parallel: a selector change
//! either clears the view or issues exactly one aggregate request, and the
//! display region is always in exactly one of four states. This module owns
//! that state machine once; each view instantiates it with its own key type,
//! row type and loader.

use crate::api::ApiError;
use crate::dataflow::{Actor, Relay, relay};
use futures::future::LocalBoxFuture;
use futures::{StreamExt, select};
use zoon::*;

/// The mutually exclusive display mode of a view region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    /// Nothing selected yet (or the placeholder option re-selected).
    Initial,
    /// A request is in flight.
    Loading,
    /// Rows are rendered.
    Content,
    /// The request failed or produced no usable rows.
    Empty,
}

/// Internal failure taxonomy. Both variants present as [`DisplayState::Empty`];
/// they stay distinguishable here for logging and tests.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchFailure {
    /// Network failure or non-2xx status.
    Request(ApiError),
    /// Successful response with zero usable rows, including payloads
    /// rejected by the fail-closed schema parsers.
    Empty,
}

impl FetchFailure {
    pub fn from_error(error: ApiError) -> Self {
        match error {
            // An unusable payload is treated like an empty result, never
            // propagated into rendering.
            ApiError::Schema(_) | ApiError::Decode(_) => FetchFailure::Empty,
            other => FetchFailure::Request(other),
        }
    }
}

/// Monotonic request tag. A completion is only applied when its tag still
/// matches the latest issued one, so a stale response can never overwrite
/// the state produced by a newer selection.
#[derive(Debug, Default)]
pub struct RequestGeneration(u64);

impl RequestGeneration {
    /// Invalidate outstanding requests and tag a new one.
    pub fn begin(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    /// Invalidate outstanding requests without issuing a new one
    /// (used when the selection is cleared).
    pub fn invalidate(&mut self) {
        self.0 += 1;
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.0
    }
}

/// Full view-region state: display mode, transformed rows, last failure.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateState<R> {
    pub display: DisplayState,
    pub rows: Vec<R>,
    pub failure: Option<FetchFailure>,
}

impl<R: Clone> AggregateState<R> {
    pub fn initial() -> Self {
        AggregateState {
            display: DisplayState::Initial,
            rows: Vec::new(),
            failure: None,
        }
    }

    fn loading() -> Self {
        AggregateState {
            display: DisplayState::Loading,
            rows: Vec::new(),
            failure: None,
        }
    }

    fn from_completion(view: &'static str, result: Result<Vec<R>, ApiError>) -> Self {
        match result {
            Ok(rows) if rows.is_empty() => {
                zoon::println!("[{}] fetch succeeded with no rows", view);
                AggregateState {
                    display: DisplayState::Empty,
                    rows: Vec::new(),
                    failure: Some(FetchFailure::Empty),
                }
            }
            Ok(rows) => AggregateState {
                display: DisplayState::Content,
                rows,
                failure: None,
            },
            Err(error) => {
                zoon::eprintln!("[{}] aggregate fetch failed: {}", view, error);
                AggregateState {
                    display: DisplayState::Empty,
                    rows: Vec::new(),
                    failure: Some(FetchFailure::from_error(error)),
                }
            }
        }
    }
}

/// Loader future for one aggregate request. `LocalBoxFuture` because browser
/// fetch futures are not `Send`.
pub type AggregateLoad<R> = LocalBoxFuture<'static, Result<Vec<R>, ApiError>>;

/// One view's request lifecycle.
///
/// Owns the display state machine, the request generation counter and the
/// in-flight task handle. Selector changes go in through
/// `selection_changed_relay`:
/// - `Some(key)` clears the region, shows the loading indicator and issues
///   one request (re-selecting the same key re-fetches);
/// - `None` (the placeholder option) clears the region without fetching.
///
/// A new selection drops the previous in-flight task handle, cancelling the
/// request; a completion that still slips through carries a stale generation
/// tag and is discarded.
#[derive(Clone)]
pub struct AggregateLifecycle<K, R>
where
    K: Clone + Send + Sync + 'static,
    R: Clone + Send + Sync + PartialEq + 'static,
{
    pub state: Actor<AggregateState<R>>,
    pub selection_changed_relay: Relay<Option<K>>,
}

impl<K, R> AggregateLifecycle<K, R>
where
    K: Clone + Send + Sync + 'static,
    R: Clone + Send + Sync + PartialEq + 'static,
{
    pub fn new<L>(view: &'static str, loader: L) -> Self
    where
        L: Fn(K) -> AggregateLoad<R> + 'static,
    {
        let (selection_changed_relay, mut selection_changed_stream) = relay::<Option<K>>();
        let (fetch_completed_relay, mut fetch_completed_stream) =
            relay::<(u64, Result<Vec<R>, ApiError>)>();

        let state = Actor::new(AggregateState::initial(), async move |state| {
            let mut generation = RequestGeneration::default();
            let mut inflight: Option<TaskHandle> = None;
            loop {
                select! {
                    selection = selection_changed_stream.next() => {
                        let Some(selection) = selection else { break };
                        // Dropping the handle cancels the previous request.
                        inflight = None;
                        match selection {
                            None => {
                                generation.invalidate();
                                state.set_neq(AggregateState::initial());
                            }
                            Some(key) => {
                                let current = generation.begin();
                                state.set(AggregateState::loading());
                                let fetch_completed = fetch_completed_relay.clone();
                                let load = loader(key);
                                inflight = Some(Task::start_droppable(async move {
                                    fetch_completed.send((current, load.await));
                                }));
                            }
                        }
                    }
                    completion = fetch_completed_stream.next() => {
                        let Some((completed_generation, result)) = completion else { break };
                        if !generation.is_current(completed_generation) {
                            zoon::println!(
                                "[{}] discarding stale response (generation {})",
                                view,
                                completed_generation,
                            );
                            continue;
                        }
                        inflight = None;
                        state.set(AggregateState::from_completion(view, result));
                    }
                }
            }
        });

        Self {
            state,
            selection_changed_relay,
        }
    }

    pub fn display_signal(&self) -> impl Signal<Item = DisplayState> + use<K, R> {
        self.state.signal_ref(|state| state.display)
    }

    pub fn rows_signal(&self) -> impl Signal<Item = Vec<R>> + use<K, R> {
        self.state.signal_ref(|state| state.rows.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::FutureExt;
    use zoon::SignalExt;

    #[tokio::test]
    async fn lifecycle_applies_completions_and_clears_on_placeholder() {
        let lifecycle = AggregateLifecycle::new("test", |key: u32| {
            async move { Ok(vec![key]) }.boxed_local()
        });
        let select = |selection| lifecycle.selection_changed_relay.send(selection);

        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
        select(Some(7));
        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

        let state = lifecycle.state.signal().to_stream().next().await.unwrap();
        assert_eq!(state.display, DisplayState::Content);
        assert_eq!(state.rows, vec![7]);

        // The placeholder selection clears the region without fetching.
        select(None);
        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

        let state = lifecycle.state.signal().to_stream().next().await.unwrap();
        assert_eq!(state.display, DisplayState::Initial);
        assert!(state.rows.is_empty());
        assert_eq!(state.failure, None);
    }

    #[test]
    fn generation_discards_superseded_completions() {
        let mut generation = RequestGeneration::default();
        let first = generation.begin();
        let second = generation.begin();

        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
    }

    #[test]
    fn clearing_the_selection_invalidates_the_outstanding_request() {
        let mut generation = RequestGeneration::default();
        let issued = generation.begin();
        // The placeholder option was selected while the request was in flight.
        generation.invalidate();
        assert!(!generation.is_current(issued));
    }

    #[test]
    fn schema_and_decode_errors_collapse_into_the_empty_taxonomy() {
        let schema_error = ApiError::Schema(shared::parse_years(serde_json::json!("nope")).unwrap_err());
        assert_eq!(FetchFailure::from_error(schema_error), FetchFailure::Empty);
        assert_eq!(
            FetchFailure::from_error(ApiError::Decode("not json".to_string())),
            FetchFailure::Empty
        );

        assert_eq!(
            FetchFailure::from_error(ApiError::Status(404)),
            FetchFailure::Request(ApiError::Status(404))
        );
        assert_eq!(
            FetchFailure::from_error(ApiError::Network("offline".to_string())),
            FetchFailure::Request(ApiError::Network("offline".to_string()))
        );
    }

    #[test]
    fn completions_map_onto_the_display_states() {
        let content = AggregateState::from_completion("test", Ok(vec![1, 2, 3]));
        assert_eq!(content.display, DisplayState::Content);
        assert_eq!(content.rows, vec![1, 2, 3]);
        assert_eq!(content.failure, None);

        let empty = AggregateState::<u32>::from_completion("test", Ok(Vec::new()));
        assert_eq!(empty.display, DisplayState::Empty);
        assert_eq!(empty.failure, Some(FetchFailure::Empty));

        let failed = AggregateState::<u32>::from_completion("test", Err(ApiError::Status(500)));
        assert_eq!(failed.display, DisplayState::Empty);
        assert!(failed.rows.is_empty());
        assert_eq!(
            failed.failure,
            Some(FetchFailure::Request(ApiError::Status(500)))
        );
    }
}
