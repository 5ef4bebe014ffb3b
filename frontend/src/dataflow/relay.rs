//! Simplified event streaming Relay implementation
//!
//! Relay provides type-safe event streaming for Actor+Relay architecture
//! using simple unbounded channels instead of complex custom Stream implementation.

use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};
use std::sync::{Arc, OnceLock};

/// Type-safe event streaming relay for Actor+Relay architecture.
///
/// Relays provide reliable message passing from UI components to Actors
/// using simple unbounded channels.
///
/// # Event-Source Naming Convention
///
/// All relays MUST follow `{source}_{event}_relay` naming pattern:
/// - `user_selected_relay` - User picked an entry in a selector
/// - `fetch_completed_relay` - An aggregate request finished
/// - `theme_toggled_relay` - User clicked the theme switch
///
/// # Examples
///
/// ```rust
/// use crate::dataflow::{Relay, relay};
///
/// // Create relay with subscription stream
/// let (user_selected_relay, mut stream) = relay::<Option<u32>>();
///
/// // Emit events from UI
/// user_selected_relay.send(Some(141));
///
/// // Process events in Actor
/// while let Some(selection) = stream.next().await {
///     zoon::println!("Selected user: {:?}", selection);
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Relay<T>
where
    T: Clone + Send + Sync + 'static,
{
    sender: UnboundedSender<T>,
    #[cfg(debug_assertions)]
    emit_location: Arc<OnceLock<&'static std::panic::Location<'static>>>,
}

/// Error type for Relay operations
#[derive(Debug, Clone)]
pub enum RelayError {
    /// The channel has been closed (receiver dropped)
    ChannelClosed,
    /// Relay send called from multiple locations (debug builds only)
    #[cfg(debug_assertions)]
    MultipleEmitters {
        previous: &'static std::panic::Location<'static>,
        current: &'static std::panic::Location<'static>,
    },
}

impl<T> Relay<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a new Relay with an associated receiver stream.
    ///
    /// Returns a tuple of (Relay, UnboundedReceiver) following Rust's
    /// channel patterns. Use the `relay()` function for more convenient creation.
    pub fn new() -> (Self, UnboundedReceiver<T>) {
        let (sender, receiver) = unbounded();
        (
            Relay {
                sender,
                #[cfg(debug_assertions)]
                emit_location: Arc::new(OnceLock::new()),
            },
            receiver,
        )
    }

    /// Check that this relay is only being sent from a single source location.
    ///
    /// In debug builds, enforces single-source constraint for relays.
    /// Returns an error if the relay has been sent from a different location.
    #[cfg(debug_assertions)]
    #[track_caller]
    fn check_single_source(&self) -> Result<(), RelayError> {
        let caller = std::panic::Location::caller();
        match self.emit_location.set(caller) {
            Ok(()) => Ok(()),                              // First call, location set
            Err(previous) if previous == caller => Ok(()), // Same location, allowed
            Err(previous) => Err(RelayError::MultipleEmitters {
                previous,
                current: caller,
            }),
        }
    }

    /// Send an event through the relay.
    ///
    /// If the receiver has been dropped, the event is silently discarded.
    /// Use `try_send()` if you need to handle send failures.
    ///
    /// In debug builds, panics if this relay has been sent from a different
    /// location in the code (enforces single-source constraint).
    #[track_caller]
    pub fn send(&self, value: T) {
        #[cfg(debug_assertions)]
        if let Err(e) = self.check_single_source() {
            panic!("{:?}", e);
        }

        // Events are dropped if no subscriber exists
        let _ = self.sender.unbounded_send(value);
    }

    /// Try to send an event through the relay with explicit error handling.
    ///
    /// Returns an error if the channel has been closed (receiver dropped).
    /// In debug builds, also returns an error if this relay has been sent
    /// from a different location in the code.
    #[track_caller]
    pub fn try_send(&self, value: T) -> Result<(), RelayError> {
        #[cfg(debug_assertions)]
        self.check_single_source()?;

        self.sender
            .unbounded_send(value)
            .map_err(|_| RelayError::ChannelClosed)
    }
}

impl<T> Default for Relay<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a new Relay with a receiver that is immediately dropped.
    ///
    /// This creates a "disconnected" relay where events are silently discarded.
    /// Useful for placeholder initialization before wiring actual relays and
    /// for testing scenarios where event handling is not needed.
    fn default() -> Self {
        let (relay, _receiver) = Self::new();
        relay
    }
}

/// Creates a new Relay with an associated receiver stream.
///
/// This is the idiomatic way to create a Relay for use with Actors,
/// following Rust's channel pattern conventions.
///
/// # Examples
///
/// ```rust
/// use crate::dataflow::relay;
/// use futures::{StreamExt, select};
///
/// let (year_selected_relay, mut year_selected_stream) = relay();
/// let (months_loaded_relay, mut months_loaded_stream) = relay();
///
/// let months = Actor::new(Vec::new(), async move |state| {
///     loop {
///         select! {
///             Some(year) = year_selected_stream.next() => {
///                 state.set_neq(Vec::new());
///             }
///             Some(months) = months_loaded_stream.next() => {
///                 state.set(months);
///             }
///         }
///     }
/// });
/// ```
pub fn relay<T>() -> (Relay<T>, UnboundedReceiver<T>)
where
    T: Clone + Send + Sync + 'static,
{
    Relay::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[tokio::test]
    async fn test_relay_basic_functionality() {
        let (relay, mut receiver) = Relay::new();

        relay.send("selection_changed".to_string());

        let received = receiver.next().await;
        assert_eq!(received, Some("selection_changed".to_string()));
    }

    #[tokio::test]
    async fn test_relay_try_send() {
        let (relay, mut receiver) = Relay::new();

        // Should succeed while receiver exists
        assert!(relay.try_send("event".to_string()).is_ok());
        assert_eq!(receiver.next().await, Some("event".to_string()));

        // Drop receiver
        drop(receiver);

        // Should fail after receiver dropped
        assert!(relay.try_send("lost".to_string()).is_err());
    }

    #[tokio::test]
    async fn test_relay_function() {
        let (relay, mut stream) = relay::<Option<u32>>();

        relay.send(Some(141));

        assert_eq!(stream.next().await, Some(Some(141)));
    }
}
