//! Local UI state Atom helper
//!
//! Atom provides a convenient wrapper for simple local UI state while maintaining
//! the Actor+Relay architecture internally. It's designed for local component state
//! like dropdown open/closed, the active dashboard tab, the current selection.

use crate::dataflow::{Actor, Relay, relay};
use futures::StreamExt;
use zoon::Signal;

/// Internal update type for Atom operations
#[derive(Clone, Debug)]
enum AtomUpdate<T> {
    Set(T),
    SetNeq(T),
}

/// Convenient wrapper for local UI state using Actor+Relay internally.
///
/// Atom provides a simple interface for local component state while
/// maintaining architectural consistency. Use Atom for truly local UI
/// state like:
/// - Dropdown open/closed
/// - The active dashboard view
/// - The currently selected entity reference
///
/// Domain state (fetched rows, display state) belongs in domain Actors.
#[derive(Clone, Debug)]
pub struct Atom<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// The underlying Actor that manages state
    actor: Actor<T>,
    /// Relay for sending updates to the Actor
    setter: Relay<AtomUpdate<T>>,
}

impl<T> Atom<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a new Atom with an initial value.
    pub fn new(initial: T) -> Self
    where
        T: PartialEq,
    {
        let (setter, mut setter_stream) = relay();

        let actor = Actor::new(initial, async move |state| {
            while let Some(update) = setter_stream.next().await {
                match update {
                    AtomUpdate::Set(new_value) => {
                        state.set(new_value);
                    }
                    AtomUpdate::SetNeq(new_value) => {
                        state.set_neq(new_value);
                    }
                }
            }
        });

        Self { actor, setter }
    }

    /// Update the Atom's value.
    ///
    /// This sends the new value through the internal relay to the Actor.
    /// The update is processed asynchronously and triggers reactive signals.
    pub fn set(&self, value: T) {
        self.setter.send(AtomUpdate::Set(value));
    }

    /// Update the Atom's value only if it differs from the current value.
    ///
    /// This helps prevent unnecessary signal emissions and re-renders when
    /// the value hasn't actually changed.
    #[allow(dead_code)]
    pub fn set_neq(&self, value: T)
    where
        T: PartialEq,
    {
        self.setter.send(AtomUpdate::SetNeq(value));
    }

    /// Get a reactive signal for this Atom's value.
    ///
    /// This is the primary way to access Atom state. The signal emits
    /// the current value and all future updates.
    pub fn signal(&self) -> impl Signal<Item = T> + use<T> {
        self.actor.signal()
    }

    /// Get a reactive signal with a reference to avoid cloning.
    #[allow(dead_code)]
    pub fn signal_ref<U, F>(&self, f: F) -> impl Signal<Item = U> + use<T, U, F>
    where
        F: Fn(&T) -> U + Send + Sync + 'static,
        U: PartialEq + Send + Sync + 'static,
    {
        self.actor.signal_ref(f)
    }

    /// Get current value (for event handlers only)
    ///
    /// This provides immediate access to the current value for use in
    /// event handlers where signal-based access isn't practical.
    ///
    /// **Use sparingly** - prefer signal-based access when possible.
    pub fn get_cloned(&self) -> T {
        self.actor.state.lock_ref().clone()
    }
}

impl<T> Default for Atom<T>
where
    T: Clone + Send + Sync + Default + PartialEq + 'static,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use zoon::SignalExt;

    #[tokio::test]
    async fn test_atom_basic_functionality() {
        let atom = Atom::new(42);

        let initial_value = atom.signal().to_stream().next().await.unwrap();
        assert_eq!(initial_value, 42);

        atom.set(100);
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        let updated_value = atom.signal().to_stream().next().await.unwrap();
        assert_eq!(updated_value, 100);
    }

    #[tokio::test]
    async fn test_atom_default() {
        let default_selection: Atom<Option<u32>> = Atom::default();
        let default_open: Atom<bool> = Atom::default();

        assert_eq!(
            default_selection.signal().to_stream().next().await.unwrap(),
            None
        );
        assert!(!default_open.signal().to_stream().next().await.unwrap());
    }
}
