//! Core dataflow primitives for reactive state management
//!
//! This module provides the foundational Actor+Relay architecture
//! components that are independent of business logic. Every view
//! controller in the dashboard owns its state through these primitives.
//!
//! # Core Components
//!
//! - **[`Relay`]** - Type-safe event streaming using simple channels
//! - **[`Actor`]** - Single-value reactive state container
//! - **[`Atom`]** - Convenient wrapper for local UI state
//!
//! # Architecture Principles
//!
//! 1. **No Raw Mutables** - All state uses Actor+Relay or Atom
//! 2. **Event-Source Naming** - Relays follow `{source}_{event}_relay` pattern
//! 3. **No Direct Access** - No `.get()` methods, all access through signals
//! 4. **Cache Values Only in Actors** - Value caching only inside Actor loops

pub mod actor;
pub mod atom;
pub mod relay;

pub use actor::Actor;
pub use atom::Atom;
pub use relay::{Relay, relay};
