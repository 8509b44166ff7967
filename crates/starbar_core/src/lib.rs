//! Starbar Core
//!
//! This crate provides the foundational primitives for the starbar rating
//! widget kit:
//!
//! - **Color**: RGBA color values with hex parsing and CSS formatting
//! - **Listeners**: Explicitly-released registries for change notification
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use starbar_core::ListenerSet;
//!
//! let mut listeners: ListenerSet<u32> = ListenerSet::new();
//!
//! // Register a listener and keep its handle
//! let id = listeners.subscribe(Arc::new(|value| {
//!     println!("rating is now {value}");
//! }));
//!
//! listeners.emit(3);
//!
//! // Release it when the subscriber goes away
//! listeners.unsubscribe(id);
//! ```

pub mod color;
pub mod events;

pub use color::Color;
pub use events::{Listener, ListenerSet, SubscriptionId};
