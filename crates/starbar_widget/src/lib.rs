//! # Starbar Widget
//!
//! A host-agnostic star rating widget built on the starbar kit crates.
//!
//! - **Slots**: `starbar_widget` keeps an ordered row of icon slots in
//!   sync with the configured count, value, palette, and size
//! - **Glyphs**: `starbar_icons` supplies the star assets by family
//! - **Theme Tokens**: `starbar_theme` provides the default palette when
//!   initialized
//!
//! The widget owns no event loop and draws nothing itself: a host reports
//! taps with [`Rating::tap`], observes values through change listeners,
//! and renders the slot sequence however it likes (slot structs, a
//! [`RatingHost`] mirror, or the built-in SVG row renderer).
//!
//! ## Example
//!
//! ```rust
//! use starbar_widget::prelude::*;
//!
//! let mut stars = rating()
//!     .total_count(5)
//!     .colors(Color::GOLD, Color::GRAY)
//!     .build();
//!
//! stars.tap(2);
//! assert_eq!(stars.current_value(), 3);
//!
//! let states: Vec<FillState> = stars.slots().iter().map(|s| s.state).collect();
//! assert_eq!(
//!     states,
//!     vec![FillState::Fill, FillState::Fill, FillState::Fill, FillState::Empty, FillState::Empty]
//! );
//! ```

pub mod host;
pub mod rating;
pub mod slot;
pub mod tap;

pub use host::RatingHost;
pub use rating::{rating, Rating, RatingBuilder};
pub use slot::{FillState, IconSlot, SlotId, SlotIdGenerator};
pub use tap::{TapBinding, TapRegistry};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::host::RatingHost;
    pub use crate::rating::{rating, Rating, RatingBuilder};
    pub use crate::slot::{FillState, IconSlot, SlotId};
    // Re-export commonly needed kit types
    pub use starbar_core::{Color, SubscriptionId};
    pub use starbar_icons::{family, Glyph, IconFamily};
    pub use starbar_theme::{ColorScheme, ColorToken, ThemeState};
}
