//! Starbar Theme System
//!
//! A small theming layer for the starbar rating widget kit.
//!
//! # Overview
//!
//! - **Design tokens**: Semantic colors for light and dark schemes
//! - **Global state**: A process-wide singleton widgets resolve defaults
//!   through, when present
//!
//! Widgets never require a theme: builders call [`ThemeState::try_get`]
//! and fall back to fixed colors when nothing was initialized.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use starbar_theme::{ColorToken, ThemeState};
//!
//! // Initialize theme at app startup
//! ThemeState::init_default();
//!
//! // Access theme in widgets
//! let theme = ThemeState::get();
//! let primary = theme.color(ColorToken::Primary);
//! ```

pub mod state;
pub mod tokens;

pub use state::{ColorScheme, ThemeState};
pub use tokens::{ColorToken, ColorTokens};
