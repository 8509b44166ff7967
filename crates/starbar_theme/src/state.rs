//! Global theme state singleton
//!
//! Widgets resolve their default colors through [`ThemeState`] when it has
//! been initialized, and fall back to fixed colors when it has not. The
//! singleton is set once at app startup; scheme switches swap the active
//! token set in place.

use crate::tokens::{ColorToken, ColorTokens};
use starbar_core::Color;
use std::sync::{OnceLock, RwLock};

/// Global theme state instance
static THEME_STATE: OnceLock<ThemeState> = OnceLock::new();

/// Light or dark rendering mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    /// The other scheme
    pub fn toggle(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    /// The token set for this scheme
    pub fn tokens(self) -> ColorTokens {
        match self {
            ColorScheme::Light => ColorTokens::light(),
            ColorScheme::Dark => ColorTokens::dark(),
        }
    }
}

/// Global theme state - accessed directly by widgets during build
pub struct ThemeState {
    /// Current color scheme
    scheme: RwLock<ColorScheme>,

    /// Current color tokens
    colors: RwLock<ColorTokens>,
}

impl ThemeState {
    fn new(scheme: ColorScheme) -> Self {
        Self {
            scheme: RwLock::new(scheme),
            colors: RwLock::new(scheme.tokens()),
        }
    }

    /// Initialize the global theme state (call once at app startup)
    pub fn init(scheme: ColorScheme) {
        let _ = THEME_STATE.set(ThemeState::new(scheme));
    }

    /// Initialize with the light scheme
    pub fn init_default() {
        Self::init(ColorScheme::Light);
    }

    /// Get the global theme state instance
    pub fn get() -> &'static ThemeState {
        THEME_STATE
            .get()
            .expect("ThemeState not initialized. Call ThemeState::init() at app startup.")
    }

    /// Try to get the global theme state (returns None if not initialized)
    pub fn try_get() -> Option<&'static ThemeState> {
        THEME_STATE.get()
    }

    /// Get the current color scheme
    pub fn scheme(&self) -> ColorScheme {
        *self.scheme.read().unwrap()
    }

    /// Set the color scheme, swapping the active token set
    pub fn set_scheme(&self, scheme: ColorScheme) {
        let mut current = self.scheme.write().unwrap();
        if *current != scheme {
            tracing::debug!(
                "ThemeState::set_scheme - switching from {:?} to {:?}",
                *current,
                scheme
            );
            *current = scheme;
            drop(current);

            *self.colors.write().unwrap() = scheme.tokens();
        }
    }

    /// Toggle between light and dark mode
    pub fn toggle_scheme(&self) {
        let current = self.scheme();
        self.set_scheme(current.toggle());
    }

    /// Get a color by token
    pub fn color(&self, token: ColorToken) -> Color {
        self.colors.read().unwrap().get(token)
    }

    /// Get all color tokens
    pub fn colors(&self) -> ColorTokens {
        self.colors.read().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_scheme_swaps_the_token_set() {
        let state = ThemeState::new(ColorScheme::Light);
        assert_eq!(state.colors(), ColorTokens::light());

        state.set_scheme(ColorScheme::Dark);
        assert_eq!(state.scheme(), ColorScheme::Dark);
        assert_eq!(state.colors(), ColorTokens::dark());
    }

    #[test]
    fn set_scheme_to_current_is_a_no_op() {
        let state = ThemeState::new(ColorScheme::Dark);
        state.set_scheme(ColorScheme::Dark);
        assert_eq!(state.scheme(), ColorScheme::Dark);
    }

    #[test]
    fn toggle_scheme_round_trips() {
        let state = ThemeState::new(ColorScheme::Light);
        state.toggle_scheme();
        assert_eq!(state.scheme(), ColorScheme::Dark);
        state.toggle_scheme();
        assert_eq!(state.scheme(), ColorScheme::Light);
    }

    #[test]
    fn color_reads_the_active_palette() {
        let state = ThemeState::new(ColorScheme::Dark);
        assert_eq!(
            state.color(ColorToken::Primary),
            ColorTokens::dark().primary
        );
    }
}
