//! Color tokens for theming

use starbar_core::Color;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    // Brand colors
    Primary,
    PrimaryHover,

    // Surface colors
    Surface,
    Border,

    // Text colors
    TextPrimary,
    TextSecondary,
}

/// Complete set of semantic color tokens
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTokens {
    pub primary: Color,
    pub primary_hover: Color,
    pub surface: Color,
    pub border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Primary => self.primary,
            ColorToken::PrimaryHover => self.primary_hover,
            ColorToken::Surface => self.surface,
            ColorToken::Border => self.border,
            ColorToken::TextPrimary => self.text_primary,
            ColorToken::TextSecondary => self.text_secondary,
        }
    }

    /// Light palette (amber primary over white surfaces)
    pub fn light() -> Self {
        Self {
            primary: Color::from_hex(0xF59E0B),
            primary_hover: Color::from_hex(0xD97706),
            surface: Color::WHITE,
            border: Color::from_hex(0xE5E7EB),
            text_primary: Color::from_hex(0x111827),
            text_secondary: Color::from_hex(0x6B7280),
        }
    }

    /// Dark palette
    pub fn dark() -> Self {
        Self {
            primary: Color::from_hex(0xFBBF24),
            primary_hover: Color::from_hex(0xF59E0B),
            surface: Color::from_hex(0x111827),
            border: Color::from_hex(0x374151),
            text_primary: Color::from_hex(0xF9FAFB),
            text_secondary: Color::from_hex(0x9CA3AF),
        }
    }
}

impl Default for ColorTokens {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_the_matching_field() {
        let tokens = ColorTokens::light();
        assert_eq!(tokens.get(ColorToken::Primary), tokens.primary);
        assert_eq!(tokens.get(ColorToken::Border), tokens.border);
    }

    #[test]
    fn light_and_dark_have_distinct_primary() {
        assert_ne!(
            ColorTokens::light().get(ColorToken::Primary),
            ColorTokens::dark().get(ColorToken::Primary),
        );
    }
}
