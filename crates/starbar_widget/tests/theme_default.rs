use starbar_core::Color;
use starbar_theme::{ColorToken, ThemeState};
use starbar_widget::rating;

// Single test: the theme singleton is process-wide, and builder defaults
// must be resolved against a known theme state.
#[test]
fn build_resolves_the_selected_color_from_the_theme() {
    ThemeState::init_default();
    let theme_primary = ThemeState::get().color(ColorToken::Primary);

    let widget = rating().build();
    assert_eq!(widget.selected_color(), theme_primary);
    assert_eq!(widget.unselected_color(), Color::GRAY);
    assert_eq!(widget.slots()[0].color, theme_primary);

    // An explicit color still wins over the theme
    let custom = rating().selected_color(Color::BLUE).build();
    assert_eq!(custom.selected_color(), Color::BLUE);
}
