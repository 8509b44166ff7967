//! Rating Widget Demo
//!
//! Builds two rating rows, drives them with simulated taps, and writes an
//! HTML preview of their SVG rendering:
//! - A theme-colored row using the default (hollow star) family
//! - A custom-colored row using the struck-through empty-star family
//!
//! Run with: cargo run -p starbar_widget --example rating_demo

use starbar_widget::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::DEBUG.into()),
        )
        .init();

    ThemeState::init_default();
    let theme = ThemeState::get();

    // Theme-colored row: selected color comes from the theme primary
    let mut themed = rating()
        .total_count(5)
        .on_change(|value| println!("themed row rated {value}"))
        .build();
    themed.tap(3);

    // Custom row: gold over gray, struck-through empty stars, 10 slots
    let mut custom = rating()
        .total_count(10)
        .item_size(32.0)
        .colors(Color::GOLD, Color::GRAY)
        .icon_family(family("lucide-off")?)
        .on_change(|value| println!("custom row rated {value}"))
        .build();
    custom.tap(6);
    custom.tap(6); // second tap on the same slot changes nothing

    let surface = theme.color(ColorToken::Surface).to_css_string();
    let border = theme.color(ColorToken::Border).to_css_string();
    let text = theme.color(ColorToken::TextPrimary).to_css_string();
    let muted = theme.color(ColorToken::TextSecondary).to_css_string();

    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>starbar demo</title></head>
<body style="background:{surface};color:{text};font-family:sans-serif;padding:2rem">
<div style="border:1px solid {border};border-radius:8px;padding:1rem;margin-bottom:1rem">
<p>Themed, {themed_value} of {themed_total}</p>
{themed_svg}
</div>
<div style="border:1px solid {border};border-radius:8px;padding:1rem">
<p>Custom, {custom_value} of {custom_total}</p>
{custom_svg}
<p style="color:{muted}">struck-through empty stars from the lucide-off family</p>
</div>
</body>
</html>
"#,
        themed_value = themed.current_value(),
        themed_total = themed.total_count(),
        themed_svg = themed.render_svg(),
        custom_value = custom.current_value(),
        custom_total = custom.total_count(),
        custom_svg = custom.render_svg(),
    );

    let path = std::env::temp_dir().join("starbar_rating_demo.html");
    std::fs::write(&path, html)?;
    println!("preview written to {}", path.display());

    Ok(())
}
