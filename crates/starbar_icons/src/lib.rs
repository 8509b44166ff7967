//! # Starbar Icons
//!
//! Lucide-based star glyphs for the starbar rating widget.
//!
//! Glyphs are `pub const` SVG path data grouped into named families, so a
//! widget can swap its empty-star style by family id without touching any
//! asset pipeline.
//!
//! ## Usage
//!
//! ```rust
//! use starbar_icons::{family, glyphs, to_svg, to_svg_glyph, Glyph};
//!
//! // Family-agnostic rendering with currentColor
//! let svg = to_svg(glyphs::STAR, 24.0);
//!
//! // Family-resolved rendering with a concrete color
//! let fam = family("lucide")?;
//! let svg = to_svg_glyph(fam.resolve(Glyph::Star), 50.0, "#22c55e");
//! # Ok::<(), starbar_icons::IconError>(())
//! ```

pub mod error;
pub mod family;
pub mod glyphs;

pub use error::IconError;
pub use family::{default_family, family, Glyph, GlyphSpec, IconFamily, PaintMode, FAMILIES};

/// Default Lucide viewBox (all glyphs are 24x24)
pub const VIEW_BOX: (f32, f32, f32, f32) = (0.0, 0.0, 24.0, 24.0);

/// Default stroke width for Lucide glyphs
pub const STROKE_WIDTH: f32 = 2.0;

/// Generate a complete SVG string from glyph path data
///
/// Strokes with `currentColor` so the host's CSS color cascades in.
pub fn to_svg(path_data: &str, size: f32) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">{path_data}</svg>"#
    )
}

/// Generate SVG with a concrete stroke color
pub fn to_svg_colored(path_data: &str, size: f32, color: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 24 24" fill="none" stroke="{color}" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">{path_data}</svg>"#
    )
}

/// Generate SVG with the glyph body filled in the given color
pub fn to_svg_filled(path_data: &str, size: f32, color: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 24 24" fill="{color}" stroke="{color}" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">{path_data}</svg>"#
    )
}

/// Render a family-resolved glyph, dispatching on its paint mode
pub fn to_svg_glyph(spec: GlyphSpec, size: f32, color: &str) -> String {
    match spec.mode {
        PaintMode::Stroke => to_svg_colored(spec.path_data, size, color),
        PaintMode::Fill => to_svg_filled(spec.path_data, size, color),
    }
}

/// SVG paint attributes for a paint mode, for callers composing their own
/// markup around raw path data
pub fn paint_attrs(mode: PaintMode, color: &str) -> String {
    match mode {
        PaintMode::Stroke => format!(r#"fill="none" stroke="{color}""#),
        PaintMode::Fill => format!(r#"fill="{color}" stroke="{color}""#),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_svg() {
        let svg = to_svg(glyphs::STAR, 24.0);
        assert!(svg.contains("viewBox=\"0 0 24 24\""));
        assert!(svg.contains("width=\"24\""));
        assert!(svg.contains("stroke=\"currentColor\""));
    }

    #[test]
    fn test_to_svg_colored() {
        let svg = to_svg_colored(glyphs::STAR_OFF, 16.0, "#808080");
        assert!(svg.contains("width=\"16\""));
        assert!(svg.contains("stroke=\"#808080\""));
        assert!(svg.contains("fill=\"none\""));
    }

    #[test]
    fn test_to_svg_glyph_dispatches_on_mode() {
        let fam = family("lucide").unwrap();

        let filled = to_svg_glyph(fam.resolve(Glyph::Star), 50.0, "#00ff00");
        assert!(filled.contains("fill=\"#00ff00\""));

        let hollow = to_svg_glyph(fam.resolve(Glyph::EmptyStar), 50.0, "#808080");
        assert!(hollow.contains("fill=\"none\""));
        assert!(hollow.contains("stroke=\"#808080\""));
    }

    #[test]
    fn test_paint_attrs() {
        assert_eq!(
            paint_attrs(PaintMode::Stroke, "#333333"),
            r##"fill="none" stroke="#333333""##
        );
        assert_eq!(
            paint_attrs(PaintMode::Fill, "#333333"),
            r##"fill="#333333" stroke="#333333""##
        );
    }
}
