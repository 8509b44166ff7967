//! Icon families
//!
//! A family resolves the three glyph names a rating row uses to concrete
//! path data plus a paint mode. Families stand in for the icon fonts a
//! host platform would otherwise have to register: everything here is
//! compiled in and looked up by identifier.

use crate::error::IconError;
use crate::glyphs;

/// Named glyph resources a rating row asks its family for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// A filled (selected) star
    Star,
    /// The left half of a star
    HalfStar,
    /// An unselected star
    EmptyStar,
}

/// How a glyph's path data is painted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintMode {
    /// Outline only, no fill
    Stroke,
    /// Filled body with a matching outline
    Fill,
}

/// A resolved glyph: path data plus paint mode
#[derive(Clone, Copy, Debug)]
pub struct GlyphSpec {
    pub path_data: &'static str,
    pub mode: PaintMode,
}

/// A named set of glyph assets
#[derive(Debug)]
pub struct IconFamily {
    id: &'static str,
    star: GlyphSpec,
    half_star: GlyphSpec,
    empty_star: GlyphSpec,
}

impl IconFamily {
    /// Stable identifier used for lookup
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Resolve a glyph name to its renderable spec
    pub fn resolve(&self, glyph: Glyph) -> GlyphSpec {
        match glyph {
            Glyph::Star => self.star,
            Glyph::HalfStar => self.half_star,
            Glyph::EmptyStar => self.empty_star,
        }
    }
}

/// Default family: empty slots render as a hollow star
pub const LUCIDE: IconFamily = IconFamily {
    id: "lucide",
    star: GlyphSpec {
        path_data: glyphs::STAR,
        mode: PaintMode::Fill,
    },
    half_star: GlyphSpec {
        path_data: glyphs::STAR_HALF,
        mode: PaintMode::Fill,
    },
    empty_star: GlyphSpec {
        path_data: glyphs::STAR,
        mode: PaintMode::Stroke,
    },
};

/// Variant family: empty slots render as a struck-through star
pub const LUCIDE_OFF: IconFamily = IconFamily {
    id: "lucide-off",
    star: GlyphSpec {
        path_data: glyphs::STAR,
        mode: PaintMode::Fill,
    },
    half_star: GlyphSpec {
        path_data: glyphs::STAR_HALF,
        mode: PaintMode::Fill,
    },
    empty_star: GlyphSpec {
        path_data: glyphs::STAR_OFF,
        mode: PaintMode::Stroke,
    },
};

/// Every built-in family, in lookup order
pub const FAMILIES: [&IconFamily; 2] = [&LUCIDE, &LUCIDE_OFF];

/// Look up a family by identifier
pub fn family(id: &str) -> Result<&'static IconFamily, IconError> {
    FAMILIES
        .iter()
        .copied()
        .find(|f| f.id == id)
        .ok_or_else(|| IconError::UnknownFamily(id.to_string()))
}

/// The family used when a widget does not pick one
pub fn default_family() -> &'static IconFamily {
    &LUCIDE
}
