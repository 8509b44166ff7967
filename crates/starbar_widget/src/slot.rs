//! Icon slot model
//!
//! A rating row is an ordered sequence of slots. Each slot carries its
//! semantic fill state separately from the glyph and color that render it,
//! so a recolor pass can restyle without recomputing any fill logic.

use starbar_core::Color;
use starbar_icons::Glyph;

/// Unique identifier for a slot
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SlotId(pub u64);

impl SlotId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

/// Generator for unique slot IDs
#[derive(Debug)]
pub struct SlotIdGenerator {
    next: u64,
}

impl SlotIdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next(&mut self) -> SlotId {
        let id = SlotId(self.next);
        self.next += 1;
        id
    }
}

impl Default for SlotIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Semantic fill state of a slot
///
/// `Half` is part of the model and restyles like a selected slot, but no
/// widget operation currently transitions into it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FillState {
    #[default]
    Empty,
    Half,
    Fill,
}

impl FillState {
    /// Whether the selected palette applies to this state
    pub fn is_selected(&self) -> bool {
        matches!(self, FillState::Fill | FillState::Half)
    }

    /// The glyph that renders this state
    pub fn glyph(&self) -> Glyph {
        match self {
            FillState::Empty => Glyph::EmptyStar,
            FillState::Half => Glyph::HalfStar,
            FillState::Fill => Glyph::Star,
        }
    }
}

/// One icon in the rating row
#[derive(Clone, Debug, PartialEq)]
pub struct IconSlot {
    pub id: SlotId,
    pub state: FillState,
    pub glyph: Glyph,
    pub color: Color,
    pub size: f32,
}

impl IconSlot {
    /// Create a slot styled for `state`
    pub fn for_state(id: SlotId, state: FillState, color: Color, size: f32) -> Self {
        Self {
            id,
            state,
            glyph: state.glyph(),
            color,
            size,
        }
    }

    /// Restyle in place: state, glyph, and color move together
    pub fn apply_state(&mut self, state: FillState, color: Color) {
        self.state = state;
        self.glyph = state.glyph();
        self.color = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_glyphs() {
        assert_eq!(FillState::Empty.glyph(), Glyph::EmptyStar);
        assert_eq!(FillState::Half.glyph(), Glyph::HalfStar);
        assert_eq!(FillState::Fill.glyph(), Glyph::Star);
    }

    #[test]
    fn test_selected_palette_mapping() {
        assert!(!FillState::Empty.is_selected());
        assert!(FillState::Half.is_selected());
        assert!(FillState::Fill.is_selected());
    }

    #[test]
    fn test_id_generator_is_monotonic() {
        let mut ids = SlotIdGenerator::new();
        let first = ids.next();
        let second = ids.next();
        assert_eq!(first, SlotId(1));
        assert_eq!(second, SlotId(2));
        assert_ne!(first, second);
    }

    #[test]
    fn test_apply_state_keeps_glyph_in_sync() {
        let mut ids = SlotIdGenerator::new();
        let mut slot = IconSlot::for_state(ids.next(), FillState::Empty, Color::GRAY, 50.0);
        assert_eq!(slot.glyph, Glyph::EmptyStar);

        slot.apply_state(FillState::Fill, Color::GOLD);
        assert_eq!(slot.state, FillState::Fill);
        assert_eq!(slot.glyph, Glyph::Star);
        assert_eq!(slot.color, Color::GOLD);
        // Size is owned by the resize pass, not the fill pass
        assert_eq!(slot.size, 50.0);
    }
}
