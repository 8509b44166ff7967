//! The rating widget
//!
//! [`Rating`] owns an ordered row of icon slots and keeps it reconciled
//! against four inputs: total count, current value, palette, and item
//! size. Every setter runs its reconciliation pass synchronously on the
//! caller's thread; taps feed back into the current value.
//!
//! # Example
//!
//! ```rust
//! use starbar_widget::rating;
//!
//! let mut stars = rating()
//!     .total_count(5)
//!     .current_value(3)
//!     .on_change(|value| println!("rated {value}"))
//!     .build();
//!
//! // A tap on the fourth slot selects a rating of 4
//! stars.tap(3);
//! assert_eq!(stars.current_value(), 4);
//! ```

use crate::host::RatingHost;
use crate::slot::{FillState, IconSlot, SlotIdGenerator};
use crate::tap::{TapBinding, TapRegistry};
use starbar_core::{Color, Listener, ListenerSet, SubscriptionId};
use starbar_icons::{default_family, paint_attrs, IconFamily};
use starbar_theme::{ColorToken, ThemeState};
use std::sync::Arc;

/// Star rating component
///
/// A horizontal row of tappable icon slots representing a value out of a
/// configurable maximum. The row is a pure function of the widget's four
/// configuration inputs; no pass works from deltas.
pub struct Rating {
    total_count: u32,
    current_value: u32,
    item_size: f32,
    selected_color: Color,
    unselected_color: Color,
    family: &'static IconFamily,
    slots: Vec<IconSlot>,
    ids: SlotIdGenerator,
    taps: TapRegistry,
    change_listeners: ListenerSet<u32>,
    host: Option<Box<dyn RatingHost>>,
}

impl Rating {
    // ========== Configuration setters ==========

    /// Set the number of slots in the row.
    ///
    /// Values below 1 clamp to 1. This runs count reconciliation only:
    /// appended slots start Empty even when the current value covers their
    /// positions. Run [`reconcile_fill`](Self::reconcile_fill) (or set a
    /// value) to re-apply value styling.
    pub fn set_total_count(&mut self, count: u32) {
        if count == self.total_count {
            return;
        }
        self.total_count = count.max(1);
        self.reconcile_count();
    }

    /// Set the selected rating value.
    ///
    /// Values below 1 clamp to 1; values at or above the total count fill
    /// every slot. Registered listeners are notified with the new value,
    /// but only when the stored value actually changed: setting the
    /// current value again is a complete no-op, and an input that clamps
    /// onto the current value restyles without notifying.
    pub fn set_current_value(&mut self, value: u32) {
        if value == self.current_value {
            return;
        }
        let clamped = value.max(1);
        let changed = clamped != self.current_value;
        self.current_value = clamped;
        self.reconcile_fill();
        if changed {
            tracing::debug!("Rating::set_current_value - now {}", clamped);
            self.change_listeners.emit(clamped);
        }
    }

    /// Set both palette colors and recolor the row.
    ///
    /// Recoloring is driven purely by each slot's semantic state: Fill and
    /// Half slots take the selected color, Empty slots the unselected one.
    /// No state or glyph changes.
    pub fn set_colors(&mut self, selected: Color, unselected: Color) {
        self.selected_color = selected;
        self.unselected_color = unselected;
        self.recolor();
    }

    /// Set the color of selected (Fill/Half) slots
    pub fn set_selected_color(&mut self, color: Color) {
        self.selected_color = color;
        self.recolor();
    }

    /// Set the color of unselected (Empty) slots
    pub fn set_unselected_color(&mut self, color: Color) {
        self.unselected_color = color;
        self.recolor();
    }

    /// Set the rendered icon size, applying it to every slot
    pub fn set_item_size(&mut self, size: f32) {
        if size == self.item_size {
            return;
        }
        self.item_size = size;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.size != size {
                slot.size = size;
                if let Some(host) = self.host.as_deref_mut() {
                    host.slot_updated(index, slot);
                }
            }
        }
    }

    /// Install a host to receive slot mutations from later passes
    pub fn set_host<H: RatingHost + 'static>(&mut self, host: H) {
        self.host = Some(Box::new(host));
    }

    // ========== Input ==========

    /// Report a tap on the slot at `index`.
    ///
    /// Resolves the slot's tap binding and selects the value it produces
    /// (index + 1). Taps on missing slots, or on slots whose binding was
    /// released, are inert.
    pub fn tap(&mut self, index: usize) {
        let slot_id = match self.slots.get(index) {
            Some(slot) => slot.id,
            None => {
                tracing::trace!("Rating::tap - no slot at index {}", index);
                return;
            }
        };
        if let Some(binding) = self.taps.resolve(slot_id) {
            self.set_current_value(binding.value);
        } else {
            tracing::trace!("Rating::tap - slot {} is not wired", index);
        }
    }

    // ========== Reconciliation passes ==========

    /// Bring the slot count into agreement with the configured total.
    ///
    /// Shrinks from the end, releasing each removed slot's tap binding
    /// before the slot leaves the row. Grows by appending Empty slots in
    /// the unselected color, each wired into the tap registry before it
    /// becomes visible. Idempotent, and independent of
    /// [`reconcile_fill`](Self::reconcile_fill): the two passes can run in
    /// either order.
    pub fn reconcile_count(&mut self) {
        let target = self.total_count as usize;
        if self.slots.len() == target {
            return;
        }
        tracing::debug!(
            "Rating::reconcile_count - {} -> {} slots",
            self.slots.len(),
            target
        );

        while self.slots.len() > target {
            let index = self.slots.len() - 1;
            let slot_id = self.slots[index].id;
            self.taps.release(slot_id);
            self.slots.pop();
            if let Some(host) = self.host.as_deref_mut() {
                host.slot_removed(index);
            }
        }

        while self.slots.len() < target {
            let value = self.slots.len() as u32 + 1;
            let id = self.ids.next();
            let slot = IconSlot::for_state(id, FillState::Empty, self.unselected_color, self.item_size);
            self.taps.register(id, TapBinding { value });
            self.slots.push(slot);
            let index = self.slots.len() - 1;
            if let Some(host) = self.host.as_deref_mut() {
                host.slot_inserted(index, &self.slots[index]);
            }
        }
    }

    /// Restyle every slot from the current value.
    ///
    /// Positions are 1-based: a slot is Fill when its position is within
    /// the current value, Empty otherwise. When the value meets or exceeds
    /// the total count, every slot fills. Idempotent; never notifies
    /// listeners.
    pub fn reconcile_fill(&mut self) {
        let value = self.current_value;
        let full_house = value >= self.total_count;
        let selected = self.selected_color;
        let unselected = self.unselected_color;
        tracing::trace!(
            "Rating::reconcile_fill - value {} of {}",
            value,
            self.total_count
        );

        for (index, slot) in self.slots.iter_mut().enumerate() {
            let position = index as u32 + 1;
            let state = if full_house || position <= value {
                FillState::Fill
            } else {
                FillState::Empty
            };
            let color = if state.is_selected() { selected } else { unselected };
            if slot.state != state || slot.color != color {
                slot.apply_state(state, color);
                if let Some(host) = self.host.as_deref_mut() {
                    host.slot_updated(index, slot);
                }
            }
        }
    }

    fn recolor(&mut self) {
        let selected = self.selected_color;
        let unselected = self.unselected_color;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            let color = if slot.state.is_selected() { selected } else { unselected };
            if slot.color != color {
                slot.color = color;
                if let Some(host) = self.host.as_deref_mut() {
                    host.slot_updated(index, slot);
                }
            }
        }
    }

    // ========== Change notification ==========

    /// Register a listener for value changes
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(u32) + Send + Sync + 'static,
    {
        self.change_listeners.subscribe(Arc::new(listener))
    }

    /// Release a listener registration. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.change_listeners.unsubscribe(id)
    }

    /// Release every internal registration: tap bindings and listeners.
    ///
    /// Runs automatically on drop. The slot sequence itself stays intact
    /// so a host can still read the final state.
    pub fn teardown(&mut self) {
        tracing::debug!(
            "Rating::teardown - releasing {} tap bindings, {} listeners",
            self.taps.len(),
            self.change_listeners.len()
        );
        self.taps.clear();
        self.change_listeners.clear();
    }

    // ========== Accessors ==========

    /// Number of slots in the row
    pub fn total_count(&self) -> u32 {
        self.total_count
    }

    /// The selected rating value
    pub fn current_value(&self) -> u32 {
        self.current_value
    }

    /// Rendered icon size in px
    pub fn item_size(&self) -> f32 {
        self.item_size
    }

    /// Color applied to selected slots
    pub fn selected_color(&self) -> Color {
        self.selected_color
    }

    /// Color applied to unselected slots
    pub fn unselected_color(&self) -> Color {
        self.unselected_color
    }

    /// The icon family slots resolve their glyphs through
    pub fn icon_family(&self) -> &'static IconFamily {
        self.family
    }

    /// The slot sequence, in display order
    pub fn slots(&self) -> &[IconSlot] {
        &self.slots
    }

    // ========== Rendering ==========

    /// Render the whole row as standalone SVG markup.
    ///
    /// Slots are laid out left to right on an item-size grid, each glyph
    /// scaled from its 24x24 viewBox and painted per its family's mode.
    pub fn render_svg(&self) -> String {
        let size = self.item_size;
        let width = size * self.slots.len() as f32;
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{size}" viewBox="0 0 {width} {size}">"#
        );
        for (index, slot) in self.slots.iter().enumerate() {
            let spec = self.family.resolve(slot.glyph);
            let x = index as f32 * size;
            let scale = slot.size / 24.0;
            let paint = paint_attrs(spec.mode, &slot.color.to_css_string());
            svg.push_str(&format!(
                r#"<g transform="translate({x} 0) scale({scale})" {paint} stroke-width="2" stroke-linecap="round" stroke-linejoin="round">{path}</g>"#,
                path = spec.path_data
            ));
        }
        svg.push_str("</svg>");
        svg
    }
}

impl Drop for Rating {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Internal configuration for building a Rating
struct RatingConfig {
    total_count: u32,
    current_value: u32,
    item_size: f32,
    selected_color: Option<Color>,
    unselected_color: Option<Color>,
    family: &'static IconFamily,
    on_change: Option<Listener<u32>>,
    host: Option<Box<dyn RatingHost>>,
}

impl RatingConfig {
    fn new() -> Self {
        Self {
            total_count: 5,
            current_value: 1,
            item_size: 50.0,
            selected_color: None,
            unselected_color: None,
            family: default_family(),
            on_change: None,
            host: None,
        }
    }
}

/// Builder for creating Rating widgets with a fluent API
pub struct RatingBuilder {
    config: RatingConfig,
}

impl RatingBuilder {
    pub fn new() -> Self {
        Self {
            config: RatingConfig::new(),
        }
    }

    /// Set the number of slots (values below 1 clamp to 1 at build)
    pub fn total_count(mut self, count: u32) -> Self {
        self.config.total_count = count;
        self
    }

    /// Set the initial rating value (values below 1 clamp to 1 at build)
    pub fn current_value(mut self, value: u32) -> Self {
        self.config.current_value = value;
        self
    }

    /// Set the rendered icon size in px
    pub fn item_size(mut self, size: f32) -> Self {
        self.config.item_size = size;
        self
    }

    /// Set the color of selected slots
    pub fn selected_color(mut self, color: Color) -> Self {
        self.config.selected_color = Some(color);
        self
    }

    /// Set the color of unselected slots
    pub fn unselected_color(mut self, color: Color) -> Self {
        self.config.unselected_color = Some(color);
        self
    }

    /// Set both palette colors
    pub fn colors(mut self, selected: Color, unselected: Color) -> Self {
        self.config.selected_color = Some(selected);
        self.config.unselected_color = Some(unselected);
        self
    }

    /// Set the icon family slots resolve their glyphs through
    pub fn icon_family(mut self, family: &'static IconFamily) -> Self {
        self.config.family = family;
        self
    }

    /// Install a host that mirrors slot mutations
    pub fn host<H: RatingHost + 'static>(mut self, host: H) -> Self {
        self.config.host = Some(Box::new(host));
        self
    }

    /// Set the change callback
    ///
    /// Called whenever the stored rating value changes, with the new value.
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(u32) + Send + Sync + 'static,
    {
        self.config.on_change = Some(Arc::new(callback));
        self
    }

    /// Build the widget, creating and styling its initial slot row.
    ///
    /// Color defaults resolve here: selected falls back to the theme
    /// primary when a theme is initialized, else green; unselected falls
    /// back to gray. The initial styling emits no change notification.
    pub fn build(self) -> Rating {
        let config = self.config;
        let selected_color = config.selected_color.unwrap_or_else(|| {
            ThemeState::try_get()
                .map(|theme| theme.color(ColorToken::Primary))
                .unwrap_or(Color::GREEN)
        });
        let unselected_color = config.unselected_color.unwrap_or(Color::GRAY);

        let mut widget = Rating {
            total_count: config.total_count.max(1),
            current_value: config.current_value.max(1),
            item_size: config.item_size,
            selected_color,
            unselected_color,
            family: config.family,
            slots: Vec::new(),
            ids: SlotIdGenerator::new(),
            taps: TapRegistry::new(),
            change_listeners: ListenerSet::new(),
            host: config.host,
        };
        if let Some(listener) = config.on_change {
            widget.change_listeners.subscribe(listener);
        }
        widget.reconcile_count();
        widget.reconcile_fill();
        widget
    }
}

impl Default for RatingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a rating widget builder
///
/// Defaults: 5 slots, value 1, 50px icons, theme primary (green fallback)
/// for selected slots and gray for unselected.
///
/// # Example
///
/// ```rust
/// use starbar_widget::rating;
///
/// let stars = rating().total_count(10).current_value(7).build();
/// assert_eq!(stars.slots().len(), 10);
/// ```
pub fn rating() -> RatingBuilder {
    RatingBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let stars = rating().build();
        assert_eq!(stars.total_count(), 5);
        assert_eq!(stars.current_value(), 1);
        assert_eq!(stars.item_size(), 50.0);
        assert_eq!(stars.slots().len(), 5);
        // No theme is initialized in this binary, so the fixed fallbacks apply
        assert_eq!(stars.selected_color(), Color::GREEN);
        assert_eq!(stars.unselected_color(), Color::GRAY);
    }

    #[test]
    fn test_build_styles_the_initial_value() {
        let stars = rating().build();
        let states: Vec<FillState> = stars.slots().iter().map(|s| s.state).collect();
        assert_eq!(
            states,
            vec![
                FillState::Fill,
                FillState::Empty,
                FillState::Empty,
                FillState::Empty,
                FillState::Empty,
            ]
        );
    }

    #[test]
    fn test_builder_clamps_zero_inputs() {
        let stars = rating().total_count(0).current_value(0).build();
        assert_eq!(stars.total_count(), 1);
        assert_eq!(stars.current_value(), 1);
        assert_eq!(stars.slots().len(), 1);
    }

    #[test]
    fn test_render_svg_emits_one_group_per_slot() {
        let stars = rating()
            .total_count(3)
            .colors(Color::GOLD, Color::GRAY)
            .build();
        let svg = stars.render_svg();

        assert_eq!(svg.matches("<g ").count(), 3);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        // One filled slot in gold, two hollow in gray
        assert!(svg.contains(&format!("fill=\"{}\"", Color::GOLD.to_css_string())));
        assert!(svg.contains(&format!("stroke=\"{}\"", Color::GRAY.to_css_string())));
    }

    #[test]
    fn test_render_svg_row_dimensions() {
        let stars = rating().total_count(4).item_size(20.0).build();
        let svg = stars.render_svg();
        assert!(svg.contains("width=\"80\""));
        assert!(svg.contains("height=\"20\""));
    }
}
