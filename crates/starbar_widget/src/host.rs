//! Host view-tree integration

use crate::slot::IconSlot;

/// Receives slot mutations as the widget reconciles its row.
///
/// A retained-mode toolkit binding implements this to mirror the slot
/// sequence into its own tree without re-reading every slot after each
/// pass. Immediate-mode hosts can skip it and read
/// [`Rating::slots`](crate::Rating::slots) instead.
///
/// Indices are positions in the visible sequence at the time of the call.
/// Slots are only ever inserted or removed at the end of the row, so an
/// index observed here never shifts underneath a mirrored tree.
pub trait RatingHost {
    /// A slot entered the visible sequence at `index`
    fn slot_inserted(&mut self, index: usize, slot: &IconSlot);

    /// The slot at `index` left the visible sequence
    fn slot_removed(&mut self, index: usize);

    /// The slot at `index` was restyled
    fn slot_updated(&mut self, index: usize, slot: &IconSlot);
}
