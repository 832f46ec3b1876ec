use crate::float;

/// Which slice of the collection the live views represent.
///
/// Invariant: the live views are bound to `[first, first + slots) ∩ [0, len)`, slot `k` holding
/// index `first + k`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowState {
    pub first: usize,
    pub slots: usize,
    pub item_height: f64,
    pub previous_first: usize,
}

impl WindowState {
    pub fn new(slots: usize, item_height: f64) -> Self {
        Self {
            first: 0,
            slots,
            item_height,
            previous_first: 0,
        }
    }

    /// Number of views needed to cover `viewport_extent`, plus `spare_rows`.
    pub fn slots_for(viewport_extent: f64, item_height: f64, spare_rows: usize) -> usize {
        float::to_index(float::ceil(viewport_extent / item_height)).saturating_add(spare_rows)
    }

    /// Largest `first` that keeps the whole window inside the collection.
    ///
    /// Near the tail the window stops advancing instead of binding past `len - 1`.
    pub fn max_first(&self, len: usize) -> usize {
        len.saturating_sub(self.slots)
    }

    /// The `first` a (non-positive) scroll offset maps to, clamped to the tail policy.
    pub fn first_for_offset(&self, offset: f64, len: usize) -> usize {
        let rows = -float::ceil(offset / self.item_height);
        float::to_index(rows).min(self.max_first(len))
    }

    /// Leading offset (e.g. `margin-top`) that puts slot 0 at row `first`.
    pub fn leading_offset(&self) -> f64 {
        self.item_height * self.first as f64
    }

    /// Index bound to `slot`.
    pub fn index_of_slot(&self, slot: usize) -> usize {
        self.first + slot
    }

    /// Total scrollable extent: all rows minus one viewport, never negative.
    pub fn scroll_extent(&self, len: usize, viewport_extent: f64) -> f64 {
        (len as f64 * self.item_height - viewport_extent).max(0.0)
    }
}
