use crate::float;

/// Scroll offsets of a repeater.
///
/// Offsets are non-positive: `0` shows the first row, `-scroll_extent` shows the last page.
/// `target_offset` is where input wants to go; `current_offset` eases toward it one tick at a time.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub target_offset: f64,
    pub current_offset: f64,
    /// Rounded `current_offset` of the last tick that did window work.
    pub previous_offset: f64,
    pub scroll_extent: f64,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            target_offset: 0.0,
            current_offset: 0.0,
            previous_offset: 0.0,
            scroll_extent: 0.0,
        }
    }
}

impl ScrollState {
    /// Clamps an offset into `[-scroll_extent, 0]`.
    pub fn clamp_offset(&self, offset: f64) -> f64 {
        if !offset.is_finite() {
            return if offset == f64::INFINITY {
                0.0
            } else {
                -self.scroll_extent
            };
        }
        offset.max(-self.scroll_extent).min(0.0)
    }

    /// Adds `delta` to the target offset and clamps it. Returns the new target.
    pub fn apply_delta(&mut self, delta: f64) -> f64 {
        if delta.is_nan() {
            return self.target_offset;
        }
        self.target_offset = self.clamp_offset(self.target_offset + delta);
        self.target_offset
    }

    pub fn set_target(&mut self, offset: f64) -> f64 {
        if offset.is_nan() {
            return self.target_offset;
        }
        self.target_offset = self.clamp_offset(offset);
        self.target_offset
    }

    /// Updates the scrollable extent and re-clamps both offsets.
    pub fn set_scroll_extent(&mut self, extent: f64) {
        self.scroll_extent = if extent.is_finite() {
            extent.max(0.0)
        } else {
            0.0
        };
        self.target_offset = self.clamp_offset(self.target_offset);
        self.current_offset = self.clamp_offset(self.current_offset);
    }

    /// Moves `current_offset` a fraction `ease` toward the target.
    ///
    /// Snaps onto the target once within `settle_epsilon`. Returns the rounded current offset.
    pub fn ease_step(&mut self, ease: f64, settle_epsilon: f64) -> f64 {
        let remaining = self.target_offset - self.current_offset;
        if float::abs(remaining) <= settle_epsilon {
            self.current_offset = self.target_offset;
        } else {
            self.current_offset += remaining * ease;
        }
        float::round(self.current_offset)
    }

    /// Returns `true` when the current offset has reached the target.
    pub fn is_settled(&self) -> bool {
        self.current_offset == self.target_offset
    }

    /// Jumps both offsets to `offset` (clamped), skipping easing.
    pub fn jump_to(&mut self, offset: f64) {
        let offset = if offset.is_nan() {
            self.target_offset
        } else {
            self.clamp_offset(offset)
        };
        self.target_offset = offset;
        self.current_offset = offset;
    }
}
