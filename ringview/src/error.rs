use thiserror::Error;

/// Errors reported while attaching or resizing a [`crate::Repeater`].
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum RepeatError {
    /// The measured (or configured) row height is zero, negative or not finite.
    ///
    /// Every offset → index conversion divides by the row height, so the repeater refuses to
    /// attach instead of producing `NaN` offsets.
    #[error("invalid item height {height}: rows must have a positive, finite extent")]
    InvalidItemHeight { height: f64 },
    /// The viewport extent is negative or not finite.
    #[error("invalid viewport extent {extent}")]
    InvalidViewport { extent: f64 },
}

/// A splice record that does not fit the collection it was reported for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SpliceError {
    /// The record starts, or removes items, past the end of the collection it was applied to.
    #[error("splice at {index} removing {removed} items is out of range for length {len}")]
    OutOfRange {
        index: usize,
        removed: usize,
        len: usize,
    },
}
