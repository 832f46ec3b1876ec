/// Direction of a one-row window shift.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    /// `first` grew: the top view was recycled to the bottom.
    Forward,
    /// `first` shrank: the bottom view was recycled to the top.
    Backward,
}

/// A visual node reorder the host must mirror on its container.
///
/// Slots are positions among the *live* views, `0` being the top row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeMove {
    pub from: usize,
    pub to: usize,
}

/// Output of one animation tick of [`crate::Repeater::tick`].
///
/// The repeater does not own any visual container. The host applies the patch:
/// - translate the container by `translate` (e.g. `translate3d(0, {translate}px, 0)`),
/// - when `leading_offset` is set, push the rows down by that much (e.g. `margin-top`),
/// - when `node_move` is set, move the recycled node to its new slot.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FramePatch {
    pub translate: f64,
    pub leading_offset: Option<f64>,
    pub node_move: Option<NodeMove>,
    pub shift: Option<ScrollDirection>,
}

/// One contiguous mutation of the backing collection.
///
/// `removed` items starting at `index` were replaced by `added` new items. A batch is ordered:
/// each record applies to the collection as left by the records before it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Splice {
    pub index: usize,
    pub removed: usize,
    pub added: usize,
}

impl Splice {
    pub fn new(index: usize, removed: usize, added: usize) -> Self {
        Self {
            index,
            removed,
            added,
        }
    }

    pub fn insert(index: usize, added: usize) -> Self {
        Self::new(index, 0, added)
    }

    pub fn remove(index: usize, removed: usize) -> Self {
        Self::new(index, removed, 0)
    }

    /// Net change in collection length.
    pub fn delta(&self) -> isize {
        self.added as isize - self.removed as isize
    }

    /// Applies the record to a collection of `len` items and returns the resulting length.
    ///
    /// Fails when `index` or the removed range `[index, index + removed)` lies past `len`.
    pub fn validate(&self, len: usize) -> Result<usize, crate::SpliceError> {
        match self.index.checked_add(self.removed) {
            Some(end) if end <= len => Ok(len - self.removed + self.added),
            _ => Err(crate::SpliceError::OutOfRange {
                index: self.index,
                removed: self.removed,
                len,
            }),
        }
    }
}

/// Summary of a reprojection run by the change projector.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reprojection {
    /// Live views bound to a real item.
    pub bound: usize,
    /// Live views hidden because their index has no backing item.
    pub hidden: usize,
    /// Splice records that failed validation and were skipped.
    pub rejected: usize,
    /// Leading offset for the (possibly re-clamped) window.
    pub leading_offset: f64,
    /// Recomputed scrollable extent.
    pub scroll_extent: f64,
}
