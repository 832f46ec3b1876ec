use alloc::vec::Vec;
use core::ops::{Deref, RangeBounds};

use crate::Splice;

/// A `Vec` that records every mutation as a [`Splice`].
///
/// Hosts without their own observation mechanism can keep their items in an `ObservedVec`, then
/// drain the pending records with [`ObservedVec::take_splices`] and hand them to
/// [`crate::Repeater::handle_splices`] together with `&vec[..]`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObservedVec<T> {
    items: Vec<T>,
    splices: Vec<Splice>,
}

impl<T> ObservedVec<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            splices: Vec::new(),
        }
    }

    pub fn from_vec(items: Vec<T>) -> Self {
        Self {
            items,
            splices: Vec::new(),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns `true` when mutations are waiting to be drained.
    pub fn has_pending(&self) -> bool {
        !self.splices.is_empty()
    }

    /// Drains the records accumulated since the last call.
    pub fn take_splices(&mut self) -> Vec<Splice> {
        core::mem::take(&mut self.splices)
    }

    pub fn push(&mut self, item: T) {
        let index = self.items.len();
        self.items.push(item);
        self.splices.push(Splice::insert(index, 1));
    }

    pub fn pop(&mut self) -> Option<T> {
        let item = self.items.pop()?;
        self.splices.push(Splice::remove(self.items.len(), 1));
        Some(item)
    }

    /// Inserts at `index`, clamped to the current length.
    pub fn insert(&mut self, index: usize, item: T) {
        let index = index.min(self.items.len());
        self.items.insert(index, item);
        self.splices.push(Splice::insert(index, 1));
    }

    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            return None;
        }
        let item = self.items.remove(index);
        self.splices.push(Splice::remove(index, 1));
        Some(item)
    }

    pub fn extend(&mut self, iter: impl IntoIterator<Item = T>) {
        let index = self.items.len();
        self.items.extend(iter);
        let added = self.items.len() - index;
        if added > 0 {
            self.splices.push(Splice::insert(index, added));
        }
    }

    pub fn truncate(&mut self, len: usize) {
        let old = self.items.len();
        if len >= old {
            return;
        }
        self.items.truncate(len);
        self.splices.push(Splice::remove(len, old - len));
    }

    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Replaces `range` with `replace_with`, recording a single splice.
    pub fn splice(
        &mut self,
        range: impl RangeBounds<usize>,
        replace_with: impl IntoIterator<Item = T>,
    ) -> Vec<T> {
        let old = self.items.len();
        let start = match range.start_bound() {
            core::ops::Bound::Included(&s) => s,
            core::ops::Bound::Excluded(&s) => s.saturating_add(1),
            core::ops::Bound::Unbounded => 0,
        }
        .min(old);
        let end = match range.end_bound() {
            core::ops::Bound::Included(&e) => e.saturating_add(1),
            core::ops::Bound::Excluded(&e) => e,
            core::ops::Bound::Unbounded => old,
        }
        .clamp(start, old);

        let removed: Vec<T> = self.items.splice(start..end, replace_with).collect();
        let added = self.items.len() + removed.len() - old;
        if added > 0 || !removed.is_empty() {
            self.splices.push(Splice::new(start, removed.len(), added));
        }
        removed
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Deref for ObservedVec<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> From<Vec<T>> for ObservedVec<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}
