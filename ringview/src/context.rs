/// The data a recycled view is bound to.
///
/// A context is a pure function of `(item, index, len, parent)`: every positional flag is derived
/// from `index` and the collection length, and is recomputed whenever the view is rebound.
/// `item` is `None` for views parked past the end of the collection.
///
/// Consumers must not treat `index` as stable: a later reprojection after a collection mutation
/// may bind the same view to a different index.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BindingContext<T, P = ()> {
    pub item: Option<T>,
    pub index: usize,
    pub first: bool,
    pub last: bool,
    pub middle: bool,
    pub odd: bool,
    pub even: bool,
    pub parent: P,
}

impl<T, P> BindingContext<T, P> {
    pub fn new(item: Option<T>, index: usize, len: usize, parent: P) -> Self {
        let mut context = Self {
            item,
            index,
            first: false,
            last: false,
            middle: false,
            odd: false,
            even: false,
            parent,
        };
        context.set_position(index, len);
        context
    }

    /// Recomputes the positional flags for `index` in a collection of `len` items.
    pub fn set_position(&mut self, index: usize, len: usize) {
        let first = index == 0;
        let last = len > 0 && index == len - 1;
        let even = index % 2 == 0;
        self.index = index;
        self.first = first;
        self.last = last;
        self.middle = !(first || last);
        self.odd = !even;
        self.even = even;
    }

    /// Rebinds this context in place to `items[index]`.
    pub fn rebind(&mut self, items: &[T], index: usize)
    where
        T: Clone,
    {
        self.item = items.get(index).cloned();
        self.set_position(index, items.len());
    }

    /// Returns `true` when the context points at a real item.
    pub fn is_bound(&self) -> bool {
        self.item.is_some()
    }

    /// Resolves a template-facing name.
    ///
    /// `local` is the alias the template chose for the item (`item` by default). The special names
    /// are `$index`, `$first`, `$last`, `$middle`, `$odd`, `$even` and `$parent`.
    pub fn resolve<'a>(&'a self, name: &str, local: &str) -> Option<ContextValue<'a, T, P>> {
        let value = match name {
            "$index" => ContextValue::Index(self.index),
            "$first" => ContextValue::Flag(self.first),
            "$last" => ContextValue::Flag(self.last),
            "$middle" => ContextValue::Flag(self.middle),
            "$odd" => ContextValue::Flag(self.odd),
            "$even" => ContextValue::Flag(self.even),
            "$parent" => ContextValue::Parent(&self.parent),
            _ if name == local => ContextValue::Item(self.item.as_ref()?),
            _ => return None,
        };
        Some(value)
    }
}

/// A value looked up through [`BindingContext::resolve`].
#[derive(Debug, PartialEq, Eq)]
pub enum ContextValue<'a, T, P> {
    Item(&'a T),
    Index(usize),
    Flag(bool),
    Parent(&'a P),
}

// Only references inside, so no `T: Clone` / `P: Clone` bounds.
impl<T, P> Clone for ContextValue<'_, T, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, P> Copy for ContextValue<'_, T, P> {}
