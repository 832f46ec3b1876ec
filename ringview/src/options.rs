use alloc::borrow::Cow;

/// Configuration for [`crate::Repeater`].
///
/// Cheap to clone. With `feature = "serde"` missing fields fall back to [`Default`], so partial
/// configs load.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RepeatOptions {
    /// Name templates use for the bound item (see [`crate::BindingContext::resolve`]).
    pub local: Cow<'static, str>,
    /// Fraction of the remaining distance covered per tick (`0 < ease <= 1`).
    pub ease: f64,
    /// When the eased offset is closer than this to the target, it snaps onto the target.
    pub settle_epsilon: f64,
    /// Fixed row height. When `None`, the first view's measured extent is used.
    pub item_height: Option<f64>,
    /// Rows materialized beyond the ones needed to cover the viewport.
    pub spare_rows: usize,
}

impl Default for RepeatOptions {
    fn default() -> Self {
        Self {
            local: Cow::Borrowed("item"),
            ease: 0.1,
            settle_epsilon: 0.5,
            item_height: None,
            spare_rows: 1,
        }
    }
}

impl RepeatOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_local(mut self, local: impl Into<Cow<'static, str>>) -> Self {
        self.local = local.into();
        self
    }

    pub fn with_ease(mut self, ease: f64) -> Self {
        self.ease = ease;
        self
    }

    pub fn with_settle_epsilon(mut self, settle_epsilon: f64) -> Self {
        self.settle_epsilon = settle_epsilon;
        self
    }

    pub fn with_item_height(mut self, item_height: f64) -> Self {
        self.item_height = Some(item_height);
        self
    }

    pub fn with_spare_rows(mut self, spare_rows: usize) -> Self {
        self.spare_rows = spare_rows;
        self
    }

    /// `ease` clamped into `(0, 1]`; non-finite values fall back to the default.
    pub(crate) fn effective_ease(&self) -> f64 {
        if self.ease.is_finite() && self.ease > 0.0 {
            self.ease.min(1.0)
        } else {
            Self::default().ease
        }
    }
}
