use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::float;
use crate::{
    BindingContext, FramePatch, NodeMove, RepeatError, RepeatOptions, Reprojection,
    ScrollDirection, ScrollState, WindowState,
};

/// A host view that can be rebound in place.
///
/// Views are created once through the factory passed to [`Repeater::attach`] (and
/// [`Repeater::resize`]) and are never re-created while scrolling: the repeater only rebinds them
/// and toggles their visibility.
pub trait BoundView<T, P = ()> {
    /// Mirrors a changed context into the view.
    fn rebind(&mut self, context: &BindingContext<T, P>);

    /// Shows or hides the view. Hidden views stay in the pool.
    fn set_hidden(&mut self, hidden: bool);

    /// Rendered extent of the view along the scroll axis, margins included.
    fn extent(&self) -> f64;
}

/// A pooled host view paired with the context it is currently bound to.
#[derive(Clone, Debug)]
pub struct RecycledView<V, T, P = ()> {
    view: V,
    context: BindingContext<T, P>,
    hidden: bool,
}

impl<V, T, P> RecycledView<V, T, P> {
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn context(&self) -> &BindingContext<T, P> {
        &self.context
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn into_view(self) -> V {
        self.view
    }
}

impl<V: BoundView<T, P>, T: Clone, P> RecycledView<V, T, P> {
    fn bind(&mut self, items: &[T], index: usize) {
        self.context.rebind(items, index);
        self.view.rebind(&self.context);
        self.set_hidden(index >= items.len());
    }

    fn set_hidden(&mut self, hidden: bool) {
        if self.hidden != hidden {
            self.hidden = hidden;
            self.view.set_hidden(hidden);
        }
    }
}

/// The viewport window manager.
///
/// A `Repeater` keeps a fixed ring of [`RecycledView`]s over an externally owned collection. The
/// collection is never stored: every operation that may rebind a view takes it as `&[T]`.
///
/// The host drives it by:
/// - feeding scroll deltas into [`Repeater::scroll_by`] (usually through an input adapter),
/// - calling [`Repeater::tick`] once per animation frame and applying the returned [`FramePatch`],
/// - forwarding collection mutations to [`Repeater::handle_splices`],
/// - forwarding viewport size changes to [`Repeater::resize`].
///
/// The first `slots` entries of the pool are live, in visual order; any surplus views left behind
/// by a shrinking viewport are parked hidden after them.
#[derive(Debug)]
pub struct Repeater<V, T, P = ()> {
    options: RepeatOptions,
    parent: P,
    scroll: ScrollState,
    window: WindowState,
    viewport_extent: f64,
    len: usize,
    views: VecDeque<RecycledView<V, T, P>>,
}

fn check_viewport(extent: f64) -> Result<f64, RepeatError> {
    if extent.is_finite() && extent >= 0.0 {
        Ok(extent)
    } else {
        rwarn!(extent, "rejecting viewport extent");
        Err(RepeatError::InvalidViewport { extent })
    }
}

impl<V, T, P> Repeater<V, T, P>
where
    V: BoundView<T, P>,
    T: Clone,
    P: Clone,
{
    /// Attaches to a viewport of `viewport_extent` and materializes the view pool.
    ///
    /// One probe view is created for index 0 and measured (unless `options.item_height` is set);
    /// the pool is then sized to cover the viewport plus `options.spare_rows`.
    pub fn attach(
        options: RepeatOptions,
        items: &[T],
        parent: P,
        viewport_extent: f64,
        mut create: impl FnMut(&BindingContext<T, P>) -> V,
    ) -> Result<Self, RepeatError> {
        let viewport_extent = check_viewport(viewport_extent)?;
        let len = items.len();

        let context = BindingContext::new(items.first().cloned(), 0, len, parent.clone());
        let probe = create(&context);
        let item_height = options.item_height.unwrap_or_else(|| probe.extent());
        if !(item_height.is_finite() && item_height > 0.0) {
            rwarn!(item_height, "rejecting row height");
            return Err(RepeatError::InvalidItemHeight {
                height: item_height,
            });
        }

        let slots = WindowState::slots_for(viewport_extent, item_height, options.spare_rows).max(1);
        rdebug!(len, item_height, viewport_extent, slots, "Repeater::attach");

        let mut views = VecDeque::with_capacity(slots);
        views.push_back(RecycledView {
            view: probe,
            context,
            hidden: false,
        });
        for index in 1..slots {
            let context =
                BindingContext::new(items.get(index).cloned(), index, len, parent.clone());
            let view = create(&context);
            views.push_back(RecycledView {
                view,
                context,
                hidden: false,
            });
        }
        for (index, view) in views.iter_mut().enumerate() {
            view.set_hidden(index >= len);
        }

        let window = WindowState::new(slots, item_height);
        let mut scroll = ScrollState::default();
        scroll.set_scroll_extent(window.scroll_extent(len, viewport_extent));

        Ok(Self {
            options,
            parent,
            scroll,
            window,
            viewport_extent,
            len,
            views,
        })
    }

    /// Advances one animation frame.
    ///
    /// Eases the current offset toward the target, then shifts the window by at most one row.
    /// Returns `None` when nothing visible changed; the host keeps scheduling ticks regardless.
    ///
    /// Shifting a single row per tick keeps the per-frame cost constant. At extreme velocities the
    /// window lags behind the offset for a few frames and catches up once scrolling slows down.
    pub fn tick(&mut self, items: &[T]) -> Option<FramePatch> {
        if items.len() != self.len {
            rwarn!(
                expected = self.len,
                actual = items.len(),
                "collection changed without splices; reprojecting"
            );
            self.reproject(items);
        }

        let ease = self.options.effective_ease();
        let rounded = self.scroll.ease_step(ease, self.options.settle_epsilon);
        let desired = self
            .window
            .first_for_offset(self.scroll.current_offset, self.len);

        if rounded == self.scroll.previous_offset && desired == self.window.first {
            return None;
        }
        self.scroll.previous_offset = rounded;

        let mut patch = FramePatch {
            translate: rounded,
            leading_offset: None,
            node_move: None,
            shift: None,
        };

        let first = self.window.first;
        let shift = if desired > first {
            self.shift_forward(items)
                .map(|node_move| (node_move, ScrollDirection::Forward))
        } else if desired < first {
            self.shift_backward(items)
                .map(|node_move| (node_move, ScrollDirection::Backward))
        } else {
            None
        };
        if let Some((node_move, direction)) = shift {
            patch.node_move = Some(node_move);
            patch.shift = Some(direction);
            patch.leading_offset = Some(self.window.leading_offset());
        }

        Some(patch)
    }

    fn shift_forward(&mut self, items: &[T]) -> Option<NodeMove> {
        let last = self.window.slots - 1;
        let mut view = self.views.pop_front()?;
        self.window.previous_first = self.window.first;
        self.window.first += 1;
        let index = self.window.index_of_slot(last);
        rtrace!(first = self.window.first, index, "shift forward");

        view.bind(items, index);
        self.views.insert(last, view);
        Some(NodeMove { from: 0, to: last })
    }

    fn shift_backward(&mut self, items: &[T]) -> Option<NodeMove> {
        let last = self.window.slots - 1;
        let mut view = self.views.remove(last)?;
        self.window.previous_first = self.window.first;
        self.window.first -= 1;
        let index = self.window.first;
        rtrace!(first = self.window.first, index, "shift backward");

        view.bind(items, index);
        self.views.push_front(view);
        Some(NodeMove { from: last, to: 0 })
    }

    /// Rebinds every live view to `first + slot` and parks surplus views.
    ///
    /// Re-clamps `first` to the tail policy and recomputes the scroll extent. Calling it twice in
    /// a row yields identical contexts.
    pub fn reproject(&mut self, items: &[T]) -> Reprojection {
        self.len = items.len();
        let max_first = self.window.max_first(self.len);
        if self.window.first > max_first {
            self.window.previous_first = self.window.first;
            self.window.first = max_first;
        }

        let slots = self.window.slots;
        let first = self.window.first;
        let mut bound = 0usize;
        let mut hidden = 0usize;
        for (slot, view) in self.views.iter_mut().enumerate() {
            if slot < slots {
                view.bind(items, first + slot);
                if view.hidden {
                    hidden += 1;
                } else {
                    bound += 1;
                }
            } else {
                view.set_hidden(true);
            }
        }

        let scroll_extent = self.window.scroll_extent(self.len, self.viewport_extent);
        self.scroll.set_scroll_extent(scroll_extent);
        rdebug!(len = self.len, first, bound, hidden, scroll_extent, "reproject");

        Reprojection {
            bound,
            hidden,
            rejected: 0,
            leading_offset: self.window.leading_offset(),
            scroll_extent,
        }
    }

    /// Handles a viewport size change.
    ///
    /// Grows the pool when the new viewport needs more rows. A shrinking viewport parks the
    /// surplus views hidden instead of destroying them.
    pub fn resize(
        &mut self,
        viewport_extent: f64,
        items: &[T],
        mut create: impl FnMut(&BindingContext<T, P>) -> V,
    ) -> Result<Reprojection, RepeatError> {
        let viewport_extent = check_viewport(viewport_extent)?;
        let slots = WindowState::slots_for(
            viewport_extent,
            self.window.item_height,
            self.options.spare_rows,
        )
        .max(1);
        rdebug!(
            viewport_extent,
            slots,
            pool = self.views.len(),
            "Repeater::resize"
        );

        while self.views.len() < slots {
            let index = self.window.first + self.views.len();
            let context = BindingContext::new(
                items.get(index).cloned(),
                index,
                items.len(),
                self.parent.clone(),
            );
            let view = create(&context);
            self.views.push_back(RecycledView {
                view,
                context,
                hidden: false,
            });
        }

        self.viewport_extent = viewport_extent;
        self.window.slots = slots;
        Ok(self.reproject(items))
    }

    /// Replaces the parent context and rebinds every live view.
    pub fn set_parent(&mut self, parent: P, items: &[T]) -> Reprojection {
        for view in self.views.iter_mut() {
            view.context.parent = parent.clone();
        }
        self.parent = parent;
        self.reproject(items)
    }

    /// Releases the pool, handing every view back to the host for disposal.
    pub fn detach(self) -> Vec<V> {
        rdebug!(pool = self.views.len(), "Repeater::detach");
        self.views.into_iter().map(RecycledView::into_view).collect()
    }
}

impl<V, T, P> Repeater<V, T, P> {
    pub fn options(&self) -> &RepeatOptions {
        &self.options
    }

    pub fn parent(&self) -> &P {
        &self.parent
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn window(&self) -> &WindowState {
        &self.window
    }

    pub fn first(&self) -> usize {
        self.window.first
    }

    pub fn slots(&self) -> usize {
        self.window.slots
    }

    pub fn item_height(&self) -> f64 {
        self.window.item_height
    }

    pub fn viewport_extent(&self) -> f64 {
        self.viewport_extent
    }

    /// Collection length as of the last attach, reprojection or tick.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn scroll_extent(&self) -> f64 {
        self.scroll.scroll_extent
    }

    /// Number of views in the pool, parked ones included.
    pub fn pool_size(&self) -> usize {
        self.views.len()
    }

    /// Live views in visual order.
    pub fn views(&self) -> impl Iterator<Item = &RecycledView<V, T, P>> {
        self.views.iter().take(self.window.slots)
    }

    /// Live view at visual `slot`.
    pub fn view_at(&self, slot: usize) -> Option<&RecycledView<V, T, P>> {
        if slot < self.window.slots {
            self.views.get(slot)
        } else {
            None
        }
    }

    /// Contexts of the live views, in visual order.
    pub fn contexts(&self) -> impl Iterator<Item = &BindingContext<T, P>> {
        self.views().map(RecycledView::context)
    }

    /// Indices of the live views that show a real item, in visual order.
    pub fn bound_indices(&self) -> Vec<usize> {
        self.views()
            .filter(|v| !v.is_hidden())
            .map(|v| v.context.index)
            .collect()
    }

    /// Adds `delta` to the target offset (negative scrolls down). Returns the clamped target.
    pub fn scroll_by(&mut self, delta: f64) -> f64 {
        let target = self.scroll.apply_delta(delta);
        rtrace!(delta, target, "scroll_by");
        target
    }

    /// Sets the target offset. Returns the clamped target.
    pub fn scroll_to(&mut self, offset: f64) -> f64 {
        self.scroll.set_target(offset)
    }

    /// Targets the offset that puts row `index` at the top of the viewport.
    pub fn scroll_to_index(&mut self, index: usize) -> f64 {
        self.scroll_to(-(index as f64) * self.window.item_height)
    }

    /// Row currently at the top edge of the viewport, ignoring the window's tail clamp.
    pub fn top_row(&self) -> usize {
        float::to_index(float::floor(
            -self.scroll.current_offset / self.window.item_height,
        ))
    }
}
