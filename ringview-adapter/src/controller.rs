use alloc::vec::Vec;

use ringview::{
    BindingContext, BoundView, FramePatch, RepeatError, Repeater, Reprojection, Splice,
};

use crate::{EventTarget, Handled, InputNormalizer, InputSource, Momentum, RawInput};

/// A frame-paced driver that wires input, momentum and a `ringview::Repeater` together.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `handle_input(raw, now_ms)` for every device event routed from the [`EventTarget`]
/// - `tick(now_ms, items)` once per animation frame, applying the returned patch
/// - `handle_splices` / `resize` when the collection or the viewport changes
///
/// Stopping is explicit: after [`Controller::stop`] (or [`Controller::detach`]) every tick is a
/// no-op, even if the host's frame loop fires once more.
#[derive(Debug)]
pub struct Controller<V, T, P = ()> {
    repeater: Repeater<V, T, P>,
    normalizer: InputNormalizer,
    momentum: Momentum,
    attached: bool,
}

impl<V, T, P> Controller<V, T, P>
where
    V: BoundView<T, P>,
    T: Clone,
    P: Clone,
{
    /// Takes over `repeater` and registers the normalizer's device sources on `target`.
    pub fn attach(
        repeater: Repeater<V, T, P>,
        mut normalizer: InputNormalizer,
        momentum: Momentum,
        target: &mut impl EventTarget,
    ) -> Self {
        normalizer.register_sources(target);
        rdebug!(
            slots = repeater.slots(),
            len = repeater.len(),
            "Controller::attach"
        );
        Self {
            repeater,
            normalizer,
            momentum,
            attached: true,
        }
    }

    pub fn repeater(&self) -> &Repeater<V, T, P> {
        &self.repeater
    }

    pub fn repeater_mut(&mut self) -> &mut Repeater<V, T, P> {
        &mut self.repeater
    }

    pub fn normalizer(&self) -> &InputNormalizer {
        &self.normalizer
    }

    pub fn normalizer_mut(&mut self) -> &mut InputNormalizer {
        &mut self.normalizer
    }

    pub fn momentum(&self) -> &Momentum {
        &self.momentum
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Feeds one device event.
    ///
    /// Normalized deltas move the repeater's target offset right away. Touch and mouse-drag
    /// presses start the momentum sampler and releases may start a decay. Wheel and keyboard
    /// deltas cancel a running decay.
    pub fn handle_input(&mut self, raw: RawInput, now_ms: u64) -> Handled {
        if !self.attached {
            return Handled::default();
        }
        let supported = self.normalizer.capabilities().supports(raw.source());

        if supported && raw.is_press() {
            self.momentum
                .press(now_ms, self.repeater.scroll().target_offset);
        }

        let handled = self.normalizer.handle(raw);
        if let Some(event) = handled.event {
            if matches!(
                event.source,
                InputSource::Wheel | InputSource::MouseWheel | InputSource::Keyboard
            ) {
                self.momentum.cancel();
            }
            self.repeater.scroll_by(event.delta_y);
        }

        if supported && raw.is_release() {
            self.momentum.release(now_ms);
        }
        handled
    }

    /// Advances one animation frame.
    ///
    /// Runs the momentum engine (sampling while pressed, feeding decay deltas into the target
    /// offset) and then the repeater's own tick. Returns `None` when detached or when nothing
    /// visible changed.
    pub fn tick(&mut self, now_ms: u64, items: &[T]) -> Option<FramePatch> {
        if !self.attached {
            return None;
        }

        let target = self.repeater.scroll().target_offset;
        if let Some(delta) = self.momentum.tick(now_ms, target) {
            let clamped = self.repeater.scroll_by(delta);
            if clamped == target {
                // Pinned against an edge.
                self.momentum.cancel();
            }
        }
        self.repeater.tick(items)
    }

    pub fn handle_splices(&mut self, items: &[T], splices: &[Splice]) -> Reprojection {
        self.repeater.handle_splices(items, splices)
    }

    pub fn resize(
        &mut self,
        viewport_extent: f64,
        items: &[T],
        create: impl FnMut(&BindingContext<T, P>) -> V,
    ) -> Result<Reprojection, RepeatError> {
        self.repeater.resize(viewport_extent, items, create)
    }

    /// Targets row `index`. Cancels any momentum.
    pub fn scroll_to_index(&mut self, index: usize) -> f64 {
        self.momentum.cancel();
        self.repeater.scroll_to_index(index)
    }

    /// Stops the frame loop: unregisters input, cancels momentum and turns `tick` into a no-op.
    ///
    /// Idempotent.
    pub fn stop(&mut self, target: &mut impl EventTarget) {
        if self.attached {
            rdebug!("Controller::stop");
        }
        self.attached = false;
        self.momentum.cancel();
        self.normalizer.dispose(target);
    }

    /// Stops the controller and hands every pooled view back to the host.
    pub fn detach(mut self, target: &mut impl EventTarget) -> Vec<V> {
        self.stop(target);
        self.repeater.detach()
    }
}
