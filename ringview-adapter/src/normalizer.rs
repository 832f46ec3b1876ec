use alloc::sync::Arc;
use alloc::vec::Vec;

use ringview::abs;

use crate::{
    Capabilities, DeltaEvent, DeltaMode, Handled, InputOptions, InputSource, Key, RawInput,
};

/// Callback invoked with every emitted [`DeltaEvent`].
pub type DeltaListener = Arc<dyn Fn(&DeltaEvent) + Send + Sync>;

/// Where the host wires device listeners.
///
/// The normalizer calls `add_source` once per supported [`InputSource`] on the first
/// initialization and `remove_source` for each of them on dispose. The host routes the matching
/// device events back through [`InputNormalizer::handle`].
pub trait EventTarget {
    fn add_source(&mut self, source: InputSource);
    fn remove_source(&mut self, source: InputSource);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

#[derive(Clone, Copy, Debug, PartialEq)]
struct DragAnchor {
    source: InputSource,
    x: f64,
    y: f64,
}

/// Turns raw device input into canonical [`DeltaEvent`]s.
///
/// All supported sources report in one sign convention: the delta is added to the scroll target,
/// so scrolling down through the content yields negative `delta_y`.
pub struct InputNormalizer {
    capabilities: Capabilities,
    options: InputOptions,
    listeners: Vec<(ListenerId, DeltaListener)>,
    next_id: u64,
    registered: Vec<InputSource>,
    drag: Option<DragAnchor>,
    x: f64,
    y: f64,
}

impl core::fmt::Debug for InputNormalizer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InputNormalizer")
            .field("capabilities", &self.capabilities)
            .field("options", &self.options)
            .field("listeners", &self.listeners.len())
            .field("registered", &self.registered)
            .field("drag", &self.drag)
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}

impl InputNormalizer {
    pub fn new(capabilities: Capabilities, options: InputOptions) -> Self {
        Self {
            capabilities,
            options,
            listeners: Vec::new(),
            next_id: 0,
            registered: Vec::new(),
            drag: None,
            x: 0.0,
            y: 0.0,
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn options(&self) -> &InputOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: InputOptions) {
        self.options = options;
    }

    /// Returns `true` once device sources are registered on a target.
    pub fn is_registered(&self) -> bool {
        !self.registered.is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Running sums of every emitted delta.
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Registers device sources on `target` and adds `listener`.
    ///
    /// Only the first call touches the target; later calls just append their listener.
    pub fn initialize(
        &mut self,
        target: &mut impl EventTarget,
        listener: impl Fn(&DeltaEvent) + Send + Sync + 'static,
    ) -> ListenerId {
        self.register_sources(target);
        self.add_listener(listener)
    }

    /// Registers every supported source on `target`. A no-op when already registered.
    pub fn register_sources(&mut self, target: &mut impl EventTarget) {
        if self.is_registered() {
            return;
        }
        for source in self.capabilities.sources() {
            target.add_source(source);
            self.registered.push(source);
        }
        rdebug!(sources = self.registered.len(), "register_sources");
    }

    pub fn add_listener(
        &mut self,
        listener: impl Fn(&DeltaEvent) + Send + Sync + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Arc::new(listener)));
        id
    }

    /// Returns `false` when `id` was not registered (or already removed).
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener, _)| *listener != id);
        self.listeners.len() != before
    }

    /// Unregisters every source from `target` and drops all listeners.
    ///
    /// Safe to call repeatedly; the normalizer can be initialized again afterwards.
    pub fn dispose(&mut self, target: &mut impl EventTarget) {
        for source in self.registered.drain(..) {
            target.remove_source(source);
        }
        self.listeners.clear();
        self.drag = None;
        rdebug!("dispose");
    }

    /// Normalizes one raw event and fans the result out to the listeners.
    pub fn handle(&mut self, raw: RawInput) -> Handled {
        if !self.capabilities.supports(raw.source()) {
            return Handled::ignored();
        }

        match raw {
            RawInput::Wheel {
                delta_x,
                delta_y,
                delta_mode,
                wheel_delta_x,
                wheel_delta_y,
            } => {
                let dx = self.wheel_axis(delta_x, delta_mode, wheel_delta_x);
                let dy = self.wheel_axis(delta_y, delta_mode, wheel_delta_y);
                self.emit(dx, dy, InputSource::Wheel, false)
            }
            RawInput::MouseWheel {
                wheel_delta,
                wheel_delta_x,
                wheel_delta_y,
            } => {
                let dy = if wheel_delta_y != 0.0 {
                    wheel_delta_y
                } else {
                    wheel_delta
                };
                self.emit(wheel_delta_x, dy, InputSource::MouseWheel, false)
            }
            RawInput::TouchStart { x, y } | RawInput::PointerDown { x, y } => {
                self.drag = Some(DragAnchor {
                    source: raw.source(),
                    x,
                    y,
                });
                Handled::swallowed()
            }
            RawInput::TouchMove { x, y } => self.drag_to(InputSource::Touch, x, y, 0.0),
            RawInput::PointerMove { x, y } => {
                self.drag_to(InputSource::Pointer, x, y, self.options.drag_threshold)
            }
            RawInput::TouchEnd | RawInput::PointerUp => {
                let source = raw.source();
                if self.drag.is_some_and(|anchor| anchor.source == source) {
                    self.drag = None;
                    Handled::swallowed()
                } else {
                    Handled::ignored()
                }
            }
            RawInput::KeyDown(key) => {
                let step = self.options.key_step;
                match key {
                    Key::ArrowUp => self.emit(0.0, step, InputSource::Keyboard, true),
                    Key::ArrowDown => self.emit(0.0, -step, InputSource::Keyboard, true),
                    Key::ArrowLeft => self.emit(-step, 0.0, InputSource::Keyboard, true),
                    Key::ArrowRight => self.emit(step, 0.0, InputSource::Keyboard, true),
                    Key::Other => Handled::ignored(),
                }
            }
        }
    }

    fn wheel_axis(&self, delta: f64, mode: DeltaMode, legacy: f64) -> f64 {
        if legacy != 0.0 {
            return legacy * self.options.wheel_multiplier;
        }
        let mut delta = -delta;
        if mode == DeltaMode::Line {
            delta *= self.options.line_multiplier;
        }
        delta * self.options.wheel_multiplier
    }

    fn drag_to(&mut self, source: InputSource, x: f64, y: f64, threshold: f64) -> Handled {
        let Some(anchor) = self.drag.filter(|anchor| anchor.source == source) else {
            // A move without a press (e.g. a mouse merely hovering).
            return if source == InputSource::Touch {
                self.drag = Some(DragAnchor { source, x, y });
                Handled::swallowed()
            } else {
                Handled::ignored()
            };
        };

        let dx = x - anchor.x;
        let dy = y - anchor.y;
        if abs(dx).max(abs(dy)) <= threshold {
            return Handled::swallowed();
        }
        self.drag = Some(DragAnchor { source, x, y });

        let multiplier = self.options.touch_multiplier;
        self.emit(dx * multiplier, dy * multiplier, source, true)
    }

    fn emit(
        &mut self,
        delta_x: f64,
        delta_y: f64,
        source: InputSource,
        prevent_default: bool,
    ) -> Handled {
        if !(delta_x.is_finite() && delta_y.is_finite()) || (delta_x == 0.0 && delta_y == 0.0) {
            return Handled {
                event: None,
                prevent_default,
            };
        }

        self.x += delta_x;
        self.y += delta_y;
        let event = DeltaEvent {
            delta_x,
            delta_y,
            x: self.x,
            y: self.y,
            source,
        };
        rtrace!(?source, delta_x, delta_y, "delta");
        for (_, listener) in &self.listeners {
            listener(&event);
        }

        Handled {
            event: Some(event),
            prevent_default,
        }
    }
}
