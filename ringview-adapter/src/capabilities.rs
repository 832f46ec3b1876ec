use crate::InputSource;

/// Which input devices the host environment offers.
///
/// Built once at initialization and handed to [`crate::InputNormalizer::new`]. Events from a
/// source whose capability is off are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Capabilities {
    /// Standard `wheel` events.
    pub wheel: bool,
    /// Legacy `mousewheel` events (`wheelDelta`).
    pub mouse_wheel: bool,
    pub touch: bool,
    /// Mouse drag-to-scroll.
    pub pointer: bool,
    pub keyboard: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::all()
    }
}

impl Capabilities {
    pub const fn all() -> Self {
        Self {
            wheel: true,
            mouse_wheel: true,
            touch: true,
            pointer: true,
            keyboard: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            wheel: false,
            mouse_wheel: false,
            touch: false,
            pointer: false,
            keyboard: false,
        }
    }

    pub fn with_wheel(mut self, wheel: bool) -> Self {
        self.wheel = wheel;
        self
    }

    pub fn with_mouse_wheel(mut self, mouse_wheel: bool) -> Self {
        self.mouse_wheel = mouse_wheel;
        self
    }

    pub fn with_touch(mut self, touch: bool) -> Self {
        self.touch = touch;
        self
    }

    pub fn with_pointer(mut self, pointer: bool) -> Self {
        self.pointer = pointer;
        self
    }

    pub fn with_keyboard(mut self, keyboard: bool) -> Self {
        self.keyboard = keyboard;
        self
    }

    pub fn supports(&self, source: InputSource) -> bool {
        match source {
            InputSource::Wheel => self.wheel,
            InputSource::MouseWheel => self.mouse_wheel,
            InputSource::Touch => self.touch,
            InputSource::Pointer => self.pointer,
            InputSource::Keyboard => self.keyboard,
        }
    }

    /// Supported sources, in registration order.
    pub fn sources(self) -> impl Iterator<Item = InputSource> {
        InputSource::ALL
            .into_iter()
            .filter(move |&source| self.supports(source))
    }
}
