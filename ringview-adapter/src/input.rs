/// A device event family the normalizer can listen to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputSource {
    Wheel,
    MouseWheel,
    Touch,
    Pointer,
    Keyboard,
}

impl InputSource {
    pub const ALL: [InputSource; 5] = [
        InputSource::Wheel,
        InputSource::MouseWheel,
        InputSource::Touch,
        InputSource::Pointer,
        InputSource::Keyboard,
    ];
}

/// Unit of a standard wheel delta.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeltaMode {
    #[default]
    Pixel,
    Line,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Other,
}

/// A device event as the host received it.
///
/// Wheel deltas follow the browser convention (positive `delta_y` scrolls down, positive legacy
/// `wheel_delta_y` scrolls up). A legacy value of `0.0` means "not reported".
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RawInput {
    Wheel {
        delta_x: f64,
        delta_y: f64,
        delta_mode: DeltaMode,
        wheel_delta_x: f64,
        wheel_delta_y: f64,
    },
    MouseWheel {
        wheel_delta: f64,
        wheel_delta_x: f64,
        wheel_delta_y: f64,
    },
    TouchStart {
        x: f64,
        y: f64,
    },
    TouchMove {
        x: f64,
        y: f64,
    },
    TouchEnd,
    PointerDown {
        x: f64,
        y: f64,
    },
    PointerMove {
        x: f64,
        y: f64,
    },
    PointerUp,
    KeyDown(Key),
}

impl RawInput {
    /// A pixel-mode wheel event with no legacy deltas.
    pub fn wheel(delta_x: f64, delta_y: f64) -> Self {
        Self::Wheel {
            delta_x,
            delta_y,
            delta_mode: DeltaMode::Pixel,
            wheel_delta_x: 0.0,
            wheel_delta_y: 0.0,
        }
    }

    pub fn source(&self) -> InputSource {
        match self {
            Self::Wheel { .. } => InputSource::Wheel,
            Self::MouseWheel { .. } => InputSource::MouseWheel,
            Self::TouchStart { .. } | Self::TouchMove { .. } | Self::TouchEnd => InputSource::Touch,
            Self::PointerDown { .. } | Self::PointerMove { .. } | Self::PointerUp => {
                InputSource::Pointer
            }
            Self::KeyDown(_) => InputSource::Keyboard,
        }
    }

    /// Start of a drag gesture (touch or mouse).
    pub fn is_press(&self) -> bool {
        matches!(self, Self::TouchStart { .. } | Self::PointerDown { .. })
    }

    /// End of a drag gesture (touch or mouse).
    pub fn is_release(&self) -> bool {
        matches!(self, Self::TouchEnd | Self::PointerUp)
    }
}

/// A normalized scroll delta.
///
/// Deltas are meant to be added to the scroll target offset: negative values scroll down/right
/// through the content. `x`/`y` are the running sums of every delta emitted so far.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeltaEvent {
    pub delta_x: f64,
    pub delta_y: f64,
    pub x: f64,
    pub y: f64,
    pub source: InputSource,
}

/// Result of feeding one [`RawInput`] to the normalizer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Handled {
    pub event: Option<DeltaEvent>,
    /// The host should suppress the platform's default handling (native scroll, text selection).
    pub prevent_default: bool,
}

impl Handled {
    pub(crate) fn ignored() -> Self {
        Self::default()
    }

    pub(crate) fn swallowed() -> Self {
        Self {
            event: None,
            prevent_default: true,
        }
    }
}
