/// Tuning for [`crate::InputNormalizer`].
///
/// With `feature = "serde"` missing fields fall back to [`Default`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InputOptions {
    /// Pixels scrolled by one arrow key press.
    pub key_step: f64,
    /// Pixels per line for wheel events reported in [`crate::DeltaMode::Line`].
    pub line_multiplier: f64,
    /// Applied to every standard wheel delta.
    pub wheel_multiplier: f64,
    /// Applied to touch and mouse-drag deltas.
    pub touch_multiplier: f64,
    /// Mouse-drag moves up to this many pixels are treated as jitter and swallowed.
    pub drag_threshold: f64,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            key_step: 120.0,
            line_multiplier: 15.0,
            wheel_multiplier: 1.0,
            touch_multiplier: 1.0,
            drag_threshold: 2.0,
        }
    }
}

impl InputOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key_step(mut self, key_step: f64) -> Self {
        self.key_step = key_step;
        self
    }

    pub fn with_line_multiplier(mut self, line_multiplier: f64) -> Self {
        self.line_multiplier = line_multiplier;
        self
    }

    pub fn with_wheel_multiplier(mut self, wheel_multiplier: f64) -> Self {
        self.wheel_multiplier = wheel_multiplier;
        self
    }

    pub fn with_touch_multiplier(mut self, touch_multiplier: f64) -> Self {
        self.touch_multiplier = touch_multiplier;
        self
    }

    pub fn with_drag_threshold(mut self, drag_threshold: f64) -> Self {
        self.drag_threshold = drag_threshold;
        self
    }
}

/// Tuning for [`crate::Momentum`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MomentumOptions {
    /// How often the velocity sampler runs while pressed.
    pub sample_interval_ms: u64,
    /// Weight of the newest velocity sample (`0..=1`).
    pub smoothing: f64,
    /// Releases slower than this (px/s) do not start a decay.
    pub min_velocity: f64,
    /// Initial decay amplitude as a fraction of the release velocity.
    pub amplitude_factor: f64,
    /// Decay time constant.
    pub time_constant_ms: f64,
    /// The decay stops once a delta is no larger than this.
    pub stop_epsilon: f64,
}

impl Default for MomentumOptions {
    fn default() -> Self {
        Self {
            sample_interval_ms: 100,
            smoothing: 0.8,
            min_velocity: 10.0,
            amplitude_factor: 0.1,
            time_constant_ms: 325.0,
            stop_epsilon: 0.5,
        }
    }
}

impl MomentumOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sample_interval_ms(mut self, sample_interval_ms: u64) -> Self {
        self.sample_interval_ms = sample_interval_ms;
        self
    }

    pub fn with_smoothing(mut self, smoothing: f64) -> Self {
        self.smoothing = smoothing;
        self
    }

    pub fn with_min_velocity(mut self, min_velocity: f64) -> Self {
        self.min_velocity = min_velocity;
        self
    }

    pub fn with_amplitude_factor(mut self, amplitude_factor: f64) -> Self {
        self.amplitude_factor = amplitude_factor;
        self
    }

    pub fn with_time_constant_ms(mut self, time_constant_ms: f64) -> Self {
        self.time_constant_ms = time_constant_ms;
        self
    }

    pub fn with_stop_epsilon(mut self, stop_epsilon: f64) -> Self {
        self.stop_epsilon = stop_epsilon;
        self
    }
}
