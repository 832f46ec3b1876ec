use ringview::{abs, exp};

use crate::MomentumOptions;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct Decay {
    amplitude: f64,
    start_ms: u64,
}

/// Kinetic scrolling after a drag.
///
/// While pressed, [`Momentum::tick`] samples the scroll offset every
/// [`MomentumOptions::sample_interval_ms`] and keeps an exponentially smoothed velocity (px/s).
/// On release a fast enough drag starts a decay: each later tick yields
/// `amplitude * exp(-elapsed / time_constant_ms)`, a delta to add to the scroll target, until it
/// drops to [`MomentumOptions::stop_epsilon`].
///
/// Time is supplied by the caller (`now_ms`); there are no timers.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Momentum {
    options: MomentumOptions,
    pressed: bool,
    velocity: f64,
    frame: f64,
    timestamp_ms: u64,
    next_sample_ms: u64,
    decay: Option<Decay>,
}

impl Default for Momentum {
    fn default() -> Self {
        Self::new(MomentumOptions::default())
    }
}

impl Momentum {
    pub fn new(options: MomentumOptions) -> Self {
        Self {
            options,
            pressed: false,
            velocity: 0.0,
            frame: 0.0,
            timestamp_ms: 0,
            next_sample_ms: 0,
            decay: None,
        }
    }

    pub fn options(&self) -> &MomentumOptions {
        &self.options
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn is_decaying(&self) -> bool {
        self.decay.is_some()
    }

    /// Smoothed drag velocity in px/s.
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Amplitude of the running decay, `0.0` when idle.
    pub fn amplitude(&self) -> f64 {
        self.decay.map_or(0.0, |decay| decay.amplitude)
    }

    /// Starts tracking a drag at `offset`, cancelling any running decay.
    pub fn press(&mut self, now_ms: u64, offset: f64) {
        self.decay = None;
        self.pressed = true;
        self.velocity = 0.0;
        self.frame = offset;
        self.timestamp_ms = now_ms;
        self.next_sample_ms = now_ms.saturating_add(self.options.sample_interval_ms);
    }

    /// Folds the offset travelled since the last sample into the velocity estimate.
    pub fn sample(&mut self, now_ms: u64, offset: f64) {
        let elapsed = now_ms.saturating_sub(self.timestamp_ms);
        self.timestamp_ms = now_ms;
        let delta = offset - self.frame;
        self.frame = offset;

        let v = 1000.0 * delta / (1.0 + elapsed as f64);
        let alpha = self.options.smoothing;
        self.velocity = alpha * v + (1.0 - alpha) * self.velocity;
        rtrace!(elapsed, delta, velocity = self.velocity, "momentum sample");
    }

    /// Ends the drag. Returns `true` when a decay started.
    pub fn release(&mut self, now_ms: u64) -> bool {
        if !self.pressed {
            return false;
        }
        self.pressed = false;
        self.start_decay(now_ms)
    }

    /// Starts a decay from an explicit `velocity` (px/s), as if a drag had just been released.
    pub fn fling(&mut self, velocity: f64, now_ms: u64) -> bool {
        self.pressed = false;
        self.velocity = if velocity.is_finite() { velocity } else { 0.0 };
        self.start_decay(now_ms)
    }

    fn start_decay(&mut self, now_ms: u64) -> bool {
        if abs(self.velocity) <= self.options.min_velocity {
            self.decay = None;
            return false;
        }
        let amplitude = self.options.amplitude_factor * self.velocity;
        rdebug!(velocity = self.velocity, amplitude, "momentum decay");
        self.decay = Some(Decay {
            amplitude,
            start_ms: now_ms,
        });
        true
    }

    /// Stops both the sampler and the decay.
    pub fn cancel(&mut self) {
        self.pressed = false;
        self.decay = None;
    }

    /// Advances one frame.
    ///
    /// While pressed, samples `offset` when the sample interval elapsed and returns `None`. While
    /// decaying, returns the next delta, or `None` once the decay has died out (which also ends
    /// it).
    pub fn tick(&mut self, now_ms: u64, offset: f64) -> Option<f64> {
        if self.pressed {
            if now_ms >= self.next_sample_ms {
                self.sample(now_ms, offset);
                self.next_sample_ms = now_ms.saturating_add(self.options.sample_interval_ms.max(1));
            }
            return None;
        }

        let decay = self.decay?;
        let elapsed = now_ms.saturating_sub(decay.start_ms) as f64;
        let delta = decay.amplitude * exp(-elapsed / self.options.time_constant_ms);
        if abs(delta) > self.options.stop_epsilon {
            Some(delta)
        } else {
            rdebug!(elapsed, "momentum settled");
            self.decay = None;
            None
        }
    }
}
