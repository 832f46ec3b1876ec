//! Input and frame-loop glue for the `ringview` crate.
//!
//! `ringview` only knows about scroll offsets and bound views. This crate turns raw device input
//! into those offsets and drives the repeater once per animation frame:
//!
//! - [`InputNormalizer`]: wheel, legacy mouse-wheel, touch, mouse-drag and keyboard events to one
//!   canonical [`DeltaEvent`], fanned out to listeners
//! - [`Momentum`]: drag velocity sampling and exponential decay after release
//! - [`Controller`]: owns a `ringview::Repeater` plus the two above and exposes a single
//!   `tick(now_ms, items)` for the host's frame callback
//!
//! Nothing here touches a real UI toolkit. Device availability is passed in as a
//! [`Capabilities`] value and listener registration goes through the [`EventTarget`] trait.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod capabilities;
mod controller;
mod input;
mod momentum;
mod normalizer;
mod options;


pub use capabilities::Capabilities;
pub use controller::Controller;
pub use input::{DeltaEvent, DeltaMode, Handled, InputSource, Key, RawInput};
pub use momentum::Momentum;
pub use normalizer::{DeltaListener, EventTarget, InputNormalizer, ListenerId};
pub use options::{InputOptions, MomentumOptions};
