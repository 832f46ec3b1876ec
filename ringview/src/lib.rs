//! A headless recycling list engine.
//!
//! `ringview` renders very large ordered collections inside a fixed-height viewport by keeping a
//! small, constant-size ring of bound views and rebinding them as the user scrolls, instead of
//! materializing one view per item.
//!
//! For input normalization, momentum scrolling and a frame-paced driver, see the
//! `ringview-adapter` crate.
//!
//! The core pieces:
//! - [`Repeater`]: owns the view ring, eases the scroll offset every tick and shifts the window by
//!   at most one row per tick.
//! - [`Repeater::handle_splices`]: reprojects the live window after the collection mutated.
//! - [`BindingContext`]: the typed per-view context (`item`, `$index`, `$first`, ...).
//! - [`ObservedVec`]: a `Vec` wrapper that records mutations as [`Splice`]s.
//!
//! It is UI-agnostic. A host is expected to provide:
//! - a view factory and a [`BoundView`] implementation,
//! - the viewport extent (and resize notifications),
//! - an animation-frame loop calling [`Repeater::tick`] and applying the returned [`FramePatch`].
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod collection;
mod context;
mod error;
mod float;
mod options;
mod projector;
mod repeater;
mod scroll;
mod types;
mod window;

#[cfg(test)]
mod tests;

pub use collection::ObservedVec;
pub use context::{BindingContext, ContextValue};
pub use error::{RepeatError, SpliceError};
pub use options::RepeatOptions;
pub use repeater::{BoundView, RecycledView, Repeater};
pub use scroll::ScrollState;
pub use types::{FramePatch, NodeMove, Reprojection, ScrollDirection, Splice};
pub use window::WindowState;

// Float math shared with `ringview-adapter`, backed by `std` or `libm`.
#[doc(hidden)]
pub use float::{abs, exp};
