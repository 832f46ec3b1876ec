//! Float helpers that work with and without `std`.
//!
//! `core` has no `floor`/`ceil`/`round`/`exp`; without `std` these go through `libm`.

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("ringview requires either the `std` or the `libm` feature");

#[cfg(feature = "std")]
#[inline]
pub fn floor(v: f64) -> f64 {
    v.floor()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline]
pub fn floor(v: f64) -> f64 {
    libm::floor(v)
}

#[cfg(feature = "std")]
#[inline]
pub fn ceil(v: f64) -> f64 {
    v.ceil()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline]
pub fn ceil(v: f64) -> f64 {
    libm::ceil(v)
}

#[cfg(feature = "std")]
#[inline]
pub fn round(v: f64) -> f64 {
    v.round()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline]
pub fn round(v: f64) -> f64 {
    libm::round(v)
}

#[cfg(feature = "std")]
#[inline]
pub fn exp(v: f64) -> f64 {
    v.exp()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline]
pub fn exp(v: f64) -> f64 {
    libm::exp(v)
}

/// Converts a non-negative, finite row count to `usize`, saturating at the bounds.
#[inline]
pub fn to_index(v: f64) -> usize {
    if !v.is_finite() || v <= 0.0 {
        return 0;
    }
    v as usize
}

#[cfg(feature = "std")]
#[inline]
pub fn abs(v: f64) -> f64 {
    v.abs()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
#[inline]
pub fn abs(v: f64) -> f64 {
    libm::fabs(v)
}
