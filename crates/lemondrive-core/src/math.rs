//! Mathematical utility functions for the drive chain.
//!
//! Allocation-free, `no_std`-compatible DSP math.
//!
//! # Level Conversions
//!
//! - [`db_to_linear`] / [`linear_to_db`] - Convert between dB and linear gain
//!
//! # Waveshaping
//!
//! - [`arctan_clip`] - Arctangent soft clipper with adjustable knee
//!
//! # Utilities
//!
//! - [`flush_denormal`] - Subnormal float suppression for filter state

use libm::{atanf, expf, logf};

use core::f32::consts::PI;

/// Convert decibels to linear gain.
///
/// # Example
/// ```rust
/// use lemondrive_core::db_to_linear;
///
/// assert!((db_to_linear(0.0) - 1.0).abs() < 0.001);
/// assert!((db_to_linear(-6.02) - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn db_to_linear(db: f32) -> f32 {
    // 10^(dB/20) = e^(dB * ln(10)/20)
    const FACTOR: f32 = core::f32::consts::LN_10 / 20.0;
    expf(db * FACTOR)
}

/// Convert linear gain to decibels.
///
/// Input is floored at 1e-10 so silence maps to a finite dB value.
///
/// # Example
/// ```rust
/// use lemondrive_core::linear_to_db;
///
/// assert!((linear_to_db(1.0) - 0.0).abs() < 0.001);
/// assert!((linear_to_db(0.5) - (-6.02)).abs() < 0.01);
/// ```
#[inline]
pub fn linear_to_db(linear: f32) -> f32 {
    // 20 * log10(linear) = 20 * ln(linear) / ln(10)
    const FACTOR: f32 = 20.0 / core::f32::consts::LN_10;
    logf(linear.max(1e-10)) * FACTOR
}

/// Arctangent soft clipper with adjustable knee sharpness.
///
/// ```text
/// y = (2/π) * atan( (π / (1 - curve)) * x )
/// ```
///
/// Output approaches ±1 asymptotically as |x| grows. `curve` controls the
/// softness of the knee: 0.0 is the gentlest setting, values toward 1.0 make
/// the clipper arbitrarily aggressive. The transform has infinite slope at
/// `curve = 1.0`, so `curve` is clamped to 0.99 here; callers enforce a
/// tighter bound at the control layer.
///
/// The origin is a fixed point: `arctan_clip(0.0, curve) == 0.0` for every
/// curve setting.
///
/// # Arguments
/// * `x` - Input sample (any range)
/// * `curve` - Knee sharpness in [0.0, 0.99]
///
/// # Returns
/// Soft-clipped output in (-1, 1)
#[inline]
pub fn arctan_clip(x: f32, curve: f32) -> f32 {
    let curve = curve.clamp(0.0, 0.99);
    (2.0 / PI) * atanf(PI / (1.0 - curve) * x)
}

/// Flush subnormal (denormalized) floats to zero.
///
/// Subnormal floats (~1e-38 to 1e-45) cause severe CPU performance
/// degradation on most architectures (up to 100x slowdown). This function
/// replaces values below 1e-20 with zero, providing margin before the
/// IEEE 754 subnormal range begins.
///
/// Use this on IIR filter state, where the signal can decay indefinitely
/// toward zero after the input goes silent.
///
/// Reference: IEEE 754-2008, Section 3.4 (Subnormal numbers)
#[allow(clippy::inline_always)]
#[inline(always)]
pub fn flush_denormal(x: f32) -> f32 {
    if x.abs() < 1e-20 { 0.0 } else { x }
}
