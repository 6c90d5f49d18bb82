//! First-order IIR high-pass/low-pass filter.
//!
//! A single-pole, single-zero filter designed with the bilinear transform:
//!
//! ```text
//! K  = tan(π * fc / fs)
//!
//! High-pass:  b0 =  1/(1+K),  b1 = -1/(1+K)
//! Low-pass:   b0 =  K/(1+K),  b1 =  K/(1+K)
//! Both:       a1 = (K-1)/(K+1)
//!
//! y[n] = b0*x[n] + b1*x[n-1] - a1*y[n-1]
//! ```
//!
//! This gives 6 dB/octave rolloff with an exact -3 dB point at `fc`, matching
//! the analog prototype at the cutoff thanks to frequency pre-warping. Used
//! for the LowCut (high-pass) and HighCut (low-pass) stages of the drive
//! chain, one instance per channel per stage.
//!
//! Coefficient recomputation is cheap (one `tan`, a few divides) and is done
//! once per block so the cutoff tracks its knob continuously.
//!
//! # Reference
//!
//! Julius O. Smith III, "Introduction to Digital Filters with Audio
//! Applications", Section: Bilinear Transformation.

use crate::effect::Effect;
use crate::math::flush_denormal;
use libm::tanf;

use core::f32::consts::PI;

/// Filter response type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Passes frequencies above the cutoff (LowCut stage).
    HighPass,
    /// Passes frequencies below the cutoff (HighCut stage).
    LowPass,
}

/// First-order (6 dB/oct) IIR filter, high-pass or low-pass.
///
/// # Invariants
///
/// - Cutoff is clamped to [1.0, 0.49 * sample_rate] so `tan` stays finite
/// - Output history is flushed to zero below 1e-20 (denormal protection)
///
/// # Example
///
/// ```rust
/// use lemondrive_core::{Effect, FilterMode, FirstOrderFilter};
///
/// let mut hp = FirstOrderFilter::new(FilterMode::HighPass, 48000.0, 250.0);
/// // DC is blocked: a constant input decays toward zero
/// let mut out = 0.0;
/// for _ in 0..48000 {
///     out = hp.process(1.0);
/// }
/// assert!(out.abs() < 1e-3);
/// ```
#[derive(Debug, Clone)]
pub struct FirstOrderFilter {
    mode: FilterMode,
    b0: f32,
    b1: f32,
    a1: f32,
    x1: f32,
    y1: f32,
    sample_rate: f32,
    freq: f32,
}

impl FirstOrderFilter {
    /// Create a new first-order filter.
    ///
    /// # Arguments
    ///
    /// * `mode` - High-pass or low-pass response
    /// * `sample_rate` - Sample rate in Hz
    /// * `freq_hz` - Cutoff frequency in Hz (-3 dB point)
    pub fn new(mode: FilterMode, sample_rate: f32, freq_hz: f32) -> Self {
        let mut filter = Self {
            mode,
            b0: 1.0,
            b1: 0.0,
            a1: 0.0,
            x1: 0.0,
            y1: 0.0,
            sample_rate,
            freq: freq_hz,
        };
        filter.recalculate_coefficients();
        filter
    }

    /// Set the cutoff frequency and recalculate coefficients.
    pub fn set_frequency(&mut self, freq_hz: f32) {
        self.freq = freq_hz;
        self.recalculate_coefficients();
    }

    /// Current cutoff frequency in Hz.
    pub fn frequency(&self) -> f32 {
        self.freq
    }

    /// Current filter mode.
    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    /// Recalculate coefficients via the bilinear transform.
    fn recalculate_coefficients(&mut self) {
        let freq = self.freq.clamp(1.0, self.sample_rate * 0.49);
        let k = tanf(PI * freq / self.sample_rate);
        let norm = 1.0 / (1.0 + k);
        match self.mode {
            FilterMode::HighPass => {
                self.b0 = norm;
                self.b1 = -norm;
            }
            FilterMode::LowPass => {
                self.b0 = k * norm;
                self.b1 = k * norm;
            }
        }
        self.a1 = (k - 1.0) * norm;
    }
}

impl Effect for FirstOrderFilter {
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        let output = self.b0 * input + self.b1 * self.x1 - self.a1 * self.y1;
        self.x1 = input;
        self.y1 = flush_denormal(output);
        self.y1
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.recalculate_coefficients();
    }

    fn reset(&mut self) {
        self.x1 = 0.0;
        self.y1 = 0.0;
    }
}
