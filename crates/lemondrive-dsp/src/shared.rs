//! Lock-free parameter cells shared between control and audio threads.
//!
//! Each knob is a single atomically-loadable `f32` cell. Writers (UI,
//! automation, CLI flags) call the setters at any time; the audio thread
//! takes a [`DriveSnapshot`] once per block with relaxed loads. A race
//! between a write and a snapshot is benign: the block sees either the old
//! or the new value, never a torn one. No cross-knob ordering is guaranteed
//! or needed; visibility is eventually consistent.
//!
//! Setters clamp to the descriptor ranges in [`PARAMS`], so an out-of-range
//! write can never reach the DSP. That clamp is what keeps `curve` strictly
//! below 1.0.

use atomic_float::AtomicF32;
use core::sync::atomic::Ordering;

use crate::drive::{PARAMS, ParamIndex};

/// Shared knob state for the drive chain.
///
/// Typically held as `Arc<DriveParams>` with one clone on the control side
/// and one inside the [`DriveProcessor`](crate::DriveProcessor).
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use lemondrive_dsp::DriveParams;
///
/// let params = Arc::new(DriveParams::default());
/// let ui_handle = Arc::clone(&params);
///
/// ui_handle.set_drive(0.6);
/// let snap = params.snapshot();
/// assert_eq!(snap.drive, 0.6);
/// ```
#[derive(Debug)]
pub struct DriveParams {
    drive: AtomicF32,
    range: AtomicF32,
    volume: AtomicF32,
    low_cut_hz: AtomicF32,
    high_cut_hz: AtomicF32,
    curve: AtomicF32,
}

impl Default for DriveParams {
    fn default() -> Self {
        Self {
            drive: AtomicF32::new(PARAMS[ParamIndex::Drive as usize].default),
            range: AtomicF32::new(PARAMS[ParamIndex::Range as usize].default),
            volume: AtomicF32::new(PARAMS[ParamIndex::Volume as usize].default),
            low_cut_hz: AtomicF32::new(PARAMS[ParamIndex::LowCut as usize].default),
            high_cut_hz: AtomicF32::new(PARAMS[ParamIndex::HighCut as usize].default),
            curve: AtomicF32::new(PARAMS[ParamIndex::Curve as usize].default),
        }
    }
}

impl DriveParams {
    /// Create cells with all knobs at their descriptor defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Drive knob (clamped to [0.0, 1.0]).
    pub fn set_drive(&self, drive: f32) {
        let v = PARAMS[ParamIndex::Drive as usize].clamp(drive);
        self.drive.store(v, Ordering::Relaxed);
    }

    /// Set the Range knob (clamped to [1.0, 150.0]).
    pub fn set_range(&self, range: f32) {
        let v = PARAMS[ParamIndex::Range as usize].clamp(range);
        self.range.store(v, Ordering::Relaxed);
    }

    /// Set the Volume knob (clamped to [0.0, 1.0]).
    pub fn set_volume(&self, volume: f32) {
        let v = PARAMS[ParamIndex::Volume as usize].clamp(volume);
        self.volume.store(v, Ordering::Relaxed);
    }

    /// Set the LowCut cutoff in Hz (clamped to [20, 600]).
    pub fn set_low_cut_hz(&self, freq_hz: f32) {
        let v = PARAMS[ParamIndex::LowCut as usize].clamp(freq_hz);
        self.low_cut_hz.store(v, Ordering::Relaxed);
    }

    /// Set the HighCut cutoff in Hz (clamped to [2000, 20000]).
    pub fn set_high_cut_hz(&self, freq_hz: f32) {
        let v = PARAMS[ParamIndex::HighCut as usize].clamp(freq_hz);
        self.high_cut_hz.store(v, Ordering::Relaxed);
    }

    /// Set the Curve knob (clamped to [0.0, 0.9]).
    pub fn set_curve(&self, curve: f32) {
        let v = PARAMS[ParamIndex::Curve as usize].clamp(curve);
        self.curve.store(v, Ordering::Relaxed);
    }

    /// Set a knob by [`ParamIndex`] position, clamped to its range.
    pub fn set_by_index(&self, index: usize, value: f32) {
        match index {
            0 => self.set_drive(value),
            1 => self.set_range(value),
            2 => self.set_volume(value),
            3 => self.set_low_cut_hz(value),
            4 => self.set_high_cut_hz(value),
            5 => self.set_curve(value),
            _ => {}
        }
    }

    /// Take a consistent-enough snapshot of all six knobs.
    ///
    /// Relaxed loads; per-cell atomicity is the only guarantee, per the
    /// concurrency model.
    pub fn snapshot(&self) -> DriveSnapshot {
        DriveSnapshot {
            drive: self.drive.load(Ordering::Relaxed),
            range: self.range.load(Ordering::Relaxed),
            volume: self.volume.load(Ordering::Relaxed),
            low_cut_hz: self.low_cut_hz.load(Ordering::Relaxed),
            high_cut_hz: self.high_cut_hz.load(Ordering::Relaxed),
            curve: self.curve.load(Ordering::Relaxed),
        }
    }
}

/// Plain-value view of the six knobs, taken once per processing block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriveSnapshot {
    /// Input gain, fine control.
    pub drive: f32,
    /// Input gain, coarse multiplier.
    pub range: f32,
    /// Output attenuation.
    pub volume: f32,
    /// High-pass cutoff in Hz.
    pub low_cut_hz: f32,
    /// Low-pass cutoff in Hz.
    pub high_cut_hz: f32,
    /// Waveshaper knee sharpness, strictly below 1.0.
    pub curve: f32,
}
