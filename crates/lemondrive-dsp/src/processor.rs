//! Block processor: the host-facing three-operation core.
//!
//! [`DriveProcessor`] owns the per-channel filter state and a handle to the
//! shared [`DriveParams`] cells. Per block it:
//!
//! 1. snapshots all six knobs (relaxed atomic loads, once per block)
//! 2. recomputes both filters' coefficients from the cutoff knobs
//!    (unconditionally, so the cutoffs track their knobs continuously)
//! 3. runs each channel through high-pass, low-pass, then the waveshaper,
//!    in place
//!
//! The processing path never blocks, locks, allocates, or performs I/O.
//! `prepare` may be called again at any time the host changes sample rate or
//! block size; it fully reinitializes filter state before the next
//! `process` call.

#[cfg(not(feature = "std"))]
use alloc::sync::Arc;
#[cfg(feature = "std")]
use std::sync::Arc;

use lemondrive_core::{Effect, FilterMode, FirstOrderFilter, arctan_clip};

use crate::drive::{PARAMS, ParamIndex};
use crate::shared::{DriveParams, DriveSnapshot};

/// Upper clamp applied to curve inside the audio thread.
///
/// The control layer already caps the knob at 0.9; this is the second line
/// of defense against the divide-by-zero at curve = 1.0.
const CURVE_CEILING: f32 = 0.99;

/// High-pass/low-pass pair for one channel.
#[derive(Debug, Clone)]
struct ChannelFilters {
    low_cut: FirstOrderFilter,
    high_cut: FirstOrderFilter,
}

impl ChannelFilters {
    fn new(sample_rate: f32) -> Self {
        Self {
            low_cut: FirstOrderFilter::new(
                FilterMode::HighPass,
                sample_rate,
                PARAMS[ParamIndex::LowCut as usize].default,
            ),
            high_cut: FirstOrderFilter::new(
                FilterMode::LowPass,
                sample_rate,
                PARAMS[ParamIndex::HighCut as usize].default,
            ),
        }
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        self.low_cut.set_sample_rate(sample_rate);
        self.high_cut.set_sample_rate(sample_rate);
    }

    fn set_cutoffs(&mut self, low_cut_hz: f32, high_cut_hz: f32) {
        self.low_cut.set_frequency(low_cut_hz);
        self.high_cut.set_frequency(high_cut_hz);
    }

    fn reset(&mut self) {
        self.low_cut.reset();
        self.high_cut.reset();
    }

    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        self.high_cut.process(self.low_cut.process(input))
    }
}

/// The LemonDrive block processor.
///
/// Exposes exactly three operations to its host: [`prepare`](Self::prepare),
/// [`process`](Self::process) (or [`process_mono`](Self::process_mono)), and
/// [`reset`](Self::reset).
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use lemondrive_dsp::{DriveParams, DriveProcessor};
///
/// let params = Arc::new(DriveParams::default());
/// let mut processor = DriveProcessor::new(Arc::clone(&params));
/// processor.prepare(48000.0, 512);
///
/// let mut left = vec![0.01f32; 512];
/// let mut right = vec![0.01f32; 512];
/// processor.process(&mut left, &mut right);
/// ```
#[derive(Debug)]
pub struct DriveProcessor {
    params: Arc<DriveParams>,
    left: ChannelFilters,
    right: ChannelFilters,
    sample_rate: f32,
    max_block_size: usize,
}

impl DriveProcessor {
    /// Create a processor bound to the given parameter cells.
    ///
    /// Starts at 48 kHz; hosts call [`prepare`](Self::prepare) with the real
    /// stream configuration before processing.
    pub fn new(params: Arc<DriveParams>) -> Self {
        let sample_rate = 48000.0;
        Self {
            params,
            left: ChannelFilters::new(sample_rate),
            right: ChannelFilters::new(sample_rate),
            sample_rate,
            max_block_size: 512,
        }
    }

    /// Handle to the shared parameter cells.
    pub fn params(&self) -> &Arc<DriveParams> {
        &self.params
    }

    /// Current sample rate in Hz.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Reconfigure for a new sample rate and maximum block size.
    ///
    /// Fully reinitializes filter state; safe to call between any two
    /// `process` calls.
    pub fn prepare(&mut self, sample_rate: f32, max_block_size: usize) {
        self.sample_rate = sample_rate;
        self.max_block_size = max_block_size;
        self.left.set_sample_rate(sample_rate);
        self.right.set_sample_rate(sample_rate);
        self.reset();
    }

    /// Clear filter history without touching parameters.
    pub fn reset(&mut self) {
        self.left.reset();
        self.right.reset();
    }

    /// Process a stereo block in place.
    ///
    /// Zero-length blocks are a no-op. Left and right must be the same
    /// length, at most the prepared maximum block size.
    pub fn process(&mut self, left: &mut [f32], right: &mut [f32]) {
        debug_assert_eq!(left.len(), right.len(), "channel blocks must match");
        debug_assert!(left.len() <= self.max_block_size, "block exceeds prepared size");
        if left.is_empty() {
            return;
        }

        let snap = self.load_snapshot();
        self.left.set_cutoffs(snap.low_cut_hz, snap.high_cut_hz);
        self.right.set_cutoffs(snap.low_cut_hz, snap.high_cut_hz);

        for sample in left.iter_mut() {
            *sample = shape(self.left.process(*sample), &snap);
        }
        for sample in right.iter_mut() {
            *sample = shape(self.right.process(*sample), &snap);
        }
    }

    /// Process a mono block in place through the left channel pair.
    pub fn process_mono(&mut self, buffer: &mut [f32]) {
        debug_assert!(buffer.len() <= self.max_block_size, "block exceeds prepared size");
        if buffer.is_empty() {
            return;
        }

        let snap = self.load_snapshot();
        self.left.set_cutoffs(snap.low_cut_hz, snap.high_cut_hz);

        for sample in buffer.iter_mut() {
            *sample = shape(self.left.process(*sample), &snap);
        }
    }

    fn load_snapshot(&self) -> DriveSnapshot {
        let mut snap = self.params.snapshot();
        snap.curve = snap.curve.min(CURVE_CEILING);
        snap
    }
}

/// The per-sample gain-then-waveshape-then-volume transform.
#[inline]
fn shape(x: f32, snap: &DriveSnapshot) -> f32 {
    arctan_clip(x * snap.drive * snap.range, snap.curve) * snap.volume
}
