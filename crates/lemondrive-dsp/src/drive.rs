//! The LemonDrive effect: filtered arctangent saturation.
//!
//! Signal path per sample:
//!
//! ```text
//! input -> high-pass (LowCut) -> low-pass (HighCut)
//!       -> x * drive * range
//!       -> (2/π) * atan( π/(1-curve) * x )
//!       -> x * volume -> output
//! ```
//!
//! The two pre-gain knobs multiply: Drive is the fine control in [0, 1],
//! Range scales it up to 150x. Curve sets the knee of the arctangent clipper
//! and is capped at 0.9 at this layer: the transform has infinite slope at
//! curve = 1.0 and must never be evaluated there.

use lemondrive_core::{
    Effect, FilterMode, FirstOrderFilter, ParamDescriptor, ParameterInfo, arctan_clip,
};

/// Parameter indices for [`LemonDrive`], in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamIndex {
    /// Input gain, fine control.
    Drive = 0,
    /// Input gain, coarse multiplier.
    Range = 1,
    /// Output attenuation.
    Volume = 2,
    /// High-pass cutoff in Hz.
    LowCut = 3,
    /// Low-pass cutoff in Hz.
    HighCut = 4,
    /// Waveshaper knee sharpness.
    Curve = 5,
}

/// Parameter descriptors for the six knobs, indexed by [`ParamIndex`].
///
/// The Curve maximum of 0.9 is a hard correctness bound, not a taste choice:
/// the waveshaper divides by `1 - curve`.
pub const PARAMS: [ParamDescriptor; 6] = [
    ParamDescriptor::scalar("Drive", "Drive", 0.0, 1.0, 0.2).with_string_id("drv_drive"),
    ParamDescriptor::scalar("Range", "Range", 1.0, 150.0, 40.0)
        .with_string_id("drv_range")
        .with_step(1.0),
    ParamDescriptor::scalar("Volume", "Volume", 0.0, 1.0, 0.999).with_string_id("drv_volume"),
    ParamDescriptor::freq_hz("LowCut", "LowCut", 20.0, 600.0, 250.0).with_string_id("drv_lowcut"),
    ParamDescriptor::freq_hz("HighCut", "HighCut", 2000.0, 20000.0, 18000.0)
        .with_string_id("drv_highcut"),
    ParamDescriptor::scalar("Curve", "Curve", 0.0, 0.9, 0.5).with_string_id("drv_curve"),
];

/// Single-channel LemonDrive: filter pair plus arctangent waveshaper.
///
/// One instance per audio channel, each carrying its own filter history.
/// Parameters here are plain fields; the lock-free control-thread path lives
/// in [`DriveParams`](crate::DriveParams) / [`DriveProcessor`](crate::DriveProcessor).
///
/// # Example
///
/// ```rust
/// use lemondrive_core::Effect;
/// use lemondrive_dsp::LemonDrive;
///
/// let mut drive = LemonDrive::new(48000.0);
/// drive.set_drive(0.2);
/// drive.set_range(40.0);
///
/// let out = drive.process(0.01);
/// assert!(out.is_finite());
/// ```
#[derive(Debug, Clone)]
pub struct LemonDrive {
    drive: f32,
    range: f32,
    volume: f32,
    curve: f32,
    low_cut: FirstOrderFilter,
    high_cut: FirstOrderFilter,
}

impl LemonDrive {
    /// Create a new drive channel with all knobs at their defaults.
    pub fn new(sample_rate: f32) -> Self {
        Self {
            drive: PARAMS[ParamIndex::Drive as usize].default,
            range: PARAMS[ParamIndex::Range as usize].default,
            volume: PARAMS[ParamIndex::Volume as usize].default,
            curve: PARAMS[ParamIndex::Curve as usize].default,
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

    /// Set the Drive knob (input gain fine control, 0.0 to 1.0).
    pub fn set_drive(&mut self, drive: f32) {
        self.drive = PARAMS[ParamIndex::Drive as usize].clamp(drive);
    }

    /// Set the Range knob (input gain coarse multiplier, 1.0 to 150.0).
    pub fn set_range(&mut self, range: f32) {
        self.range = PARAMS[ParamIndex::Range as usize].clamp(range);
    }

    /// Set the Volume knob (output attenuation, 0.0 to 1.0).
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = PARAMS[ParamIndex::Volume as usize].clamp(volume);
    }

    /// Set the LowCut high-pass cutoff in Hz (20 to 600).
    pub fn set_low_cut_hz(&mut self, freq_hz: f32) {
        self.low_cut
            .set_frequency(PARAMS[ParamIndex::LowCut as usize].clamp(freq_hz));
    }

    /// Set the HighCut low-pass cutoff in Hz (2000 to 20000).
    pub fn set_high_cut_hz(&mut self, freq_hz: f32) {
        self.high_cut
            .set_frequency(PARAMS[ParamIndex::HighCut as usize].clamp(freq_hz));
    }

    /// Set the Curve knob (waveshaper knee, 0.0 to 0.9).
    pub fn set_curve(&mut self, curve: f32) {
        self.curve = PARAMS[ParamIndex::Curve as usize].clamp(curve);
    }

    /// Current Drive value.
    pub fn drive(&self) -> f32 {
        self.drive
    }

    /// Current Range value.
    pub fn range(&self) -> f32 {
        self.range
    }

    /// Current Volume value.
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Current LowCut cutoff in Hz.
    pub fn low_cut_hz(&self) -> f32 {
        self.low_cut.frequency()
    }

    /// Current HighCut cutoff in Hz.
    pub fn high_cut_hz(&self) -> f32 {
        self.high_cut.frequency()
    }

    /// Current Curve value.
    pub fn curve(&self) -> f32 {
        self.curve
    }

    /// The waveshaping stage alone, without the filters.
    ///
    /// Exposed so block processors can run the filters separately.
    #[inline]
    pub fn shape(&self, x: f32) -> f32 {
        arctan_clip(x * self.drive * self.range, self.curve) * self.volume
    }
}

impl Effect for LemonDrive {
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        let filtered = self.high_cut.process(self.low_cut.process(input));
        self.shape(filtered)
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        self.low_cut.set_sample_rate(sample_rate);
        self.high_cut.set_sample_rate(sample_rate);
    }

    fn reset(&mut self) {
        self.low_cut.reset();
        self.high_cut.reset();
    }
}

impl ParameterInfo for LemonDrive {
    fn param_count(&self) -> usize {
        PARAMS.len()
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        PARAMS.get(index).copied()
    }

    fn get_param(&self, index: usize) -> f32 {
        match index {
            0 => self.drive,
            1 => self.range,
            2 => self.volume,
            3 => self.low_cut.frequency(),
            4 => self.high_cut.frequency(),
            5 => self.curve,
            _ => 0.0,
        }
    }

    fn set_param(&mut self, index: usize, value: f32) {
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
}
