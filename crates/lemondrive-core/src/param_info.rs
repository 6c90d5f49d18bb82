//! Parameter introspection for discoverable effect parameters.
//!
//! The [`ParameterInfo`] trait and supporting types enable runtime discovery
//! and manipulation of effect parameters:
//!
//! - **Preset systems**: Save and restore parameter state by stable string ID
//! - **CLI / hardware controllers**: Map flags or encoder knobs to parameters
//! - **Host automation**: Generic parameter surfaces in plugin hosts
//!
//! # Design
//!
//! Index-based parameter access for efficiency and simplicity. Each parameter
//! is described by a [`ParamDescriptor`] containing metadata for display,
//! validation, and persistence. Implementations clamp incoming values to the
//! descriptor range, so an out-of-range write can never reach the DSP. This is
//! the control layer that keeps the waveshaper's `curve` strictly below 1.0.
//!
//! # no_std Support
//!
//! Fully `no_std` compatible with no heap allocations required.

/// Scaling curve for parameter normalization.
///
/// Determines how a parameter's plain value maps to normalized \[0.0, 1.0\]
/// space. Linear is the default; Logarithmic suits frequency parameters
/// (20 Hz–20 kHz) and requires `min > 0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ParamScale {
    /// Linear mapping (default). Equal resolution across the range.
    #[default]
    Linear,
    /// Logarithmic mapping. More resolution at low values.
    Logarithmic,
}

/// Trait for effects that expose introspectable parameters.
///
/// Parameters are accessed by zero-based index, stable for the lifetime of
/// the effect instance. Use [`param_count`](Self::param_count) to determine
/// valid indices.
///
/// # Thread Safety
///
/// This trait does not require thread safety. Cross-thread parameter access
/// goes through dedicated atomic cells, not through this trait.
pub trait ParameterInfo {
    /// Returns the number of parameters this effect exposes.
    ///
    /// Valid parameter indices are `0..param_count()`.
    fn param_count(&self) -> usize;

    /// Returns the descriptor for the parameter at the given index.
    ///
    /// Returns `None` if `index >= param_count()`.
    fn param_info(&self, index: usize) -> Option<ParamDescriptor>;

    /// Gets the current value of the parameter at the given index.
    ///
    /// Returns `0.0` for out-of-bounds indices.
    fn get_param(&self, index: usize) -> f32;

    /// Sets the value of the parameter at the given index.
    ///
    /// Implementations clamp the value to the range in the parameter
    /// descriptor. Out-of-bounds indices are ignored.
    fn set_param(&mut self, index: usize, value: f32);

    /// Find a parameter index by name (case-insensitive).
    ///
    /// Matches against both [`ParamDescriptor::name`] and
    /// [`ParamDescriptor::short_name`].
    fn find_param_by_name(&self, name: &str) -> Option<usize> {
        (0..self.param_count()).find(|&i| {
            self.param_info(i).is_some_and(|desc| {
                desc.name.eq_ignore_ascii_case(name) || desc.short_name.eq_ignore_ascii_case(name)
            })
        })
    }

    /// Find a parameter index by its stable string ID.
    ///
    /// Scans all parameters (O(n)); suitable for preset loading, not audio.
    fn param_index_by_string_id(&self, string_id: &str) -> Option<usize> {
        (0..self.param_count())
            .find(|&i| self.param_info(i).is_some_and(|d| d.string_id == string_id))
    }
}

/// Describes a single parameter's metadata for display and validation.
///
/// # Short Name
///
/// The `short_name` field should be 8 characters or less for compatibility
/// with hardware displays.
///
/// # Example
///
/// ```rust
/// use lemondrive_core::{ParamDescriptor, ParamScale, ParamUnit};
///
/// let low_cut = ParamDescriptor::freq_hz("LowCut", "LowCut", 20.0, 600.0, 250.0)
///     .with_string_id("drive_lowcut");
/// assert_eq!(low_cut.scale, ParamScale::Logarithmic);
/// assert_eq!(low_cut.clamp(1000.0), 600.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Full parameter name for display (e.g., "LowCut").
    pub name: &'static str,

    /// Short name for hardware displays, max 8 characters.
    pub short_name: &'static str,

    /// Unit type for formatting the parameter value.
    pub unit: ParamUnit,

    /// Minimum allowed value for this parameter.
    pub min: f32,

    /// Maximum allowed value for this parameter.
    pub max: f32,

    /// Default value when the effect is initialized or reset.
    pub default: f32,

    /// Recommended step increment for encoder-based control.
    pub step: f32,

    /// Human-readable stable ID for presets and serialization.
    ///
    /// Convention: `"effect_param"` (e.g., `"drive_curve"`). Once assigned
    /// it must never change, since presets reference it.
    pub string_id: &'static str,

    /// Normalization curve for mapping between plain and normalized values.
    pub scale: ParamScale,
}

impl ParamDescriptor {
    /// Dimensionless knob in a custom range.
    pub const fn scalar(
        name: &'static str,
        short_name: &'static str,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::None,
            min,
            max,
            default,
            step: 0.01,
            string_id: "",
            scale: ParamScale::Linear,
        }
    }

    /// Frequency parameter in Hz with logarithmic scaling.
    pub const fn freq_hz(
        name: &'static str,
        short_name: &'static str,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            name,
            short_name,
            unit: ParamUnit::Hertz,
            min,
            max,
            default,
            step: 1.0,
            string_id: "",
            scale: ParamScale::Logarithmic,
        }
    }

    /// Sets the stable string ID.
    ///
    /// Builder pattern; call after a factory method or struct literal.
    pub const fn with_string_id(mut self, string_id: &'static str) -> Self {
        self.string_id = string_id;
        self
    }

    /// Sets the normalization scale.
    pub const fn with_scale(mut self, scale: ParamScale) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the step increment.
    pub const fn with_step(mut self, step: f32) -> Self {
        self.step = step;
        self
    }

    /// Clamps a value to this parameter's valid range.
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Converts a plain value to normalized range (0.0 to 1.0).
    ///
    /// - **Linear**: `(value - min) / (max - min)`
    /// - **Logarithmic**: `ln(value/min) / ln(max/min)` (requires `min > 0`)
    #[inline]
    pub fn normalize(&self, value: f32) -> f32 {
        let range = self.max - self.min;
        if range == 0.0 {
            return 0.0;
        }
        match self.scale {
            ParamScale::Linear => (value - self.min) / range,
            ParamScale::Logarithmic => {
                if self.min <= 0.0 || value <= 0.0 {
                    return 0.0;
                }
                libm::logf(value / self.min) / libm::logf(self.max / self.min)
            }
        }
    }

    /// Converts a normalized value (0.0 to 1.0) to the actual parameter range.
    ///
    /// Inverse of [`normalize`](Self::normalize).
    #[inline]
    pub fn denormalize(&self, normalized: f32) -> f32 {
        match self.scale {
            ParamScale::Linear => self.min + normalized * (self.max - self.min),
            ParamScale::Logarithmic => {
                if self.min <= 0.0 {
                    return self.min;
                }
                self.min * libm::powf(self.max / self.min, normalized)
            }
        }
    }

    /// Format a value with the parameter's unit suffix.
    #[cfg(feature = "std")]
    pub fn format_value(&self, value: f32) -> String {
        match self.unit {
            ParamUnit::Hertz => format!("{value:.0}{}", self.unit.suffix()),
            ParamUnit::Decibels => format!("{value:.1}{}", self.unit.suffix()),
            ParamUnit::Percent => format!("{value:.0}{}", self.unit.suffix()),
            ParamUnit::None => format!("{value:.3}"),
        }
    }
}

/// Unit type for parameter display and formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamUnit {
    /// Decibels (dB) - for gain and level parameters.
    Decibels,

    /// Hertz (Hz) - for frequency parameters like filter cutoff.
    Hertz,

    /// Percentage (%) - for mix and normalized parameters.
    Percent,

    /// No unit - for dimensionless parameters.
    None,
}

impl ParamUnit {
    /// Returns the unit suffix string for display.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lemondrive_core::ParamUnit;
    ///
    /// assert_eq!(ParamUnit::Hertz.suffix(), " Hz");
    /// assert_eq!(ParamUnit::None.suffix(), "");
    /// ```
    pub const fn suffix(&self) -> &'static str {
        match self {
            ParamUnit::Decibels => " dB",
            ParamUnit::Hertz => " Hz",
            ParamUnit::Percent => "%",
            ParamUnit::None => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestEffect {
        gain: f32,
        cutoff: f32,
    }

    impl TestEffect {
        fn new() -> Self {
            Self {
                gain: 0.5,
                cutoff: 250.0,
            }
        }
    }

    impl ParameterInfo for TestEffect {
        fn param_count(&self) -> usize {
            2
        }

        fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
            match index {
                0 => Some(
                    ParamDescriptor::scalar("Gain", "Gain", 0.0, 1.0, 0.5)
                        .with_string_id("test_gain"),
                ),
                1 => Some(
                    ParamDescriptor::freq_hz("Cutoff", "Cutoff", 20.0, 600.0, 250.0)
                        .with_string_id("test_cutoff"),
                ),
                _ => None,
            }
        }

        fn get_param(&self, index: usize) -> f32 {
            match index {
                0 => self.gain,
                1 => self.cutoff,
                _ => 0.0,
            }
        }

        fn set_param(&mut self, index: usize, value: f32) {
            let Some(desc) = self.param_info(index) else {
                return;
            };
            match index {
                0 => self.gain = desc.clamp(value),
                1 => self.cutoff = desc.clamp(value),
                _ => {}
            }
        }
    }

    #[test]
    fn test_param_count_and_info() {
        let effect = TestEffect::new();
        assert_eq!(effect.param_count(), 2);

        let info = effect.param_info(1).expect("should have cutoff param");
        assert_eq!(info.name, "Cutoff");
        assert_eq!(info.unit, ParamUnit::Hertz);
        assert_eq!(info.min, 20.0);
        assert_eq!(info.max, 600.0);

        assert!(effect.param_info(2).is_none());
    }

    #[test]
    fn test_set_param_clamps() {
        let mut effect = TestEffect::new();
        effect.set_param(0, 2.0);
        assert_eq!(effect.get_param(0), 1.0);
        effect.set_param(0, -1.0);
        assert_eq!(effect.get_param(0), 0.0);
    }

    #[test]
    fn test_out_of_bounds_index() {
        let mut effect = TestEffect::new();
        assert_eq!(effect.get_param(99), 0.0);
        effect.set_param(99, 42.0);
        assert_eq!(effect.get_param(0), 0.5);
    }

    #[test]
    fn test_find_by_name_and_string_id() {
        let effect = TestEffect::new();
        assert_eq!(effect.find_param_by_name("gain"), Some(0));
        assert_eq!(effect.find_param_by_name("CUTOFF"), Some(1));
        assert_eq!(effect.find_param_by_name("missing"), None);

        assert_eq!(effect.param_index_by_string_id("test_cutoff"), Some(1));
        assert_eq!(effect.param_index_by_string_id("nope"), None);
    }

    #[test]
    fn test_normalize_denormalize_linear() {
        let desc = ParamDescriptor::scalar("X", "X", 0.0, 10.0, 5.0);
        assert_eq!(desc.normalize(0.0), 0.0);
        assert_eq!(desc.normalize(5.0), 0.5);
        assert_eq!(desc.normalize(10.0), 1.0);

        let rt = desc.denormalize(desc.normalize(7.3));
        assert!((rt - 7.3).abs() < 1e-4);
    }

    #[test]
    fn test_normalize_denormalize_logarithmic() {
        let desc = ParamDescriptor::freq_hz("F", "F", 20.0, 20000.0, 1000.0);

        assert!((desc.normalize(20.0) - 0.0).abs() < 1e-6);
        assert!((desc.normalize(20000.0) - 1.0).abs() < 1e-6);

        // Midpoint in log space: sqrt(20 * 20000) ≈ 632.5
        let mid = desc.denormalize(0.5);
        let expected_mid = libm::sqrtf(20.0 * 20000.0);
        assert!(
            (mid - expected_mid).abs() < 1.0,
            "log midpoint: expected ~{expected_mid}, got {mid}"
        );

        for &val in &[20.0, 100.0, 1000.0, 5000.0, 20000.0] {
            let rt = desc.denormalize(desc.normalize(val));
            assert!(
                (rt - val).abs() / val < 1e-4,
                "log round-trip failed for {val}: got {rt}"
            );
        }
    }

    #[test]
    fn test_normalize_zero_range() {
        let desc = ParamDescriptor::scalar("Fixed", "Fixed", 42.0, 42.0, 42.0);
        assert_eq!(desc.normalize(42.0), 0.0);
    }

    #[test]
    fn test_descriptor_clamp() {
        let desc = ParamDescriptor::scalar("Curve", "Curve", 0.0, 0.9, 0.5);
        assert_eq!(desc.clamp(0.5), 0.5);
        assert_eq!(desc.clamp(1.0), 0.9);
        assert_eq!(desc.clamp(-0.1), 0.0);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_format_value() {
        let desc = ParamDescriptor::freq_hz("LowCut", "LowCut", 20.0, 600.0, 250.0);
        assert_eq!(desc.format_value(250.0), "250 Hz");

        let desc = ParamDescriptor::scalar("Curve", "Curve", 0.0, 0.9, 0.5);
        assert_eq!(desc.format_value(0.5), "0.500");
    }

    #[test]
    fn test_unit_suffix() {
        assert_eq!(ParamUnit::Decibels.suffix(), " dB");
        assert_eq!(ParamUnit::Hertz.suffix(), " Hz");
        assert_eq!(ParamUnit::Percent.suffix(), "%");
        assert_eq!(ParamUnit::None.suffix(), "");
    }
}
