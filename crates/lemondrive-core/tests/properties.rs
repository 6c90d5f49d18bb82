//! Property-based tests for lemondrive-core DSP primitives.
//!
//! Tests filter stability and the arctangent clipper's invariants using
//! proptest for randomized input generation.

use proptest::prelude::*;

use lemondrive_core::{
    Effect, FilterMode, FirstOrderFilter, ParamDescriptor, arctan_clip,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// For any cutoff (even far outside the audible range) and either mode,
    /// the filter produces finite output for random finite input. The cutoff
    /// clamp keeps `tan` away from its pole.
    #[test]
    fn first_order_stability(
        freq in 0.1f32..100000.0f32,
        highpass in any::<bool>(),
        input in prop::array::uniform32(-1.0f32..=1.0f32),
    ) {
        let mode = if highpass { FilterMode::HighPass } else { FilterMode::LowPass };
        let mut filter = FirstOrderFilter::new(mode, 48000.0, freq);

        for &sample in &input {
            let out = filter.process(sample);
            prop_assert!(
                out.is_finite(),
                "{mode:?} (freq={freq}) produced non-finite output {out} for input {sample}"
            );
        }
    }

    /// A first-order filter never amplifies: for bounded input the output
    /// stays within a small margin of the input bound.
    #[test]
    fn first_order_passivity(
        freq in 20.0f32..20000.0f32,
        highpass in any::<bool>(),
        input in prop::array::uniform32(-1.0f32..=1.0f32),
    ) {
        let mode = if highpass { FilterMode::HighPass } else { FilterMode::LowPass };
        let mut filter = FirstOrderFilter::new(mode, 48000.0, freq);

        for &sample in &input {
            let out = filter.process(sample);
            prop_assert!(
                out.abs() <= 2.0,
                "{mode:?} (freq={freq}) output {out} exceeds passivity bound"
            );
        }
    }

    /// After reset(), the filter's state is fully cleared: zero input yields
    /// exact zero output regardless of what was processed before.
    #[test]
    fn first_order_reset_clears_history(
        freq in 20.0f32..20000.0f32,
        input in prop::array::uniform32(-1.0f32..=1.0f32),
    ) {
        let mut hp = FirstOrderFilter::new(FilterMode::HighPass, 48000.0, freq);
        for &sample in &input {
            hp.process(sample);
        }
        hp.reset();
        for _ in 0..32 {
            prop_assert_eq!(hp.process(0.0), 0.0);
        }
    }

    /// The clipper output stays strictly inside (-1, 1) for any input and any
    /// curve, including curves beyond the valid range (internal clamp).
    #[test]
    fn arctan_clip_bounded(
        x in -1000.0f32..=1000.0f32,
        curve in -1.0f32..=2.0f32,
    ) {
        let y = arctan_clip(x, curve);
        prop_assert!(y.is_finite());
        prop_assert!(y.abs() < 1.0, "arctan_clip({x}, {curve}) = {y} out of bounds");
    }

    /// Zero is a fixed point of the clipper for every curve setting.
    #[test]
    fn arctan_clip_zero_fixed_point(curve in 0.0f32..=0.99f32) {
        prop_assert_eq!(arctan_clip(0.0, curve), 0.0);
    }

    /// The clipper is odd: f(-x) == -f(x).
    #[test]
    fn arctan_clip_odd_symmetry(
        x in 0.0f32..=100.0f32,
        curve in 0.0f32..=0.9f32,
    ) {
        let pos = arctan_clip(x, curve);
        let neg = arctan_clip(-x, curve);
        prop_assert!((pos + neg).abs() < 1e-6, "f({x}) + f(-{x}) = {}", pos + neg);
    }

    /// The clipper is monotonic: larger input never yields smaller output.
    #[test]
    fn arctan_clip_monotonic(
        a in -50.0f32..=50.0f32,
        b in -50.0f32..=50.0f32,
        curve in 0.0f32..=0.9f32,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            arctan_clip(lo, curve) <= arctan_clip(hi, curve) + 1e-6,
            "arctan_clip not monotonic between {lo} and {hi} at curve {curve}"
        );
    }

    /// Descriptor normalization round-trips on both scales: plain -> [0,1]
    /// -> plain recovers the value within f32 tolerance.
    #[test]
    fn descriptor_normalize_roundtrip(
        value in 20.0f32..=20000.0f32,
        logarithmic in any::<bool>(),
    ) {
        let desc = if logarithmic {
            ParamDescriptor::freq_hz("F", "F", 20.0, 20000.0, 1000.0)
        } else {
            ParamDescriptor::scalar("X", "X", 20.0, 20000.0, 1000.0)
        };

        let rt = desc.denormalize(desc.normalize(value));
        prop_assert!(
            (rt - value).abs() / value < 1e-3,
            "round-trip failed for {value}: got {rt}"
        );
    }
}
