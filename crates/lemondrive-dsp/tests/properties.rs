//! Property-based tests for the drive chain.
//!
//! Uses proptest to verify the chain's fundamental invariants over random
//! knob settings and inputs: zero is a fixed point, output is bounded by
//! Volume, the waveshaper is monotonic, and reset fully clears state.

use proptest::prelude::*;
use std::sync::Arc;

use lemondrive_core::{Effect, ParameterInfo};
use lemondrive_dsp::{DriveParams, DriveProcessor, LemonDrive, PARAMS};

/// Map normalized [0,1] values onto the six knobs through their descriptors.
fn set_random_params(drive: &mut LemonDrive, normalized: &[f32; 6]) {
    for (i, desc) in PARAMS.iter().enumerate() {
        drive.set_param(i, desc.denormalize(normalized[i]));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Input sample 0.0 maps to output sample 0.0 for every knob setting:
    /// both the filters and the waveshaper preserve zero.
    #[test]
    fn zero_is_a_fixed_point(normalized in prop::array::uniform6(0.0f32..=1.0f32)) {
        let mut drive = LemonDrive::new(48000.0);
        set_random_params(&mut drive, &normalized);

        for _ in 0..128 {
            prop_assert_eq!(drive.process(0.0), 0.0);
        }
    }

    /// For any finite input, |output| <= Volume: the arctangent stage is
    /// bounded by ±1 before volume scaling.
    #[test]
    fn output_bounded_by_volume(
        normalized in prop::array::uniform6(0.0f32..=1.0f32),
        input in prop::array::uniform32(-2.0f32..=2.0f32),
    ) {
        let mut drive = LemonDrive::new(48000.0);
        set_random_params(&mut drive, &normalized);
        let volume = drive.volume();

        for &sample in &input {
            let out = drive.process(sample);
            prop_assert!(out.is_finite());
            prop_assert!(
                out.abs() <= volume + 1e-6,
                "output {} exceeds volume bound {}", out, volume
            );
        }
    }

    /// The waveshaper is monotonic: |output| is non-decreasing in |input|.
    #[test]
    fn waveshaper_is_monotonic(
        normalized in prop::array::uniform6(0.0f32..=1.0f32),
        magnitudes in prop::collection::vec(0.0f32..=10.0f32, 2..32),
    ) {
        let mut drive = LemonDrive::new(48000.0);
        set_random_params(&mut drive, &normalized);

        let mut sorted = magnitudes;
        sorted.sort_by(f32::total_cmp);

        let mut prev = -1.0f32;
        for &x in &sorted {
            let y = drive.shape(x).abs();
            prop_assert!(
                y >= prev - 1e-6,
                "waveshaper not monotonic at input {}: {} < {}", x, y, prev
            );
            prev = y;
        }
    }

    /// After reset(), processing silence yields exact silence again, since
    /// the chain has no state other than filter history.
    #[test]
    fn reset_clears_state(
        normalized in prop::array::uniform6(0.0f32..=1.0f32),
        input in prop::array::uniform32(-1.0f32..=1.0f32),
    ) {
        let mut drive = LemonDrive::new(48000.0);
        set_random_params(&mut drive, &normalized);

        for &sample in &input {
            drive.process(sample);
        }
        drive.reset();

        for _ in 0..64 {
            prop_assert_eq!(drive.process(0.0), 0.0);
        }
    }

    /// The block processor and the per-sample effect agree when driven with
    /// the same knob values.
    #[test]
    fn processor_matches_effect(
        normalized in prop::array::uniform6(0.0f32..=1.0f32),
        input in prop::array::uniform32(-1.0f32..=1.0f32),
    ) {
        let params = Arc::new(DriveParams::default());
        let mut processor = DriveProcessor::new(Arc::clone(&params));
        processor.prepare(48000.0, 32);

        let mut effect = LemonDrive::new(48000.0);
        set_random_params(&mut effect, &normalized);
        for (i, desc) in PARAMS.iter().enumerate() {
            params.set_by_index(i, desc.denormalize(normalized[i]));
        }

        let mut block = input.to_vec();
        processor.process_mono(&mut block);

        for (i, &sample) in input.iter().enumerate() {
            let expected = effect.process(sample);
            prop_assert!(
                (block[i] - expected).abs() < 1e-6,
                "sample {}: processor {} != effect {}", i, block[i], expected
            );
        }
    }
}

/// For a fixed input, raising Curve increases the compression applied:
/// the output falls further below the clipper's small-signal slope.
#[test]
fn curve_softness_increases_compression() {
    let mut drive = LemonDrive::new(48000.0);
    drive.set_drive(1.0);
    drive.set_range(1.0);
    drive.set_volume(1.0);

    let input = 0.25;
    let mut prev_ratio = f32::MAX;
    for step in 0..=9 {
        let curve = step as f32 * 0.1;
        drive.set_curve(curve);
        let shaped = drive.shape(input);
        let small_signal_gain = 2.0 / (1.0 - curve);
        let ratio = shaped / (input * small_signal_gain);
        assert!(
            ratio < prev_ratio,
            "compression must strictly increase with curve ({curve}): {ratio} !< {prev_ratio}"
        );
        prev_ratio = ratio;
    }
}
