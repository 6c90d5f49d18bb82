//! Offline rendering through the drive chain.

use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use lemondrive_core::linear_to_db;
use lemondrive_dsp::{DriveParams, DriveProcessor};
use lemondrive_io::{StereoSamples, WavSpec, read_wav_stereo, write_wav_stereo};
use std::path::PathBuf;
use std::sync::Arc;

use crate::preset::DrivePreset;

#[derive(Args)]
pub struct RenderArgs {
    /// Input WAV file (mono or stereo)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Preset file (TOML); knob flags below override it
    #[arg(short, long)]
    preset: Option<PathBuf>,

    /// Drive knob (0.0 to 1.0)
    #[arg(long)]
    drive: Option<f32>,

    /// Range knob (1.0 to 150.0)
    #[arg(long)]
    range: Option<f32>,

    /// Volume knob (0.0 to 1.0)
    #[arg(long)]
    volume: Option<f32>,

    /// LowCut high-pass cutoff in Hz (20 to 600)
    #[arg(long)]
    low_cut: Option<f32>,

    /// HighCut low-pass cutoff in Hz (2000 to 20000)
    #[arg(long)]
    high_cut: Option<f32>,

    /// Curve knob (0.0 to 0.9)
    #[arg(long)]
    curve: Option<f32>,

    /// Processing block size
    #[arg(long, default_value = "512")]
    block_size: usize,

    /// Output bit depth (16, 24, or 32)
    #[arg(long, default_value = "32")]
    bit_depth: u16,
}

pub fn run(args: RenderArgs) -> anyhow::Result<()> {
    println!("Reading {}...", args.input.display());
    let (samples, spec) = read_wav_stereo(&args.input)?;
    let sample_rate = spec.sample_rate as f32;

    println!(
        "  {} frames, {} Hz, {:.2}s",
        samples.len(),
        spec.sample_rate,
        samples.len() as f32 / sample_rate
    );

    let params = Arc::new(DriveParams::default());

    if let Some(preset_path) = &args.preset {
        let preset = DrivePreset::load(preset_path)?;
        println!("Loading preset: {}", preset.name);
        preset.apply(&params);
    }

    // Flags win over the preset
    if let Some(v) = args.drive {
        params.set_drive(v);
    }
    if let Some(v) = args.range {
        params.set_range(v);
    }
    if let Some(v) = args.volume {
        params.set_volume(v);
    }
    if let Some(v) = args.low_cut {
        params.set_low_cut_hz(v);
    }
    if let Some(v) = args.high_cut {
        params.set_high_cut_hz(v);
    }
    if let Some(v) = args.curve {
        params.set_curve(v);
    }

    let snap = params.snapshot();
    tracing::debug!(?snap, "resolved knob values");
    println!(
        "Knobs: drive {:.3}, range {:.0}, volume {:.3}, lowcut {:.0} Hz, highcut {:.0} Hz, curve {:.3}",
        snap.drive, snap.range, snap.volume, snap.low_cut_hz, snap.high_cut_hz, snap.curve
    );

    anyhow::ensure!(args.block_size > 0, "block size must be at least 1");
    let mut processor = DriveProcessor::new(Arc::clone(&params));
    processor.prepare(sample_rate, args.block_size);

    let pb = ProgressBar::new(samples.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("##-"),
    );

    let mut output = samples.clone();
    let total = output.len();
    for (i, (left, right)) in output
        .left
        .chunks_mut(args.block_size)
        .zip(output.right.chunks_mut(args.block_size))
        .enumerate()
    {
        processor.process(left, right);
        pb.set_position(((i + 1) * args.block_size).min(total) as u64);
    }
    pb.finish_with_message("done");

    print_stats("Input", &samples);
    print_stats("Output", &output);

    let out_spec = WavSpec {
        channels: 2,
        sample_rate: spec.sample_rate,
        bits_per_sample: args.bit_depth,
    };

    println!("\nWriting {}...", args.output.display());
    write_wav_stereo(&args.output, &output, out_spec)?;
    println!("Done!");

    Ok(())
}

fn print_stats(label: &str, samples: &StereoSamples) {
    let rms_l = rms(&samples.left);
    let rms_r = rms(&samples.right);
    let peak = samples
        .left
        .iter()
        .chain(samples.right.iter())
        .map(|s| s.abs())
        .fold(0.0, f32::max);

    println!(
        "  {label}: RMS {:.1}/{:.1} dB, Peak {:.1} dB",
        linear_to_db(rms_l),
        linear_to_db(rms_r),
        linear_to_db(peak)
    );
}

fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f32 = samples.iter().map(|s| s * s).sum();
    (sum / samples.len() as f32).sqrt()
}
