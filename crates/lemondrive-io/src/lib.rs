//! Audio file I/O for the LemonDrive renderer.
//!
//! This crate provides WAV reading and writing over `hound`:
//!
//! - [`read_wav`] / [`write_wav`] for mono buffers
//! - [`read_wav_stereo`] / [`write_wav_stereo`] for deinterleaved stereo
//!
//! Only mono and stereo files are accepted; the drive chain's bus contract
//! is "channel counts match, at most two".
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lemondrive_io::{read_wav_stereo, write_wav_stereo};
//!
//! let (mut samples, spec) = read_wav_stereo("input.wav")?;
//! // ... process samples.left / samples.right in place ...
//! write_wav_stereo("output.wav", &samples, spec)?;
//! ```

mod wav;

pub use wav::{
    StereoSamples, WavSpec, read_wav, read_wav_stereo, write_wav, write_wav_stereo,
};

/// Error types for audio I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// The file has more channels than the drive chain accepts.
    #[error("Unsupported channel count: {0} (only mono and stereo are accepted)")]
    UnsupportedChannels(u16),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for audio I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
