//! LemonDrive DSP - the saturation/drive signal chain
//!
//! This crate implements the LemonDrive effect on top of lemondrive-core:
//! an adjustable first-order low-cut/high-cut filter pair feeding an
//! arctangent soft-clipping waveshaper, controlled by six knobs.
//!
//! Three layers, outermost first:
//!
//! - [`DriveProcessor`] - the host-facing block processor
//!   (`prepare` / `process` / `reset`), reading knobs from shared
//!   [`DriveParams`] atomic cells once per block
//! - [`LemonDrive`] - the single-channel effect implementing
//!   [`Effect`](lemondrive_core::Effect) and
//!   [`ParameterInfo`](lemondrive_core::ParameterInfo), for offline
//!   rendering and effect-chain use
//! - [`DriveParams`] - lock-free parameter cells written by a control
//!   thread and snapshotted by the audio thread
//!
//! ## Example
//!
//! ```rust
//! use lemondrive_core::Effect;
//! use lemondrive_dsp::LemonDrive;
//!
//! let mut drive = LemonDrive::new(48000.0);
//! drive.set_drive(0.4);
//! drive.set_curve(0.7);
//!
//! let output = drive.process(0.1);
//! assert!(output.abs() < 1.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod drive;
pub mod processor;
pub mod shared;

// Re-export main types at crate root
pub use drive::{LemonDrive, PARAMS, ParamIndex};
pub use processor::DriveProcessor;
pub use shared::{DriveParams, DriveSnapshot};
