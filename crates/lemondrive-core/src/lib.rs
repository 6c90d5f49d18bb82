//! LemonDrive Core - DSP primitives for the LemonDrive saturation chain
//!
//! This crate provides the foundational building blocks for the drive effect,
//! designed for real-time audio processing with zero allocation in the audio
//! path.
//!
//! # Core Abstractions
//!
//! - [`Effect`] - Object-safe trait for per-sample audio processing
//! - [`FirstOrderFilter`] - First-order IIR high-pass/low-pass (bilinear transform)
//! - Math functions: [`arctan_clip`], [`db_to_linear`], [`flush_denormal`], etc.
//! - Parameter introspection: [`ParameterInfo`], [`ParamDescriptor`]
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! lemondrive-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Design Principles
//!
//! - **Real-time safe**: No allocations in audio processing paths
//! - **No dependencies on std**: Pure `no_std` with `libm` for math
//! - **Object-safe traits**: Dynamic dispatch when needed

#![cfg_attr(not(feature = "std"), no_std)]

pub mod effect;
pub mod first_order;
pub mod math;
pub mod param_info;

// Re-export main types at crate root
pub use effect::Effect;
pub use first_order::{FilterMode, FirstOrderFilter};
pub use math::{arctan_clip, db_to_linear, flush_denormal, linear_to_db};
pub use param_info::{ParamDescriptor, ParamScale, ParamUnit, ParameterInfo};
