//! # tint-transfer
//!
//! Transfer functions for moving color channels between linear light and
//! the gamma-encoded sRGB representation.
//!
//! # Terminology
//!
//! - **Encode** (OETF): Linear -> sRGB, e.g. before display or storage
//! - **Decode** (EOTF): sRGB -> Linear, e.g. before blending or lighting
//!
//! All functions work on `f64` so that callers holding `f32` channels can
//! widen, convert, and narrow once.
//!
//! # Usage
//!
//! ```rust
//! use tint_transfer::srgb;
//!
//! let linear = srgb::decode(0.5);
//! let encoded = srgb::encode(linear);
//! assert!((encoded - 0.5).abs() < 1e-9);
//! ```
//!
//! # Used By
//!
//! - `tint-core` - `Color::to_srgb` / `Color::to_linear`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod srgb;

pub use srgb::{decode as srgb_decode, encode as srgb_encode};
