//! # tint-core
//!
//! An RGBA color value type with the conversions a renderer needs.
//!
//! [`Color`] stores four `f32` channels (red, green, blue, alpha) that are
//! nominally in [0, 1] but may hold over-bright or negative values. Every
//! operation is a pure function returning a new color.
//!
//! ## Construction
//!
//! | Source | Method |
//! |--------|--------|
//! | Floats | [`Color::new`], [`Color::from_f32`] |
//! | 8-bit channels | [`Color::rgb8`], [`Color::rgba8`] |
//! | Packed `0xRRGGBBAA` / 16-bit | [`Color::from_hex`], [`Color::from_hex64`] |
//! | Shared exponent HDR | [`Color::from_rgbe9995`] |
//! | HSV | [`Color::from_hsv`], [`Color::from_hsva`] |
//! | HTML hex string | [`Color::from_html`], [`Color::try_from_html`] |
//!
//! ## Operations
//!
//! [`Color::blend`], [`Color::clamp`], [`Color::darkened`],
//! [`Color::lightened`], [`Color::lerp`], [`Color::luminance`],
//! [`Color::inverted`], [`Color::to_srgb`], [`Color::to_linear`],
//! [`Color::is_equal_approx`], plus componentwise arithmetic.
//!
//! ## Output
//!
//! Packed integers in RGBA, ARGB and ABGR order at 8 or 16 bits per
//! channel, RGBE9995, and lowercase HTML hex via [`Color::to_html`].
//!
//! ```
//! use tint_core::Color;
//!
//! let c = Color::from_html("#0F0");
//! assert_eq!(c, Color::new(0.0, 1.0, 0.0, 1.0));
//! assert_eq!(c.to_rgba32(), 0x00ff00ff);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Serialize/Deserialize for [`Color`]
//! - `glam` - Conversions to and from `glam::Vec4`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
pub mod error;
pub mod hsv;
pub mod html;
#[cfg(feature = "glam")]
pub mod interop;
pub mod ops;
pub mod packed;

pub use color::{is_equal_approx, Color, CMP_EPSILON};
pub use error::{Error, Result};
pub use html::{hex_digit, is_valid_html};
pub use ops::{REC709_LUMA, REC709_LUMA_B, REC709_LUMA_G, REC709_LUMA_R};
pub use packed::MAX_RGB9E5;

/// Prelude module for convenient imports.
///
/// ```
/// use tint_core::prelude::*;
///
/// let c = Color::from_hsv(0.5, 1.0, 1.0);
/// assert!(is_valid_html(&c.to_html(true)));
/// ```
pub mod prelude {
    pub use crate::color::{is_equal_approx, Color};
    pub use crate::error::{Error, Result};
    pub use crate::html::is_valid_html;
}
