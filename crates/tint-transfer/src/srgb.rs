//! sRGB transfer function.
//!
//! The sRGB standard uses a piecewise function combining a linear segment
//! near black with a power curve (approximately gamma 2.2) for the rest.
//!
//! The two directions use different break points, so they are exact
//! inverses only away from the toe.
//!
//! # Range
//!
//! - Nominal input/output: [0, 1]
//! - Values outside the range are not clamped. Negative inputs above the
//!   break fall into the power branch and yield NaN.
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

/// Linear values strictly below this use the linear segment in [`encode`].
pub const ENCODE_THRESHOLD: f64 = 0.0031308;

/// Encoded values at or below this use the linear segment in [`decode`].
pub const DECODE_THRESHOLD: f64 = 0.04045;

/// Slope of the linear toe segment.
pub const TOE_SLOPE: f64 = 12.92;

/// sRGB OETF: encodes linear light to sRGB.
///
/// # Formula
///
/// ```text
/// if L < 0.0031308:
///     V = L * 12.92
/// else:
///     V = 1.055 * L^(1/2.4) - 0.055
/// ```
///
/// # Example
///
/// ```rust
/// use tint_transfer::srgb::encode;
///
/// let encoded = encode(0.214);
/// assert!((encoded - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn encode(l: f64) -> f64 {
    if l < ENCODE_THRESHOLD {
        TOE_SLOPE * l
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}

/// sRGB EOTF: decodes sRGB encoded values to linear light.
///
/// # Formula
///
/// ```text
/// if V <= 0.04045:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
///
/// # Example
///
/// ```rust
/// use tint_transfer::srgb::decode;
///
/// let linear = decode(0.5);
/// assert!((linear - 0.214).abs() < 0.01);
/// ```
#[inline]
pub fn decode(v: f64) -> f64 {
    if v <= DECODE_THRESHOLD {
        v / TOE_SLOPE
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Applies [`encode`] to an RGB triplet.
#[inline]
pub fn encode_rgb(rgb: [f64; 3]) -> [f64; 3] {
    [encode(rgb[0]), encode(rgb[1]), encode(rgb[2])]
}

/// Applies [`decode`] to an RGB triplet.
#[inline]
pub fn decode_rgb(rgb: [f64; 3]) -> [f64; 3] {
    [decode(rgb[0]), decode(rgb[1]), decode(rgb[2])]
}
