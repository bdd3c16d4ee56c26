//! The RGBA color value type.
//!
//! [`Color`] holds four `f32` channels in fixed order: red, green, blue,
//! alpha. Channels are nominally in [0, 1] but are never clamped on
//! construction, so over-bright (HDR) and negative values survive every
//! operation that does not explicitly clamp.
//!
//! Constructors accept `f64` and narrow once, so a color built from 8-bit
//! channels carries the same precision loss no matter how it was computed.
//!
//! ```
//! use tint_core::Color;
//!
//! let teal = Color::new(0.0, 0.5, 0.5, 1.0);
//! let same = Color::rgb8(0, 128, 128);
//! assert!(!teal.is_equal_approx(same)); // 128/255 != 0.5
//! assert_eq!(teal.r, 0.0);
//! ```
//!
//! # Arithmetic
//!
//! Colors support componentwise `+ - * /` and unary `-`, and the same four
//! binary operators with an `f64` scalar applied to all four channels,
//! alpha included. Division by zero follows IEEE-754.

use std::fmt;
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

/// Epsilon used by [`is_equal_approx`].
pub const CMP_EPSILON: f32 = 0.00001;

/// An RGBA color with `f32` channels.
///
/// # Memory Layout
///
/// Uses `#[repr(C)]` for predictable layout: `[R, G, B, A]`
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// Red channel value.
    pub r: f32,
    /// Green channel value.
    pub g: f32,
    /// Blue channel value.
    pub b: f32,
    /// Alpha channel value.
    pub a: f32,
}

impl Color {
    /// Fully transparent black, `(0, 0, 0, 0)`. Also the [`Default`].
    pub const TRANSPARENT: Self = Self::from_f32(0.0, 0.0, 0.0, 0.0);

    /// Opaque black.
    pub const BLACK: Self = Self::from_f32(0.0, 0.0, 0.0, 1.0);

    /// Opaque white.
    pub const WHITE: Self = Self::from_f32(1.0, 1.0, 1.0, 1.0);

    /// Creates a color from RGBA values, typically between 0.0 and 1.0.
    ///
    /// Values are narrowed to `f32`; no range check is applied.
    ///
    /// ```
    /// use tint_core::Color;
    ///
    /// let c = Color::new(0.2, 1.0, 0.7, 0.8);
    /// assert_eq!(c.g, 1.0);
    /// assert_eq!(c.a, 0.8f32);
    /// ```
    #[inline]
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self::from_f32(r as f32, g as f32, b as f32, a as f32)
    }

    /// Creates a color directly from `f32` channels.
    #[inline]
    pub const fn from_f32(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 8-bit channels, each divided by 255.
    ///
    /// ```
    /// use tint_core::Color;
    ///
    /// let red = Color::rgb8(255, 0, 0);
    /// assert_eq!(red, Color::new(1.0, 0.0, 0.0, 1.0));
    /// ```
    #[inline]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba8(r, g, b, u8::MAX)
    }

    /// Creates a color from 8-bit channels, each divided by 255.
    ///
    /// Because of the lower precision of `u8`, the result is generally not
    /// bit-identical to the "same" color built with [`Color::new`]; compare
    /// with [`Color::is_equal_approx`].
    #[inline]
    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            f64::from(a) / 255.0,
        )
    }

    /// Returns the channels as an array in `[r, g, b, a]` order.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Creates a color from an `[r, g, b, a]` array.
    #[inline]
    pub const fn from_array(arr: [f32; 4]) -> Self {
        Self::from_f32(arr[0], arr[1], arr[2], arr[3])
    }

    /// Returns a copy with the alpha channel replaced.
    #[inline]
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a: a as f32, ..self }
    }

    /// Red channel as a rounded, clamped 8-bit value.
    #[inline]
    pub fn r8(self) -> u8 {
        to_u8(self.r)
    }

    /// Green channel as a rounded, clamped 8-bit value.
    #[inline]
    pub fn g8(self) -> u8 {
        to_u8(self.g)
    }

    /// Blue channel as a rounded, clamped 8-bit value.
    #[inline]
    pub fn b8(self) -> u8 {
        to_u8(self.b)
    }

    /// Alpha channel as a rounded, clamped 8-bit value.
    #[inline]
    pub fn a8(self) -> u8 {
        to_u8(self.a)
    }

    /// Returns `true` if this color and `to` are approximately equal.
    ///
    /// Every channel pair must pass [`is_equal_approx`].
    #[inline]
    pub fn is_equal_approx(self, to: Self) -> bool {
        is_equal_approx(self.r, to.r)
            && is_equal_approx(self.g, to.g)
            && is_equal_approx(self.b, to.b)
            && is_equal_approx(self.a, to.a)
    }

    /// Adds `f` to all four channels.
    #[inline]
    pub fn addf(self, f: f64) -> Self {
        self + f
    }

    /// Subtracts `f` from all four channels.
    #[inline]
    pub fn subf(self, f: f64) -> Self {
        self - f
    }

    /// Multiplies all four channels by `f`.
    #[inline]
    pub fn mulf(self, f: f64) -> Self {
        self * f
    }

    /// Divides all four channels by `f`.
    #[inline]
    pub fn divf(self, f: f64) -> Self {
        self / f
    }

    #[inline]
    fn map(self, f: impl Fn(f32) -> f32) -> Self {
        Self::from_f32(f(self.r), f(self.g), f(self.b), f(self.a))
    }

    #[inline]
    fn zip(self, o: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        Self::from_f32(f(self.r, o.r), f(self.g, o.g), f(self.b, o.b), f(self.a, o.a))
    }
}

/// Approximate float equality with a relative tolerance.
///
/// Exactly equal values (including matching infinities) compare equal.
/// Otherwise the tolerance is `CMP_EPSILON * |a|`, but never less than
/// `CMP_EPSILON`, and the values are equal when `|a - b|` is strictly below it.
///
/// ```
/// use tint_core::is_equal_approx;
///
/// assert!(is_equal_approx(f32::INFINITY, f32::INFINITY));
/// assert!(is_equal_approx(0.0, 0.000009));
/// assert!(!is_equal_approx(0.0, 0.00001));
/// ```
#[inline]
pub fn is_equal_approx(a: f32, b: f32) -> bool {
    if a == b {
        return true;
    }
    let tolerance = (CMP_EPSILON * a.abs()).max(CMP_EPSILON);
    (a - b).abs() < tolerance
}

#[inline]
fn to_u8(v: f32) -> u8 {
    (f64::from(v) * 255.0).round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_html(true))
    }
}

impl From<[f32; 4]> for Color {
    #[inline]
    fn from(arr: [f32; 4]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Color> for [f32; 4] {
    #[inline]
    fn from(c: Color) -> Self {
        c.to_array()
    }
}

impl Index<usize> for Color {
    type Output = f32;

    /// Channel by position: 0 = r, 1 = g, 2 = b, 3 = a.
    ///
    /// # Panics
    ///
    /// Panics if `index > 3`.
    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.r,
            1 => &self.g,
            2 => &self.b,
            3 => &self.a,
            _ => panic!("color channel index out of range: {index}"),
        }
    }
}

impl IndexMut<usize> for Color {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.r,
            1 => &mut self.g,
            2 => &mut self.b,
            3 => &mut self.a,
            _ => panic!("color channel index out of range: {index}"),
        }
    }
}

// ============================================================================
// Arithmetic Operations
// ============================================================================

impl Add for Color {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.zip(rhs, |a, b| a + b)
    }
}

impl Sub for Color {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.zip(rhs, |a, b| a - b)
    }
}

impl Mul for Color {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.zip(rhs, |a, b| a * b)
    }
}

impl Div for Color {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        self.zip(rhs, |a, b| a / b)
    }
}

impl Neg for Color {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.map(|v| -v)
    }
}

impl Add<f64> for Color {
    type Output = Self;

    #[inline]
    fn add(self, rhs: f64) -> Self::Output {
        let s = rhs as f32;
        self.map(|v| v + s)
    }
}

impl Sub<f64> for Color {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: f64) -> Self::Output {
        let s = rhs as f32;
        self.map(|v| v - s)
    }
}

impl Mul<f64> for Color {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        let s = rhs as f32;
        self.map(|v| v * s)
    }
}

impl Div<f64> for Color {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        let s = rhs as f32;
        self.map(|v| v / s)
    }
}
