//! Colorimetric operations: compositing, interpolation, tone and gamma.

use tint_transfer::srgb;

use crate::color::Color;

// ============================================================================
// Rec.709 Luminance Constants
// ============================================================================

/// Rec.709 luminance coefficient for red channel.
///
/// Used in the relative luminance formula: `Y = 0.2126*R + 0.7152*G + 0.0722*B`
pub const REC709_LUMA_R: f64 = 0.2126;

/// Rec.709 luminance coefficient for green channel.
pub const REC709_LUMA_G: f64 = 0.7152;

/// Rec.709 luminance coefficient for blue channel.
pub const REC709_LUMA_B: f64 = 0.0722;

/// Rec.709 luminance coefficients as an array [R, G, B].
pub const REC709_LUMA: [f64; 3] = [REC709_LUMA_R, REC709_LUMA_G, REC709_LUMA_B];

#[inline]
fn lerpf(from: f64, to: f64, weight: f64) -> f64 {
    from + (to - from) * weight
}

impl Color {
    /// Composites `over` on top of this color (Porter-Duff over).
    ///
    /// The result is straight (not premultiplied) alpha. When the combined
    /// alpha is exactly zero the result is [`Color::TRANSPARENT`].
    ///
    /// ```
    /// use tint_core::Color;
    ///
    /// let bg = Color::new(0.0, 1.0, 0.0, 0.5); // green, 50%
    /// let fg = Color::new(1.0, 0.0, 0.0, 0.5); // red, 50%
    /// let blended = bg.blend(fg);
    /// assert_eq!(blended.a, 0.75);
    /// ```
    pub fn blend(self, over: Self) -> Self {
        let sa = 1.0 - over.a;
        let a = self.a * sa + over.a;
        if a == 0.0 {
            return Self::TRANSPARENT;
        }
        let channel = |base: f32, top: f32| (base * self.a * sa + top * over.a) / a;
        Self::from_f32(
            channel(self.r, over.r),
            channel(self.g, over.g),
            channel(self.b, over.b),
            a,
        )
    }

    /// Clamps each channel between the matching channels of `min` and `max`.
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self::from_f32(
            self.r.min(max.r).max(min.r),
            self.g.min(max.g).max(min.g),
            self.b.min(max.b).max(min.b),
            self.a.min(max.a).max(min.a),
        )
    }

    /// Darkens by `amount` (a ratio, typically 0 to 1). Alpha is kept.
    ///
    /// ```
    /// use tint_core::Color;
    ///
    /// let dark_green = Color::new(0.0, 1.0, 0.0, 1.0).darkened(0.2);
    /// assert_eq!(dark_green.g, 0.8);
    /// ```
    pub fn darkened(self, amount: f64) -> Self {
        let k = 1.0 - amount;
        Self::new(
            f64::from(self.r) * k,
            f64::from(self.g) * k,
            f64::from(self.b) * k,
            f64::from(self.a),
        )
    }

    /// Lightens by `amount` (a ratio, typically 0 to 1). Alpha is kept.
    pub fn lightened(self, amount: f64) -> Self {
        let lighten = |v: f32| {
            let v = f64::from(v);
            v + (1.0 - v) * amount
        };
        Self::new(lighten(self.r), lighten(self.g), lighten(self.b), f64::from(self.a))
    }

    /// Linear interpolation of all four channels. `weight` is not clamped.
    ///
    /// ```
    /// use tint_core::Color;
    ///
    /// let red = Color::new(1.0, 0.0, 0.0, 1.0);
    /// let aqua = Color::new(0.0, 1.0, 0.8, 1.0);
    /// assert!(red.lerp(aqua, 0.5).is_equal_approx(Color::new(0.5, 0.5, 0.4, 1.0)));
    /// ```
    pub fn lerp(self, to: Self, weight: f64) -> Self {
        let mix = |a: f32, b: f32| lerpf(f64::from(a), f64::from(b), weight);
        Self::new(
            mix(self.r, to.r),
            mix(self.g, to.g),
            mix(self.b, to.b),
            mix(self.a, to.a),
        )
    }

    /// Relative luminance using Rec.709 weights.
    ///
    /// Only meaningful for linear-light input; convert with
    /// [`Color::to_linear`] first if the color is sRGB encoded.
    pub fn luminance(self) -> f64 {
        REC709_LUMA_R * f64::from(self.r)
            + REC709_LUMA_G * f64::from(self.g)
            + REC709_LUMA_B * f64::from(self.b)
    }

    /// Returns `(1 - r, 1 - g, 1 - b, a)`.
    #[inline]
    pub fn inverted(self) -> Self {
        Self::from_f32(1.0 - self.r, 1.0 - self.g, 1.0 - self.b, self.a)
    }

    /// Converts linear RGB to sRGB encoding. Alpha is kept.
    pub fn to_srgb(self) -> Self {
        self.map_rgb_f64(srgb::encode)
    }

    /// Converts sRGB-encoded RGB to linear light. Alpha is kept.
    pub fn to_linear(self) -> Self {
        self.map_rgb_f64(srgb::decode)
    }

    #[inline]
    fn map_rgb_f64(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(
            f(f64::from(self.r)),
            f(f64::from(self.g)),
            f(f64::from(self.b)),
            f64::from(self.a),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_blend_half_alpha() {
        let bg = Color::new(0.0, 1.0, 0.0, 0.5);
        let fg = Color::new(1.0, 0.0, 0.0, 0.5);
        let c = bg.blend(fg);
        assert_eq!(c.a, 0.75);
        assert_relative_eq!(c.r, 2.0 / 3.0);
        assert_relative_eq!(c.g, 1.0 / 3.0);
        assert_eq!(c.b, 0.0);
    }

    #[test]
    fn test_blend_opaque_over_wins() {
        let base = Color::new(0.2, 0.4, 0.6, 1.0);
        let over = Color::new(0.9, 0.8, 0.7, 1.0);
        assert_eq!(base.blend(over), over);
    }

    #[test]
    fn test_blend_zero_alpha_is_transparent() {
        let base = Color::new(0.2, 0.4, 0.6, 0.0);
        let over = Color::new(0.9, 0.8, 0.7, 0.0);
        assert_eq!(base.blend(over), Color::TRANSPARENT);
    }

    #[test]
    fn test_blend_invisible_over_keeps_base() {
        let base = Color::new(0.2, 0.4, 0.6, 0.7);
        let over = Color::new(0.9, 0.8, 0.7, 0.0);
        assert!(base.blend(over).is_equal_approx(base));
    }

    #[test]
    fn test_clamp_between_colors() {
        let c = Color::new(-0.5, 0.5, 1.5, 0.2);
        let lo = Color::new(0.0, 0.6, 0.0, 0.5);
        let hi = Color::new(1.0, 1.0, 1.0, 1.0);
        assert_eq!(c.clamp(lo, hi), Color::new(0.0, 0.6, 1.0, 0.5));
    }

    #[test]
    fn test_darken_lighten_keep_alpha() {
        let c = Color::new(0.5, 0.25, 1.0, 0.3);
        let d = c.darkened(0.5);
        assert_eq!(d.to_array(), [0.25, 0.125, 0.5, 0.3]);
        let l = c.lightened(0.5);
        assert_eq!(l.to_array(), [0.75, 0.625, 1.0, 0.3]);
    }

    #[test]
    fn test_lerp_endpoints_and_extrapolation() {
        let a = Color::new(0.1, 0.2, 0.3, 0.4);
        let b = Color::new(0.9, 0.7, 0.5, 1.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert!(a.lerp(b, 1.0).is_equal_approx(b));
        let over = Color::new(0.0, 0.0, 0.0, 1.0).lerp(Color::new(1.0, 1.0, 1.0, 1.0), 2.0);
        assert_eq!(over.r, 2.0);
    }

    #[test]
    fn test_luminance() {
        assert_abs_diff_eq!(Color::WHITE.luminance(), 1.0, epsilon = 1e-12);
        assert_eq!(Color::new(1.0, 0.0, 0.0, 1.0).luminance(), REC709_LUMA_R);
        assert_eq!(Color::new(0.0, 1.0, 0.0, 1.0).luminance(), REC709_LUMA_G);
        assert_eq!(Color::new(0.0, 0.0, 1.0, 0.0).luminance(), REC709_LUMA_B);
    }

    #[test]
    fn test_inverted() {
        let c = Color::new(0.3, 0.4, 0.9, 1.0);
        assert!(c.inverted().is_equal_approx(Color::new(0.7, 0.6, 0.1, 1.0)));
        assert!(c.inverted().inverted().is_equal_approx(c));
    }

    #[test]
    fn test_gamma_keeps_alpha() {
        let c = Color::new(0.5, 0.2, 0.8, 0.25);
        assert_eq!(c.to_srgb().a, 0.25);
        assert_eq!(c.to_linear().a, 0.25);
        assert!(c.to_linear().to_srgb().is_equal_approx(c));
    }

    #[test]
    fn test_gamma_thresholds() {
        let c = Color::new(0.003, 0.04045, 1.0, 1.0);
        assert_relative_eq!(c.to_srgb().r, (0.003 * 12.92) as f32);
        assert_relative_eq!(c.to_linear().g, (f64::from(0.04045f32) / 12.92) as f32);
        assert_relative_eq!(c.to_srgb().b, 1.0);
    }
}
