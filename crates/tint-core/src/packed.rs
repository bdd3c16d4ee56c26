//! Packed integer encodings.
//!
//! # 8 and 16 bits per channel
//!
//! | Method | Layout (most significant first) |
//! |--------|---------------------------------|
//! | [`Color::from_hex`] / [`Color::to_rgba32`] | `RRGGBBAA` |
//! | [`Color::to_argb32`] | `AARRGGBB` |
//! | [`Color::to_abgr32`] | `AABBGGRR` |
//! | [`Color::from_hex64`] / [`Color::to_rgba64`] | `RRRRGGGGBBBBAAAA` |
//! | [`Color::to_argb64`] | `AAAARRRRGGGGBBBB` |
//! | [`Color::to_abgr64`] | `AAAABBBBGGGGRRRR` |
//!
//! Encoders scale each channel by the lane maximum, round half away from
//! zero, and saturate to the lane range, so out-of-range channels never
//! bleed into their neighbours. The 64-bit forms are returned as `i64`
//! holding the raw bit pattern; a red (or alpha) lane at or above `0x8000`
//! makes the value negative.
//!
//! # RGBE9995
//!
//! A shared-exponent HDR format: three 9-bit mantissas (red in bits 0-8,
//! green 9-17, blue 18-26) and a 5-bit exponent in bits 27-31 with a bias
//! of 15. Alpha is not stored.

use crate::color::Color;

const MAX8: f64 = 255.0;
const MAX16: f64 = 65535.0;

/// Largest channel value representable in RGBE9995 (`0x1FF << 7`).
pub const MAX_RGB9E5: f32 = (0x1FF << 7) as f32;

/// Smallest non-zero channel value the encoder distinguishes (`2^-16`).
const MIN_RGB9E5: f32 = 1.0 / (1 << 16) as f32;

const RGB9E5_MANTISSA_BITS: i32 = 9;
const RGB9E5_EXP_BIAS: i32 = 15;

#[inline]
fn lane8(v: f32) -> u32 {
    (f64::from(v) * MAX8).round().clamp(0.0, MAX8) as u32
}

#[inline]
fn lane16(v: f32) -> u64 {
    (f64::from(v) * MAX16).round().clamp(0.0, MAX16) as u64
}

#[inline]
fn pack32(lanes: [u32; 4]) -> u32 {
    (lanes[0] << 24) | (lanes[1] << 16) | (lanes[2] << 8) | lanes[3]
}

#[inline]
fn pack64(lanes: [u64; 4]) -> i64 {
    ((lanes[0] << 48) | (lanes[1] << 32) | (lanes[2] << 16) | lanes[3]) as i64
}

impl Color {
    /// Decodes a 32-bit `0xRRGGBBAA` integer, 8 bits per channel.
    ///
    /// ```
    /// use tint_core::Color;
    ///
    /// let red = Color::from_hex(0xff0000ff);
    /// assert_eq!(red, Color::new(1.0, 0.0, 0.0, 1.0));
    /// ```
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| f64::from((hex >> shift) & 0xFF) / MAX8;
        Self::new(channel(24), channel(16), channel(8), channel(0))
    }

    /// Decodes a 64-bit `0xRRRRGGGGBBBBAAAA` integer, 16 bits per channel.
    ///
    /// The sign of `hex` is irrelevant; only the bit pattern is read.
    pub fn from_hex64(hex: i64) -> Self {
        let bits = hex as u64;
        let channel = |shift: u32| ((bits >> shift) & 0xFFFF) as f64 / MAX16;
        Self::new(channel(48), channel(32), channel(16), channel(0))
    }

    /// Decodes an RGBE9995 value. Alpha is always 1.0.
    ///
    /// ```
    /// use tint_core::Color;
    ///
    /// let white = Color::from_rgbe9995(0x8402_0100);
    /// assert_eq!(white, Color::WHITE);
    /// ```
    pub fn from_rgbe9995(rgbe: u32) -> Self {
        let r = f64::from(rgbe & 0x1FF);
        let g = f64::from((rgbe >> 9) & 0x1FF);
        let b = f64::from((rgbe >> 18) & 0x1FF);
        let e = (rgbe >> 27) as i32;
        let m = 2.0_f64.powi(e - RGB9E5_EXP_BIAS - RGB9E5_MANTISSA_BITS);
        Self::new(r * m, g * m, b * m, 1.0)
    }

    /// Encodes red, green and blue as RGBE9995, discarding alpha.
    ///
    /// Channels are clamped to `[0, MAX_RGB9E5]`; NaN encodes as zero. The
    /// exponent is taken from the largest channel with its ninth mantissa
    /// bit rounded, so smaller channels lose precision first.
    pub fn to_rgbe9995(self) -> u32 {
        let clamp = |v: f32| v.max(0.0).min(MAX_RGB9E5);
        let (r, g, b) = (clamp(self.r), clamp(self.g), clamp(self.b));
        let max = r.max(g).max(b.max(MIN_RGB9E5));

        // Add the bias to the exponent and round at the ninth mantissa bit,
        // then keep the exponent only.
        let e_bits = max.to_bits().wrapping_add(0x0780_4000) & 0x7F80_0000;
        let e = f32::from_bits(e_bits);

        // Adding `e` shifts each channel's leading bits into the low 9 bits.
        let rb = (r + e).to_bits();
        let gb = (g + e).to_bits();
        let bb = (b + e).to_bits();

        let e_field = (e_bits << 4).wrapping_add(0x1000_0000);
        e_field | (bb << 18) | (gb << 9) | (rb & 0x1FF)
    }

    /// Packs into a 32-bit integer in RGBA order (8 bits per channel).
    ///
    /// ```
    /// use tint_core::Color;
    ///
    /// assert_eq!(Color::rgba8(0x12, 0x34, 0x56, 0x78).to_rgba32(), 0x12345678);
    /// ```
    pub fn to_rgba32(self) -> u32 {
        pack32([lane8(self.r), lane8(self.g), lane8(self.b), lane8(self.a)])
    }

    /// Packs into a 32-bit integer in ARGB order (8 bits per channel).
    pub fn to_argb32(self) -> u32 {
        pack32([lane8(self.a), lane8(self.r), lane8(self.g), lane8(self.b)])
    }

    /// Packs into a 32-bit integer in ABGR order (8 bits per channel),
    /// the byte-reversed form of [`Color::to_rgba32`].
    pub fn to_abgr32(self) -> u32 {
        pack32([lane8(self.a), lane8(self.b), lane8(self.g), lane8(self.r)])
    }

    /// Packs into a 64-bit integer in RGBA order (16 bits per channel).
    ///
    /// ```
    /// use tint_core::Color;
    ///
    /// let c = Color::new(1.0, 0.5, 0.2, 1.0);
    /// assert_eq!(c.to_rgba64(), -140736629309441);
    /// ```
    pub fn to_rgba64(self) -> i64 {
        pack64([lane16(self.r), lane16(self.g), lane16(self.b), lane16(self.a)])
    }

    /// Packs into a 64-bit integer in ARGB order (16 bits per channel).
    pub fn to_argb64(self) -> i64 {
        pack64([lane16(self.a), lane16(self.r), lane16(self.g), lane16(self.b)])
    }

    /// Packs into a 64-bit integer in ABGR order (16 bits per channel).
    pub fn to_abgr64(self) -> i64 {
        pack64([lane16(self.a), lane16(self.b), lane16(self.g), lane16(self.r)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_hex() {
        let c = Color::from_hex(0x008b8bff);
        assert_eq!(c.r, 0.0);
        assert_relative_eq!(c.g, 139.0 / 255.0);
        assert_relative_eq!(c.b, 139.0 / 255.0);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_from_hex64_negative() {
        // 0xFFFF_0000_0000_FFFF does not fit in a positive i64.
        let c = Color::from_hex64(0xFFFF_0000_0000_FFFF_u64 as i64);
        assert_eq!(c, Color::new(1.0, 0.0, 0.0, 1.0));
        let c = Color::from_hex64(-1);
        assert_eq!(c, Color::WHITE);
    }

    #[test]
    fn test_byte_orders() {
        let c = Color::rgba8(0x11, 0x22, 0x33, 0x44);
        assert_eq!(c.to_rgba32(), 0x11223344);
        assert_eq!(c.to_argb32(), 0x44112233);
        assert_eq!(c.to_abgr32(), 0x44332211);
    }

    #[test]
    fn test_rounding_half_away() {
        let c = Color::new(1.0, 0.5, 0.2, 1.0);
        assert_eq!(c.to_rgba32(), 0xff8033ff);
        assert_eq!(c.to_argb32(), 0xffff8033);
        assert_eq!(c.to_abgr32(), 0xff3380ff);
    }

    #[test]
    fn test_out_of_range_saturates() {
        let c = Color::new(2.0, -1.0, 0.0, 1.0);
        assert_eq!(c.to_rgba32(), 0xff0000ff);
        assert_eq!(c.to_argb32(), 0xffff0000);
        assert_eq!(c.to_abgr32(), 0xff0000ff);
        assert_eq!(c.to_rgba64(), 0xFFFF_0000_0000_FFFF_u64 as i64);
    }

    #[test]
    fn test_64_bit_orders() {
        let c = Color::from_hex64(0x1111_2222_3333_4444);
        assert_eq!(c.to_rgba64(), 0x1111_2222_3333_4444);
        assert_eq!(c.to_argb64(), 0x4444_1111_2222_3333);
        assert_eq!(c.to_abgr64(), 0x4444_3333_2222_1111);
    }

    #[test]
    fn test_rgbe9995_decode() {
        // Exponent 15 with 9 mantissa bits: scale 2^-9, so 256 -> 0.5.
        let bits = (15 << 27) | (256 << 18) | (128 << 9) | 511;
        let c = Color::from_rgbe9995(bits);
        assert_eq!(c.r, 511.0 / 512.0);
        assert_eq!(c.g, 0.25);
        assert_eq!(c.b, 0.5);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_rgbe9995_encode() {
        assert_eq!(Color::WHITE.to_rgbe9995(), 0x8402_0100);
        assert_eq!(Color::new(0.5, 0.25, 0.125, 0.3).to_rgbe9995(), 0x7901_0100);
        assert_eq!(Color::BLACK.to_rgbe9995(), 0);
        assert_eq!(Color::new(4.0, 2.0, 0.0, 1.0).to_rgbe9995(), 0x9001_0100);
    }

    #[test]
    fn test_rgbe9995_roundtrip_is_lossy() {
        let c = Color::new(0.2, 0.4, 0.6, 1.0);
        let back = Color::from_rgbe9995(c.to_rgbe9995());
        assert_eq!(back, Color::new(0.19921875, 0.400390625, 0.599609375, 1.0));
    }

    #[test]
    fn test_rgbe9995_clamps_negative() {
        let c = Color::new(-1.0, f64::NAN, 1.0, 1.0);
        let back = Color::from_rgbe9995(c.to_rgbe9995());
        assert_eq!(back, Color::new(0.0, 0.0, 1.0, 1.0));
    }
}
