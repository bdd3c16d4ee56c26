//! Conversions to and from third-party math types.
//!
//! Enabled by the `glam` cargo feature.

use crate::color::Color;

impl From<Color> for glam::Vec4 {
    #[inline]
    fn from(c: Color) -> Self {
        glam::Vec4::new(c.r, c.g, c.b, c.a)
    }
}

impl From<glam::Vec4> for Color {
    #[inline]
    fn from(v: glam::Vec4) -> Self {
        Color::from_f32(v.x, v.y, v.z, v.w)
    }
}

impl Color {
    /// RGB channels as a [`glam::Vec3`], dropping alpha.
    #[inline]
    pub fn to_vec3(self) -> glam::Vec3 {
        glam::Vec3::new(self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec4_roundtrip() {
        let c = Color::new(0.1, 0.2, 0.3, 0.4);
        let v: glam::Vec4 = c.into();
        assert_eq!(v.to_array(), c.to_array());
        assert_eq!(Color::from(v), c);
    }

    #[test]
    fn test_luminance_matches_dot() {
        let c = Color::new(0.5, 0.25, 0.75, 1.0);
        let luma = glam::Vec3::new(0.2126, 0.7152, 0.0722);
        assert!((c.to_vec3().dot(luma) as f64 - c.luminance()).abs() < 1e-6);
    }
}
