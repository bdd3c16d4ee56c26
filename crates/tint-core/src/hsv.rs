//! HSV (hue, saturation, value) conversions.
//!
//! All three components are ratios in [0, 1]; hue wraps every 1.0.

use crate::color::Color;

impl Color {
    /// Creates an opaque color from hue, saturation and value.
    ///
    /// ```
    /// use tint_core::Color;
    ///
    /// let gray = Color::from_hsv(0.0, 0.0, 0.5);
    /// assert_eq!(gray, Color::new(0.5, 0.5, 0.5, 1.0));
    /// ```
    #[inline]
    pub fn from_hsv(h: f64, s: f64, v: f64) -> Self {
        Self::from_hsva(h, s, v, 1.0)
    }

    /// Creates a color from hue, saturation, value and alpha.
    ///
    /// Zero saturation short-circuits to the gray `(v, v, v, a)`. Otherwise
    /// the hue is scaled by 6 and reduced with a truncating remainder, so a
    /// negative hue lands in the last sector.
    pub fn from_hsva(h: f64, s: f64, v: f64, a: f64) -> Self {
        if s == 0.0 {
            return Self::new(v, v, v, a);
        }
        let h = (h * 6.0) % 6.0;
        let i = h.floor();
        let f = h - i;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));
        match i as i32 {
            0 => Self::new(v, t, p, a), // red dominant
            1 => Self::new(q, v, p, a), // green dominant
            2 => Self::new(p, v, t, a),
            3 => Self::new(p, q, v, a), // blue dominant
            4 => Self::new(t, p, v, a),
            _ => Self::new(v, p, q, a), // red dominant
        }
    }

    /// Returns `(hue, saturation, value)` of the RGB channels.
    ///
    /// Hue is in [0, 1) and is 0 for grays. Alpha is ignored.
    pub fn to_hsv(self) -> (f64, f64, f64) {
        (self.hue(), self.saturation(), self.value())
    }

    /// HSV hue in [0, 1).
    pub fn hue(self) -> f64 {
        let (r, g, b) = (f64::from(self.r), f64::from(self.g), f64::from(self.b));
        let max = r.max(g).max(b);
        let delta = max - r.min(g).min(b);
        if delta == 0.0 {
            return 0.0;
        }
        let sector = if r == max {
            (g - b) / delta
        } else if g == max {
            2.0 + (b - r) / delta
        } else {
            4.0 + (r - g) / delta
        };
        let h = sector / 6.0;
        if h < 0.0 { h + 1.0 } else { h }
    }

    /// HSV saturation, `(max - min) / max`, or 0 when `max` is 0.
    pub fn saturation(self) -> f64 {
        let (r, g, b) = (f64::from(self.r), f64::from(self.g), f64::from(self.b));
        let max = r.max(g).max(b);
        if max == 0.0 {
            0.0
        } else {
            (max - r.min(g).min(b)) / max
        }
    }

    /// HSV value, the largest of the RGB channels.
    #[inline]
    pub fn value(self) -> f64 {
        f64::from(self.r.max(self.g).max(self.b))
    }
}
