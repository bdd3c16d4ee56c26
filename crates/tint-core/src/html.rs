//! HTML hexadecimal color strings.
//!
//! Accepted input is an optional `#` followed by 3 (`RGB`), 4 (`RGBA`),
//! 6 (`RRGGBB`) or 8 (`RRGGBBAA`) case-insensitive hex digits. Shorthand
//! digits are scaled by `1/15`, full pairs by `1/255`; missing alpha is 1.0.
//!
//! [`is_valid_html`] and the parser share [`hex_digit`] and the same length
//! check, so a string is accepted by one exactly when it is accepted by the
//! other.
//!
//! ```
//! use tint_core::{is_valid_html, Color};
//!
//! assert!(is_valid_html("#55aaFF"));
//! assert!(!is_valid_html("#AABBC"));
//!
//! let c = Color::from_html("663399cc");
//! assert!(c.is_equal_approx(Color::new(0.4, 0.2, 0.6, 0.8)));
//! assert_eq!(c.to_html(true), "663399cc");
//! ```

use std::str::FromStr;

use tracing::debug;

use crate::color::Color;
use crate::error::{Error, Result};

/// Decodes one ASCII hex digit, returning `-1` for anything else.
///
/// ```
/// use tint_core::hex_digit;
///
/// assert_eq!(hex_digit(b'7'), 7);
/// assert_eq!(hex_digit(b'b'), 11);
/// assert_eq!(hex_digit(b'F'), 15);
/// assert_eq!(hex_digit(b'g'), -1);
/// ```
#[inline]
pub fn hex_digit(c: u8) -> i32 {
    match c {
        b'0'..=b'9' => i32::from(c - b'0'),
        b'a'..=b'f' => i32::from(c - b'a') + 10,
        b'A'..=b'F' => i32::from(c - b'A') + 10,
        _ => -1,
    }
}

/// Returns `true` if `color` is a valid HTML hex color string.
///
/// ```
/// use tint_core::is_valid_html;
///
/// assert!(is_valid_html("#55AAFF20"));
/// assert!(is_valid_html("55AAFF"));
/// assert!(is_valid_html("#F2C"));
/// assert!(!is_valid_html("#55aaFF5"));
/// ```
pub fn is_valid_html(color: &str) -> bool {
    validate(color).is_ok()
}

/// Strips the optional `#` and checks length and digits.
fn validate(color: &str) -> Result<&[u8]> {
    if color.is_empty() {
        return Err(Error::Empty);
    }
    let digits = color.strip_prefix('#').unwrap_or(color);
    if !matches!(digits.len(), 3 | 4 | 6 | 8) {
        return Err(Error::invalid_length(digits.len()));
    }
    if let Some((index, found)) = digits
        .char_indices()
        .find(|&(_, c)| !c.is_ascii() || hex_digit(c as u8) < 0)
    {
        return Err(Error::invalid_digit(index, found));
    }
    Ok(digits.as_bytes())
}

/// Quantizes a channel to 0..=255 for hex output.
///
/// Exact half steps resolve downward (0.5 -> 127), and the result is
/// clamped, so HDR and negative channels saturate.
#[inline]
fn html_byte(v: f32) -> u32 {
    ((v * 255.0) - 0.5).ceil().clamp(0.0, 255.0) as u32
}

fn push_hex(out: &mut String, v: f32) {
    let byte = html_byte(v);
    for shift in [4, 0] {
        let nibble = (byte >> shift) & 0xF;
        let digit = if nibble < 10 {
            b'0' + nibble as u8
        } else {
            b'a' + (nibble - 10) as u8
        };
        out.push(char::from(digit));
    }
}

impl Color {
    /// Parses an HTML hex color string, returning an error for bad input.
    ///
    /// ```
    /// use tint_core::Color;
    ///
    /// let green = Color::try_from_html("#0F0").unwrap();
    /// assert_eq!(green, Color::new(0.0, 1.0, 0.0, 1.0));
    /// assert!(Color::try_from_html("#12345").is_err());
    /// ```
    pub fn try_from_html(rgba: &str) -> Result<Self> {
        let digits = validate(rgba)?;
        let shorthand = digits.len() < 5;
        let has_alpha = matches!(digits.len(), 4 | 8);

        let channel = |i: usize| -> f64 {
            if shorthand {
                f64::from(hex_digit(digits[i])) / 15.0
            } else {
                f64::from(hex_digit(digits[2 * i]) * 16 + hex_digit(digits[2 * i + 1])) / 255.0
            }
        };
        let a = if has_alpha { channel(3) } else { 1.0 };
        Ok(Self::new(channel(0), channel(1), channel(2), a))
    }

    /// Parses an HTML hex color string.
    ///
    /// Invalid input (empty, wrong length, non-hex characters) yields
    /// [`Color::TRANSPARENT`]. Use [`Color::try_from_html`] to see why.
    ///
    /// ```
    /// use tint_core::Color;
    ///
    /// assert_eq!(Color::from_html("#0000ff"), Color::new(0.0, 0.0, 1.0, 1.0));
    /// assert_eq!(Color::from_html("nope"), Color::TRANSPARENT);
    /// ```
    pub fn from_html(rgba: &str) -> Self {
        match Self::try_from_html(rgba) {
            Ok(color) => color,
            Err(err) => {
                debug!(input = rgba, error = %err, "invalid HTML color, using transparent");
                Self::TRANSPARENT
            }
        }
    }

    /// Same as [`is_valid_html`].
    #[inline]
    pub fn is_valid_html(color: &str) -> bool {
        is_valid_html(color)
    }

    /// Formats as lowercase hex without the `#` prefix: `rrggbb`, or
    /// `rrggbbaa` when `with_alpha` is set.
    ///
    /// ```
    /// use tint_core::Color;
    ///
    /// let white = Color::new(1.0, 1.0, 1.0, 0.5);
    /// assert_eq!(white.to_html(true), "ffffff7f");
    /// assert_eq!(white.to_html(false), "ffffff");
    /// ```
    pub fn to_html(self, with_alpha: bool) -> String {
        let mut txt = String::with_capacity(8);
        push_hex(&mut txt, self.r);
        push_hex(&mut txt, self.g);
        push_hex(&mut txt, self.b);
        if with_alpha {
            push_hex(&mut txt, self.a);
        }
        txt
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_from_html(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hex_digit_rejects_neighbours() {
        for c in [b'/', b':', b'@', b'G', b'`', b'g', b' ', b'#'] {
            assert_eq!(hex_digit(c), -1, "{:?}", c as char);
        }
    }

    #[test]
    fn test_valid_lengths() {
        for s in ["abc", "#abc", "abcd", "#abcdef", "abcdef12", "#ABCDEF12"] {
            assert!(is_valid_html(s), "{s}");
        }
        for s in ["", "#", "ab", "#abcde", "abcdefg", "#abcdef123", "##abc"] {
            assert!(!is_valid_html(s), "{s}");
        }
    }

    #[test]
    fn test_invalid_digit_reports_offset() {
        let err = Color::try_from_html("#12z456").unwrap_err();
        assert_eq!(err, Error::invalid_digit(2, 'z'));
        let err = Color::try_from_html("ab\u{e9}cd").unwrap_err();
        assert_eq!(err, Error::invalid_digit(2, '\u{e9}'));
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(Color::try_from_html(""), Err(Error::Empty));
        assert_eq!(Color::try_from_html("#"), Err(Error::invalid_length(0)));
        assert_eq!(Color::try_from_html("#AABBC"), Err(Error::invalid_length(5)));
    }

    #[test]
    fn test_shorthand_divides_by_15() {
        let c = Color::from_html("#8ac");
        assert_relative_eq!(c.r, (8.0 / 15.0) as f32);
        assert_relative_eq!(c.g, (10.0 / 15.0) as f32);
        assert_relative_eq!(c.b, (12.0 / 15.0) as f32);
        assert_eq!(c.a, 1.0);

        let c = Color::from_html("1234");
        assert_relative_eq!(c.a, (4.0 / 15.0) as f32);
    }

    #[test]
    fn test_full_pairs_divide_by_255() {
        let c = Color::from_html("#FF800040");
        assert_eq!(c.r, 1.0);
        assert_relative_eq!(c.g, (128.0 / 255.0) as f32);
        assert_eq!(c.b, 0.0);
        assert_relative_eq!(c.a, (64.0 / 255.0) as f32);
    }

    #[test]
    fn test_lenient_fallback() {
        assert_eq!(Color::from_html(""), Color::TRANSPARENT);
        assert_eq!(Color::from_html("#ggg"), Color::TRANSPARENT);
        assert_eq!(Color::from_html("#12345"), Color::TRANSPARENT);
    }

    #[test]
    fn test_to_html_clamps() {
        let c = Color::new(2.0, -1.0, 0.2, 1.0);
        assert_eq!(c.to_html(true), "ff0033ff");
        assert_eq!(Color::new(f64::NAN, 0.0, 0.0, 1.0).to_html(false), "000000");
    }

    #[test]
    fn test_to_html_half_step() {
        // 0.5 * 255 = 127.5 resolves to 0x7f; anything above the tie rounds up.
        assert_eq!(Color::new(0.5, 0.502, 0.498, 1.0).to_html(false), "7f807f");
    }

    #[test]
    fn test_from_str() {
        let c: Color = "#336699".parse().unwrap();
        assert_eq!(c.to_html(false), "336699");
        assert!("xyz".parse::<Color>().is_err());
    }

    #[test]
    fn test_display_prefixes_hash() {
        assert_eq!(Color::rgb8(0x12, 0xab, 0xef).to_string(), "#12abefff");
    }
}
