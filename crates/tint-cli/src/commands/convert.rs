//! Encoding conversion command
//!
//! Packed integers print as zero-padded hex; JSON output also carries the
//! raw integer (signed for the 64-bit forms).

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use serde_json::{Value, json};
use tint_core::Color;

use crate::{ConvertArgs, Format};

/// A converted value, ready to print.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Converted {
    Text(String),
    Packed32(u32),
    Packed64(i64),
    Hsv { h: f64, s: f64, v: f64 },
    Color(Color),
}

pub fn convert(color: Color, to: Format) -> Converted {
    match to {
        Format::Html => Converted::Text(color.to_html(false)),
        Format::HtmlAlpha => Converted::Text(color.to_html(true)),
        Format::Rgba32 => Converted::Packed32(color.to_rgba32()),
        Format::Argb32 => Converted::Packed32(color.to_argb32()),
        Format::Abgr32 => Converted::Packed32(color.to_abgr32()),
        Format::Rgba64 => Converted::Packed64(color.to_rgba64()),
        Format::Argb64 => Converted::Packed64(color.to_argb64()),
        Format::Abgr64 => Converted::Packed64(color.to_abgr64()),
        Format::Rgbe9995 => Converted::Packed32(color.to_rgbe9995()),
        Format::Hsv => {
            let (h, s, v) = color.to_hsv();
            Converted::Hsv { h, s, v }
        }
        Format::Linear => Converted::Color(color.to_linear()),
        Format::Srgb => Converted::Color(color.to_srgb()),
    }
}

impl Converted {
    pub fn text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Packed32(v) => format!("0x{v:08x}"),
            Self::Packed64(v) => format!("0x{:016x}", *v as u64),
            Self::Hsv { h, s, v } => format!("h={h:.6} s={s:.6} v={v:.6}"),
            Self::Color(c) => super::ColorReport::new(*c).text(),
        }
    }

    pub fn to_json(&self, to: Format) -> Value {
        let format = to
            .to_possible_value()
            .map(|v| v.get_name().to_owned())
            .unwrap_or_default();
        match self {
            Self::Packed32(_) | Self::Packed64(_) => {
                json!({ "format": format, "value": self, "hex": self.text() })
            }
            Self::Color(c) => json!({ "format": format, "value": super::ColorReport::new(*c) }),
            _ => json!({ "format": format, "value": self }),
        }
    }
}

pub fn run(args: ConvertArgs, json: bool) -> Result<()> {
    let color = super::resolve_color(&args.color)?;
    let converted = convert(color, args.to);
    super::emit(&converted.to_json(args.to), || converted.text(), json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(color: Color, to: Format) -> String {
        convert(color, to).text()
    }

    #[test]
    fn test_html() {
        let c = Color::new(1.0, 1.0, 1.0, 0.5);
        assert_eq!(text(c, Format::Html), "ffffff");
        assert_eq!(text(c, Format::HtmlAlpha), "ffffff7f");
    }

    #[test]
    fn test_packed_hex() {
        let c = Color::rgba8(0x11, 0x22, 0x33, 0x44);
        assert_eq!(text(c, Format::Rgba32), "0x11223344");
        assert_eq!(text(c, Format::Argb32), "0x44112233");
        assert_eq!(text(c, Format::Abgr32), "0x44332211");
        assert_eq!(text(Color::WHITE, Format::Rgba64), "0xffffffffffffffff");
        assert_eq!(text(Color::WHITE, Format::Rgbe9995), "0x84020100");
    }

    #[test]
    fn test_packed_json_keeps_sign() {
        let v = convert(Color::new(1.0, 0.5, 0.2, 1.0), Format::Rgba64).to_json(Format::Rgba64);
        assert_eq!(v["format"], "rgba64");
        assert_eq!(v["value"], -140736629309441_i64);
        assert_eq!(v["hex"], "0xffff80003333ffff");
    }

    #[test]
    fn test_hsv() {
        let converted = convert(Color::new(0.0, 0.0, 1.0, 1.0), Format::Hsv);
        assert_eq!(converted.text(), "h=0.666667 s=1.000000 v=1.000000");
        let v = converted.to_json(Format::Hsv);
        assert_eq!(v["value"]["s"], 1.0);
    }

    #[test]
    fn test_gamma() {
        let c = Color::new(0.5, 0.5, 0.5, 0.25);
        match convert(c, Format::Linear) {
            Converted::Color(lin) => {
                assert!(lin.r < 0.5);
                assert_eq!(lin.a, 0.25);
            }
            other => panic!("unexpected {other:?}"),
        }
        let v = convert(c, Format::Srgb).to_json(Format::Srgb);
        assert_eq!(v["format"], "srgb");
        assert_eq!(v["value"]["a"], 0.25);
    }

    #[test]
    fn test_format_names_match_flags() {
        let v = convert(Color::WHITE, Format::HtmlAlpha).to_json(Format::HtmlAlpha);
        assert_eq!(v["format"], "html-alpha");
        assert_eq!(v["value"], "ffffffff");
    }
}
