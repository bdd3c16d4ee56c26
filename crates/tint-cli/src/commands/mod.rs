//! CLI command implementations

pub mod adjust;
pub mod combine;
pub mod convert;
pub mod hsv;
pub mod named;
pub mod parse;

use anyhow::{Result, anyhow};
use serde::Serialize;
use tint_core::Color;
use tracing::debug;

/// Resolves a COLOR argument: HTML hex first, then X11 name.
pub fn resolve_color(arg: &str) -> Result<Color> {
    let hex_err = match Color::try_from_html(arg) {
        Ok(color) => return Ok(color),
        Err(err) => err,
    };
    if let Some(color) = tint_palette::lookup(arg) {
        debug!(name = arg, "resolved X11 name");
        return Ok(color);
    }
    Err(anyhow!(hex_err).context(format!("'{arg}' is neither a hex color nor an X11 name")))
}

/// A color as every command reports it.
#[derive(Debug, Serialize)]
pub struct ColorReport {
    pub html: String,
    #[serde(flatten)]
    pub color: Color,
}

impl ColorReport {
    pub fn new(color: Color) -> Self {
        Self {
            html: color.to_html(true),
            color,
        }
    }

    pub fn text(&self) -> String {
        let c = self.color;
        format!(
            "#{}  r={:.6} g={:.6} b={:.6} a={:.6}",
            self.html, c.r, c.g, c.b, c.a
        )
    }
}

/// Prints `value` as pretty JSON, or `text` otherwise.
pub fn emit<T: Serialize>(value: &T, text: impl FnOnce() -> String, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", text());
    }
    Ok(())
}

pub fn print_color(color: Color, json: bool) -> Result<()> {
    let report = ColorReport::new(color);
    emit(&report, || report.text(), json)
}
