//! `tint hsv`

use anyhow::{Result, ensure};
use tint_core::Color;

use crate::HsvArgs;

pub fn run(args: HsvArgs, json: bool) -> Result<()> {
    ensure!(
        args.h.is_finite() && args.s.is_finite() && args.v.is_finite(),
        "hue, saturation and value must be finite"
    );
    let color = Color::from_hsva(args.h, args.s, args.v, args.alpha);
    super::print_color(color, json)
}
