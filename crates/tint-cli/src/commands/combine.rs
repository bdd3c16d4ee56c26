//! `tint blend` and `tint mix`

use anyhow::Result;
use tracing::info;

use crate::{BlendArgs, MixArgs};

pub fn run_blend(args: BlendArgs, json: bool) -> Result<()> {
    let base = super::resolve_color(&args.base)?;
    let over = super::resolve_color(&args.over)?;
    info!(%base, %over, "blend");
    super::print_color(base.blend(over), json)
}

pub fn run_mix(args: MixArgs, json: bool) -> Result<()> {
    let from = super::resolve_color(&args.from)?;
    let to = super::resolve_color(&args.to)?;
    info!(%from, %to, weight = args.weight, "mix");
    super::print_color(from.lerp(to, args.weight), json)
}
