//! Single-color adjustments: lighten, darken, invert.

use anyhow::Result;
use tracing::info;

use crate::{AdjustArgs, ParseArgs};

pub fn run_lighten(args: AdjustArgs, json: bool) -> Result<()> {
    let color = super::resolve_color(&args.color)?;
    info!(%color, amount = args.amount, "lighten");
    super::print_color(color.lightened(args.amount), json)
}

pub fn run_darken(args: AdjustArgs, json: bool) -> Result<()> {
    let color = super::resolve_color(&args.color)?;
    info!(%color, amount = args.amount, "darken");
    super::print_color(color.darkened(args.amount), json)
}

pub fn run_invert(args: ParseArgs, json: bool) -> Result<()> {
    let color = super::resolve_color(&args.color)?;
    super::print_color(color.inverted(), json)
}
