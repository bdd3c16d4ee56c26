//! `tint parse`

use anyhow::Result;

use crate::ParseArgs;

pub fn run(args: ParseArgs, json: bool) -> Result<()> {
    let color = super::resolve_color(&args.color)?;
    super::print_color(color, json)
}
