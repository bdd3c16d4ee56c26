//! tint - color conversion and manipulation CLI
//!
//! Parses HTML hex strings and X11 names, converts between packed and
//! float encodings, and exposes the colorimetric operations of `tint-core`.

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "tint")]
#[command(author, version, about = "Color conversion and manipulation")]
#[command(long_about = "
Parse, convert and combine RGBA colors.

COLOR arguments accept an HTML hex string (#rgb, #rgba, #rrggbb,
#rrggbbaa, the # is optional) or an X11 color name.

Examples:
  tint parse '#ff8033'                  # Show channels
  tint parse 'dark slate gray' --json   # Named color as JSON
  tint convert coral --to rgba32        # Pack into 0xRRGGBBAA
  tint convert 808080 --to linear       # sRGB to linear light
  tint blend 00ff0080 ff000080          # Composite over
  tint mix red aqua --weight 0.25
  tint hsv 0.6 0.5 1.0 --alpha 0.5
  tint named --filter blue
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Machine-readable output (JSON)
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a color and print its channels
    #[command(visible_alias = "p")]
    Parse(ParseArgs),

    /// Convert a color to another encoding
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Composite OVER on top of BASE
    Blend(BlendArgs),

    /// Interpolate between two colors
    Mix(MixArgs),

    /// Build a color from hue, saturation and value
    Hsv(HsvArgs),

    /// Move a color toward white
    Lighten(AdjustArgs),

    /// Move a color toward black
    Darken(AdjustArgs),

    /// Invert RGB, keeping alpha
    Invert(ParseArgs),

    /// List X11 color names
    #[command(visible_alias = "ls")]
    Named(NamedArgs),
}

#[derive(Args)]
struct ParseArgs {
    /// Hex string or X11 name
    color: String,
}

/// Target encoding for `convert`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// rrggbb
    Html,
    /// rrggbbaa
    HtmlAlpha,
    Rgba32,
    Argb32,
    Abgr32,
    Rgba64,
    Argb64,
    Abgr64,
    /// Shared-exponent HDR, alpha dropped
    Rgbe9995,
    /// Hue, saturation, value
    Hsv,
    /// sRGB to linear light
    Linear,
    /// Linear light to sRGB
    Srgb,
}

#[derive(Args)]
struct ConvertArgs {
    /// Hex string or X11 name
    color: String,

    /// Output encoding
    #[arg(short, long, value_enum)]
    to: Format,
}

#[derive(Args)]
struct BlendArgs {
    /// Background color
    base: String,

    /// Foreground color
    over: String,
}

#[derive(Args)]
struct MixArgs {
    from: String,

    to: String,

    /// Interpolation weight (0 = FROM, 1 = TO, not clamped)
    #[arg(short, long, default_value = "0.5", allow_negative_numbers = true)]
    weight: f64,
}

#[derive(Args)]
struct HsvArgs {
    /// Hue ratio, wraps every 1.0
    #[arg(allow_negative_numbers = true)]
    h: f64,

    /// Saturation ratio
    s: f64,

    /// Value ratio
    v: f64,

    #[arg(short, long, default_value = "1.0")]
    alpha: f64,
}

#[derive(Args)]
struct AdjustArgs {
    color: String,

    /// Ratio, typically 0 to 1
    #[arg(short, long, default_value = "0.1", allow_negative_numbers = true)]
    amount: f64,
}

#[derive(Args)]
struct NamedArgs {
    /// Only names containing this text
    #[arg(short, long)]
    filter: Option<String>,
}

/// Filter from `RUST_LOG`, falling back to the `-v` count.
fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let json = cli.json;
    match cli.command {
        Commands::Parse(args) => commands::parse::run(args, json),
        Commands::Convert(args) => commands::convert::run(args, json),
        Commands::Blend(args) => commands::combine::run_blend(args, json),
        Commands::Mix(args) => commands::combine::run_mix(args, json),
        Commands::Hsv(args) => commands::hsv::run(args, json),
        Commands::Lighten(args) => commands::adjust::run_lighten(args, json),
        Commands::Darken(args) => commands::adjust::run_darken(args, json),
        Commands::Invert(args) => commands::adjust::run_invert(args, json),
        Commands::Named(args) => commands::named::run(args, json),
    }
}
