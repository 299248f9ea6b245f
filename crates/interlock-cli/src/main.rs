//! interlock - seamless interlocking tile renderer
//!
//! Trims a sprite to its opaque bounds and repeats it over a selection,
//! blending the overlapping margins of neighbouring copies.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "interlock")]
#[command(author, version, about = "Seamless interlocking tile renderer")]
#[command(long_about = "
Repeats the opaque part of a sprite over an image, overlapping neighbouring
copies by a negative margin and blending the overlap so edges interlock.

Examples:
  interlock tile sprite.png -o pattern.png --margin 6
  interlock tile sprite.png -o pattern.png --unlinked --hmargin 8 --vmargin 2
  interlock tile sprite.png -o pattern.png --position -1,-1 --selection 0,0,512,256
  interlock trim sprite.png -o tile.png
  interlock plan sprite.png --margin 4
  interlock batch -i 'sprites/*.png' -o out/ --margin 3
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the interlocking tile pattern
    #[command(visible_alias = "t")]
    Tile(TileArgs),

    /// Write the trimmed tile
    Trim(TrimArgs),

    /// Print the repeat geometry without rendering
    #[command(visible_alias = "p")]
    Plan(PlanArgs),

    /// Tile every image matching a glob pattern
    Batch(BatchArgs),
}

/// Parameters shared by every command that plans a tiling.
#[derive(Args, Clone, Debug)]
struct TilingArgs {
    /// Negative margin for both axes
    #[arg(short, long, conflicts_with_all = ["hmargin", "vmargin"])]
    margin: Option<u32>,

    /// Horizontal negative margin
    #[arg(long)]
    hmargin: Option<u32>,

    /// Vertical negative margin
    #[arg(long)]
    vmargin: Option<u32>,

    /// Allow different horizontal and vertical margins
    #[arg(long)]
    unlinked: bool,

    /// Sheet position X,Y, each in [-1, 1] (0,0 = centered)
    #[arg(short, long, value_parser = commands::parse_position, allow_hyphen_values = true)]
    position: Option<(f64, f64)>,

    /// Selection X,Y,W,H (default: whole image)
    #[arg(short, long, value_parser = commands::parse_rect)]
    selection: Option<interlock_core::Rect>,
}

#[derive(Args)]
struct TileArgs {
    /// Input sprite
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    #[command(flatten)]
    tiling: TilingArgs,

    /// Edge length of the render regions
    #[arg(long, default_value = "256")]
    region_size: u32,

    /// Render regions one after another instead of in parallel
    #[arg(long)]
    sequential: bool,
}

#[derive(Args)]
struct TrimArgs {
    /// Input sprite
    input: PathBuf,

    /// Output tile
    #[arg(short, long)]
    output: PathBuf,

    /// Region to trim X,Y,W,H (default: whole image)
    #[arg(short, long, value_parser = commands::parse_rect)]
    selection: Option<interlock_core::Rect>,
}

#[derive(Args)]
struct PlanArgs {
    /// Input sprite
    input: PathBuf,

    #[command(flatten)]
    tiling: TilingArgs,
}

#[derive(Args)]
struct BatchArgs {
    /// Input pattern (glob)
    #[arg(short, long)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: PathBuf,

    #[command(flatten)]
    tiling: TilingArgs,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Tile(args) => commands::tile::run(args, cli.verbose),
        Commands::Trim(args) => commands::trim::run(args, cli.verbose),
        Commands::Plan(args) => commands::plan::run(args),
        Commands::Batch(args) => commands::batch::run(args, cli.verbose),
    }
}
