use std::path::PathBuf;

use anyhow::Context;
use bgclear::{ClearOptions, Mode, DEFAULT_THRESHOLD};
use clap::{ArgAction, Parser, Subcommand};

/// Make near-white image backgrounds transparent
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    /// More log output (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Make the background transparent
    #[command(visible_alias = "c")]
    Clear {
        /// Source image
        #[arg(value_hint = clap::ValueHint::FilePath)]
        input: PathBuf,

        /// Destination (.png or .webp; no extension writes PNG)
        #[arg(value_hint = clap::ValueHint::FilePath)]
        output: PathBuf,

        /// R, G and B must all be above this value for a pixel to count as background
        #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: u8,

        /// Which background pixels to clear
        #[arg(short, long, value_enum, default_value_t = Mode::Flood)]
        mode: Mode,
    },

    /// Resize with nearest-neighbour sampling
    #[command(visible_alias = "r")]
    Rescale {
        /// Source image
        #[arg(value_hint = clap::ValueHint::FilePath)]
        input: PathBuf,

        /// Destination image
        #[arg(value_hint = clap::ValueHint::FilePath)]
        output: PathBuf,

        /// Target width in pixels
        #[arg(long)]
        width: u32,

        /// Target height in pixels
        #[arg(long)]
        height: u32,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Stderr)
        .init();

    match cli.command {
        Commands::Clear {
            input,
            output,
            threshold,
            mode,
        } => {
            let options = ClearOptions::new(threshold).with_mode(mode);
            bgclear::clear_background_file(&input, &output, &options)
                .with_context(|| format!("could not clear background of {}", input.display()))?;
        }
        Commands::Rescale {
            input,
            output,
            width,
            height,
        } => {
            bgclear::rescale_file(&input, &output, width, height)
                .with_context(|| format!("could not rescale {}", input.display()))?;
        }
    }

    Ok(())
}
