use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use snake_arcade::logger::init_stderr_logger;
use snake_arcade::sound::{DEFAULT_SOUNDS_DIR, write_effects};

/// Writes the eat and crash sound effects as 16-bit mono WAV files.
#[derive(Parser, Debug)]
#[command(name = "create_sounds", version)]
struct Args {
    /// Output directory
    #[arg(long, default_value = DEFAULT_SOUNDS_DIR)]
    out: PathBuf,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let level = if args.verbose { LevelFilter::Info } else { LevelFilter::Warn };
    init_stderr_logger(level).context("failed to initialise logging")?;

    write_effects(&args.out)
        .with_context(|| format!("could not create sounds in {}", args.out.display()))?;
    println!("Sound files created successfully!");
    Ok(())
}
