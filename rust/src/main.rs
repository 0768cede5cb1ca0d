//! Command-line front end. With no subcommand it prints the demonstration
//! rotation; the other commands rotate ad-hoc input or run batches of cases.
//!
//! Logging goes through `env_logger`, so `RUST_LOG=debug rotations batch`
//! shows per-case progress on stderr.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::debug;
use rotations_rs::batch::{
    run_peak_batch, run_rotation_batch_with, BatchError, BatchReport, RotationLayout,
};
use rotations_rs::config::{load_or_default, ConfigError, RotationConfig};
use rotations_rs::render::render_line;
use rotations_rs::rotation::{peak_rotation_shifts, rotate_signed, RotationError};
use thiserror::Error;

#[derive(Debug, Error)]
enum AppError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("batch error: {0}")]
    Batch(#[from] BatchError),
    #[error("rotation error: {0}")]
    Rotation(#[from] RotationError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Parser)]
#[command(name = "rotations")]
#[command(about = "Rotate integer sequences to the right with wraparound")]
#[command(version)]
struct Cli {
    /// JSON config file (falls back to $ROTATIONS_CONFIG, then defaults).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the demonstration rotation of [1, 2, 3, 4, 5] by 4.
    Demo,

    /// Rotate the given values.
    #[command(allow_negative_numbers = true)]
    Rotate {
        /// Rotation offset; negative values follow the configured policy.
        #[arg(short, long)]
        offset: i64,

        /// Values to rotate.
        values: Vec<i64>,
    },

    /// Run judge-style cases from a file or stdin.
    Batch {
        /// Input file (stdin when omitted).
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Treat cases as peak-rotation cases instead of plain rotations.
        #[arg(long)]
        peak: bool,

        /// Rotation cases give only `k`, without the array length.
        #[arg(long, conflicts_with = "peak")]
        offset_only: bool,

        /// Emit the report as JSON instead of one line per case.
        #[arg(long)]
        json: bool,
    },

    /// Count right shifts until the largest rotation is seen for the K-th time.
    Peak {
        /// Which sighting of the largest rotation to stop at (1-based).
        #[arg(short, long, default_value = "1")]
        occurrence: u64,

        /// Sequence to shift, e.g. 1010.
        sequence: String,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("rotations failed: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = load_or_default(cli.config.as_deref())?;

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => println!("{}", rotations_rs::demo_line()),
        Commands::Rotate { offset, values } => {
            let rotated = rotate_signed(&values, offset, config.negative_offset)?;
            println!("{}", render_line(&rotated, &config.separator));
        }
        Commands::Batch {
            input,
            peak,
            offset_only,
            json,
        } => {
            let text = read_input(input)?;
            let layout = if offset_only {
                RotationLayout::OffsetOnly
            } else {
                RotationLayout::WithLength
            };
            let report = run_batch(&text, peak, layout, &config)?;
            if json {
                println!("{}", report.to_json()?);
            } else {
                for line in report.lines() {
                    println!("{line}");
                }
            }
        }
        Commands::Peak {
            occurrence,
            sequence,
        } => {
            let chars: Vec<char> = sequence.chars().collect();
            println!("{}", peak_rotation_shifts(&chars, occurrence)?);
        }
    }

    Ok(())
}

fn run_batch(
    text: &str,
    peak: bool,
    layout: RotationLayout,
    config: &RotationConfig,
) -> Result<BatchReport, BatchError> {
    if peak {
        run_peak_batch(text)
    } else {
        run_rotation_batch_with(text, layout, config)
    }
}

fn read_input(path: Option<PathBuf>) -> Result<String, io::Error> {
    match path {
        Some(path) => {
            debug!("reading cases from {}", path.display());
            fs::read_to_string(path)
        }
        None => {
            debug!("reading cases from stdin");
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
