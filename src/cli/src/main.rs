#![warn(clippy::pedantic)]

mod config;
mod play;
mod render;

use std::{
    io::{self, BufRead},
    path::PathBuf,
};

use clap::{ArgAction, Parser, Subcommand};
use env_logger::TimestampPrecision;
use log::{LevelFilter, info};
use owo_colors::OwoColorize;
use tesseract_core::{MOVE_TABLE, PuzzleController};

use crate::{config::Config, play::play, render::Renderer};

/// Plays a four-dimensional twisty puzzle in the terminal
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The configuration file to use, in TOML format. Defaults to
    /// `tesseract.toml` when that file exists.
    #[arg(long, short = 'c', global = true, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively, reading one gesture per line from stdin.
    Play,
    /// Apply moves to a solved puzzle and print the result.
    Apply {
        /// The moves to apply, e.g. "X 0 Y".
        moves: Vec<String>,
    },
    /// List every move along with its order.
    Moves,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .parse_default_env()
        .init();

    let config = Config::load(cli.config.as_deref())?;
    let renderer = Renderer::new(config.hidden_cells()?, config.glyph.clone());
    let mut rng = match config.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    let mut controller = PuzzleController::new();

    match cli.command {
        Commands::Play => {
            info!("Starting interactive session");
            let stdin = io::stdin();
            play(
                stdin.lock().lines(),
                &mut io::stdout(),
                &mut controller,
                &renderer,
                &mut rng,
            )?;
        }
        Commands::Apply { moves } => {
            controller.perform_sequence(&moves.join(" "))?;
            print!("{}", renderer.render(controller.state()));
        }
        Commands::Moves => {
            for move_ in MOVE_TABLE.moves() {
                println!(
                    "{}  {:<8} order {}  {} cycles",
                    move_.name().bold(),
                    format!("{:?}", move_.family()),
                    move_.order(),
                    move_.permutation().cycles().len()
                );
            }
        }
    }

    Ok(())
}
