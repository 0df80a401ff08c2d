//! Montana CLI - render the game's procedural assets to files
//!
//! Every sprite and sound is computed from code; this binary writes them out
//! for inspection, diffing and packaging.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use montana_cli::config::{self, Overrides};
use montana_cli::{commands, logging, report};

/// Montana - procedural sprite and sound synthesis
#[derive(Parser)]
#[command(name = "montana")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to a JSON config file (sample_rate, viewport, seed)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the configured sample rate in Hz
    #[arg(long, global = true)]
    sample_rate: Option<u32>,

    /// Override the configured viewport, e.g. 800x600
    #[arg(long, global = true, value_parser = config::parse_viewport)]
    viewport: Option<[u32; 2]>,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render one sprite as PNG or raw RGBA8
    Sprite {
        /// Sprite kind, e.g. alan, wolf, background_static
        kind: String,

        /// Animation frame (animated kinds only)
        #[arg(short, long, default_value_t = 0)]
        frame: u32,

        /// Mirror horizontally
        #[arg(long)]
        flip: bool,

        /// Output file (.png or .rgba)
        #[arg(short, long)]
        out: PathBuf,
    },

    /// Render one sound effect as WAV
    Sound {
        /// Sound name, e.g. footstep, ambient_low
        name: String,

        /// Seed for the ambient sounds (default: config seed)
        #[arg(short, long)]
        seed: Option<u32>,

        /// Length in seconds (default: the sound's own length)
        #[arg(short, long)]
        duration: Option<f64>,

        /// Output WAV file
        #[arg(short, long)]
        out: PathBuf,
    },

    /// Render one UI cue tone as WAV
    Tone {
        /// Cue name: step, joy, scream, puzzle, combat
        cue: String,

        /// Output WAV file
        #[arg(short, long)]
        out: PathBuf,
    },

    /// List every sprite, sound and cue
    List {
        /// Only list sprites in this category (character, item, enemy, background, logo)
        #[arg(long)]
        category: Option<String>,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Render everything into a directory and print a hash report
    Export {
        /// Output directory
        #[arg(short, long)]
        out_dir: PathBuf,

        /// Seed for the ambient sounds (default: config seed)
        #[arg(short, long)]
        seed: Option<u32>,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let overrides = Overrides {
        sample_rate: cli.sample_rate,
        viewport: cli.viewport,
    };
    let result = config::load(cli.config.as_deref(), overrides).and_then(|config| {
        match cli.command {
            Commands::Sprite {
                kind,
                frame,
                flip,
                out,
            } => commands::sprite::run(&config, &kind, frame, flip, &out),
            Commands::Sound {
                name,
                seed,
                duration,
                out,
            } => commands::sound::run(&config, &name, seed, duration, &out),
            Commands::Tone { cue, out } => commands::tone::run(&config, &cue, &out),
            Commands::List { category, json } => {
                commands::list::run(&config, category.as_deref(), json)
            }
            Commands::Export { out_dir, seed, json } => {
                commands::export::run(&config, &out_dir, seed, json)
            }
        }
    });

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", report::error_label(&e).red(), e);
            ExitCode::from(1)
        }
    }
}
