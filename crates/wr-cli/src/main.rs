//! CLI frontend for Wasteland Rider.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wr_engine::config::{DEFAULT_SAVE_FILE, DEFAULT_WORLD_FILE};

#[derive(Parser)]
#[command(
    name = "wr",
    about = "Wasteland Rider: ride from Washington DC to Los Angeles across a ruined America",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// World file (falls back to the built-in world if missing)
    #[arg(short, long, default_value = DEFAULT_WORLD_FILE, global = true)]
    world: PathBuf,

    /// Save file used by the `save` and `load` commands
    #[arg(long, default_value = DEFAULT_SAVE_FILE, global = true)]
    save: PathBuf,

    /// RNG seed for a reproducible ride
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the game (the default when no subcommand is given)
    Play,

    /// Validate the world file and check that the coast can be reached
    Check,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => commands::play::run(&cli.world, &cli.save, cli.seed),
        Commands::Check => commands::check::run(&cli.world),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
