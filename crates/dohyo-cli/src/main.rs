//! CLI frontend for the dohyo bout engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "dohyo",
    about = "Dohyo - deterministic sumo bout resolution",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a single bout between two rikishi profiles
    Bout {
        /// JSON profile of the east rikishi
        east: PathBuf,

        /// JSON profile of the west rikishi
        west: PathBuf,

        /// Seed for the generated fortune stream
        #[arg(short, long, default_value_t = 42, conflicts_with = "fortune")]
        seed: u64,

        /// Explicit fortune values, comma separated (e.g. 3,11,20,0,7)
        #[arg(short, long, allow_hyphen_values = true)]
        fortune: Option<String>,

        /// Print the bout context as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a generated fortune stream
    Fortune {
        /// RNG seed
        #[arg(short, long, default_value_t = 42)]
        seed: u64,

        /// Number of values (at least five)
        #[arg(short, long, default_value_t = 5)]
        count: usize,
    },

    /// Resolve every bout on a day's card
    Card {
        /// JSON array of {"east": profile, "west": profile}
        card: PathBuf,

        /// Base seed; bout i uses seed + i
        #[arg(short, long, default_value_t = 42)]
        seed: u64,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("dohyo_engine=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Bout {
            east,
            west,
            seed,
            fortune,
            json,
        } => commands::bout::run(&east, &west, seed, fortune.as_deref(), json),
        Commands::Fortune { seed, count } => commands::fortune::run(seed, count),
        Commands::Card { card, seed, json } => commands::card::run(&card, seed, json),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
