//! CLI frontend for the sixdeg actor connection game.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "sixdeg",
    about = "sixdeg: connect two actors through the movies they share",
    version,
    propagate_version = true
)]
struct Cli {
    /// JSON snapshot of the cast graph
    #[arg(short, long, global = true, default_value = "graph.json")]
    graph: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the shortest connection between two actors
    Connect {
        /// Starting actor (case-insensitive)
        from: String,

        /// Target actor (case-insensitive)
        to: String,

        /// Print raw ids instead of names
        #[arg(long)]
        ids: bool,
    },

    /// Check an alternating actor, movie, actor, ... path
    Validate {
        /// Names and titles in path order
        #[arg(required = true, num_args = 1..)]
        path: Vec<String>,
    },

    /// Play an interactive game from one actor to another
    Play {
        /// Starting actor (case-insensitive)
        from: String,

        /// Target actor (case-insensitive)
        to: String,

        /// RNG seed for reproducible menus
        #[arg(short, long)]
        seed: Option<u64>,

        /// Options shown per turn
        #[arg(long, default_value = "7")]
        menu_size: usize,

        /// Minimum similarity for write-ins (0.0-1.0)
        #[arg(long, default_value = "0.6")]
        cutoff: f64,
    },

    /// Show an actor and their filmography
    Show {
        /// Actor name (case-insensitive)
        name: String,
    },

    /// Print record counts of the graph
    Stats,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Connect { from, to, ids } => commands::connect::run(&cli.graph, &from, &to, ids),
        Commands::Validate { path } => commands::validate::run(&cli.graph, &path),
        Commands::Play {
            from,
            to,
            seed,
            menu_size,
            cutoff,
        } => commands::play::run(&cli.graph, &from, &to, seed, menu_size, cutoff),
        Commands::Show { name } => commands::show::run(&cli.graph, &name),
        Commands::Stats => commands::stats::run(&cli.graph),
    };

    if let Err(e) = result {
        eprintln!("{e:?}");
        process::exit(1);
    }
}

/// Log to stderr, filtered by `SIXDEG_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("SIXDEG_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
