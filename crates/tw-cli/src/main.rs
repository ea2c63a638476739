//! CLI frontend for the Talewright interactive fiction engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "tw",
    about = "Talewright, an engine for text adventures",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log filter, e.g. `debug` or `tw_fiction=trace` (default: $RUST_LOG, else warn)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a story interactively
    Play {
        /// Story file in JSON format (default: the bundled Action Castle)
        #[arg(short, long)]
        story: Option<PathBuf>,

        /// Do not list item commands in location descriptions
        #[arg(long)]
        hide_commands: bool,
    },

    /// Show how the locations of a story are connected
    Graph {
        /// Output format: text, dot
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Story file in JSON format
        #[arg(short, long)]
        story: Option<PathBuf>,
    },

    /// List the locations of a story
    List {
        /// Story file in JSON format
        #[arg(short, long)]
        story: Option<PathBuf>,
    },

    /// Look for authoring mistakes in a story
    Check {
        /// Story file in JSON format
        #[arg(short, long)]
        story: Option<PathBuf>,
    },

    /// Write a story as JSON
    Export {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Story file in JSON format
        #[arg(short, long)]
        story: Option<PathBuf>,
    },
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let result = match cli.command {
        Commands::Play {
            story,
            hide_commands,
        } => commands::play::run(story.as_deref(), hide_commands),
        Commands::Graph { format, story } => commands::graph::run(story.as_deref(), &format),
        Commands::List { story } => commands::list::run(story.as_deref()),
        Commands::Check { story } => commands::check::run(story.as_deref()),
        Commands::Export { output, story } => {
            commands::export::run(story.as_deref(), output.as_deref())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
