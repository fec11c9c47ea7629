//! gradebook CLI — interactive assessment record catalog.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "gradebook", version, about = "Interactive assessment record catalog")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read one record of each kind from stdin and list them, newest first
    Run {
        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format: text, json, table
        #[arg(long)]
        format: Option<String>,

        /// Malformed score handling: reject, reprompt, zero
        #[arg(long)]
        score_policy: Option<String>,
    },

    /// List record kinds and their captions
    Kinds,

    /// Create a starter gradebook.toml
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gradebook=warn".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            config,
            format,
            score_policy,
        } => commands::run::execute(config, format, score_policy),
        Commands::Kinds => commands::kinds::execute(),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
