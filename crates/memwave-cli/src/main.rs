use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod probe;

#[derive(Parser)]
#[command(name = "memwave")]
#[command(about = "Song-library scanner and .memw map tool", version)]
struct Args {
    /// Log filter directive, e.g. `debug` or `memwave_core=trace`
    /// (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan a song library and print the catalog
    Scan {
        /// Library root, one subdirectory per song
        root: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Show the detail view for one cataloged song
    Info {
        /// Library root, one subdirectory per song
        root: PathBuf,
        /// Song directory name
        song: String,
        #[arg(long)]
        json: bool,
    },
    /// Structurally validate a single .memw map file
    Check {
        map: PathBuf,
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut filter = EnvFilter::from_default_env()
        .add_directive("memwave=info".parse()?)
        .add_directive("memwave_core=info".parse()?);
    if let Some(level) = &args.log_level {
        filter = filter.add_directive(level.parse()?);
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match args.command {
        Command::Scan { root, json } => commands::scan::run(&root, json),
        Command::Info { root, song, json } => commands::info::run(&root, &song, json),
        Command::Check { map, json } => commands::check::run(&map, json),
    }
}
