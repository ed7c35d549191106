mod cli;
mod commands;
mod dictionaries;
mod dictionary;
mod imagen;
mod localize;
mod merge;
mod model;
mod report;
mod residual;
mod schema;
mod script;
mod store;
mod synth;
mod util;
mod visit;

use anyhow::Result;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};

fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    if let Err(err) = run() {
        error!(error = %err, "command failed");
        for cause in err.chain().skip(1) {
            error!(cause = %cause, "caused by");
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Migrate(args) => commands::migrate::run(args),
        Commands::Merge(args) => commands::merge::run(args),
        Commands::Dedup(args) => commands::dedup::run(args),
        Commands::Normalize(args) => commands::normalize::run(args),
        Commands::Clean(args) => commands::clean::run(args),
        Commands::Localize(args) => commands::localize::run(args),
        Commands::Synthesize(args) => commands::synthesize::run(args),
        Commands::ExtractReport(args) => commands::extract_report::run(args),
        Commands::Scan(args) => commands::scan::run(args),
        Commands::Headers(args) => commands::headers::run(args),
        Commands::Status(args) => commands::status::run(args),
        Commands::Gallery(args) => commands::gallery::run(args),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
