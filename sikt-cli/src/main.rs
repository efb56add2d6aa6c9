//! ## sikt-cli
//! **Command-line front end for the sikt record pipeline**
//!
//! Loads records from JSON files, runs them through the core routines,
//! and prints the result. Settings problems are reported before any
//! record is touched.

use clap::Parser;
use sikt_telemetry::logging::EventLogger;
use sikt_telemetry::metrics::MetricsRecorder;

mod commands;

use commands::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    EventLogger::init();
    let metrics = MetricsRecorder::new();
    let cli = Cli::parse();

    match cli.command {
        Commands::Filter(args) => commands::run_filter(args, &metrics),
        Commands::Process(args) => commands::run_process(args, &metrics),
        Commands::Total(args) => commands::run_total(args),
        Commands::Config(args) => commands::run_config(args),
    }
}
