use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use serde_json::{json, Map};
use tracing::info;

use sikt_config::SiktConfig;
use sikt_core::{project_active, records_from_json, total, Accumulator, Record};
use sikt_telemetry::logging::EventLogger;
use sikt_telemetry::metrics::MetricsRecorder;

type CliResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Project the active records out of a JSON record file
    Filter(FilterArgs),
    /// Run records through an accumulator and print the processed output
    Process(ProcessArgs),
    /// Sum the positive prices in a JSON record file
    Total(TotalArgs),
    /// Load and validate settings
    Config(ConfigArgs),
}

#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// JSON file containing an array of records
    #[arg(short, long)]
    pub input: PathBuf,
    /// Pretty-print the output
    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ProcessArgs {
    /// JSON file containing an array of records
    #[arg(short, long)]
    pub input: PathBuf,
    /// Pretty-print the output
    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}

#[derive(Args, Debug, Clone)]
pub struct TotalArgs {
    /// JSON file containing an array of records
    #[arg(short, long)]
    pub input: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    /// Settings file to validate; the layered defaults are used if omitted
    #[arg(short, long)]
    pub path: Option<PathBuf>,
}

fn load_records(path: &Path) -> Result<Vec<Record>, Box<dyn std::error::Error + Send + Sync>> {
    let json = std::fs::read_to_string(path)?;
    Ok(records_from_json(&json)?)
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> CliResult {
    let output = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{output}");
    Ok(())
}

pub fn run_filter(args: FilterArgs, metrics: &MetricsRecorder) -> CliResult {
    let records = load_records(&args.input)?;
    let projections = project_active(&records);
    metrics.inc_projected(projections.len());
    info!(
        input = records.len(),
        kept = projections.len(),
        "filter complete"
    );
    print_json(&projections, args.pretty)
}

pub fn run_process(args: ProcessArgs, metrics: &MetricsRecorder) -> CliResult {
    let settings = SiktConfig::load()?;

    let mut accumulator_config = Map::new();
    accumulator_config.insert("debug".into(), json!(settings.debug));

    let mut accumulator = Accumulator::new(accumulator_config);
    for record in load_records(&args.input)? {
        accumulator.append(record);
    }
    metrics.inc_appended(accumulator.len());

    let processed = accumulator.process();
    EventLogger::log_processed(processed.len());
    print_json(&processed, args.pretty)
}

pub fn run_total(args: TotalArgs) -> CliResult {
    let records = load_records(&args.input)?;
    println!("{}", total(&records));
    Ok(())
}

pub fn run_config(args: ConfigArgs) -> CliResult {
    let settings = match args.path {
        Some(path) => SiktConfig::load_from_path(path)?,
        None => SiktConfig::load()?,
    };

    info!(
        database = %settings.database.name,
        host = %settings.database.host,
        debug = settings.debug,
        "settings valid"
    );
    println!("settings valid");
    Ok(())
}
