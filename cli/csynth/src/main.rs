//! csynth CLI — reads HLS synthesis reports and emits normalized metrics.

mod commands;
mod locate;
mod logging;
mod manifest;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use logging::LogLevel;
use manifest::CsynthManifest;

#[derive(Parser)]
#[command(name = "csynth", version, about = "Read HLS synthesis reports")]
struct Cli {
    /// Log verbosity (RUST_LOG overrides)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print normalized timing, latency and utilization metrics as JSON
    Metrics {
        /// Report file (default: located from csynth.toml)
        report: Option<PathBuf>,
        /// Single-line JSON
        #[arg(long)]
        compact: bool,
    },
    /// Print the raw parsed tag tree as JSON
    Tree {
        /// Report file (default: located from csynth.toml)
        report: Option<PathBuf>,
        /// Single-line JSON
        #[arg(long)]
        compact: bool,
    },
    /// Print the path of the report located from csynth.toml
    Locate,
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.log_level);

    let result = run(cli.command);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Commands) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match command {
        Commands::Metrics { report, compact } => {
            let loaded = CsynthManifest::find_and_load(&cwd)?;
            let report = resolve_report(report, loaded.as_ref())?;
            commands::metrics::run(&report, loaded.as_ref().map(|(m, _)| m), compact)
        }

        Commands::Tree { report, compact } => {
            let loaded = CsynthManifest::find_and_load(&cwd)?;
            let report = resolve_report(report, loaded.as_ref())?;
            commands::tree::run(&report, compact)
        }

        Commands::Locate => {
            let (manifest, project_dir) = load_manifest_required(&cwd)?;
            commands::locate::run(&project_dir, &manifest)
        }
    }
}

/// Use the explicit report path if given, otherwise locate one from the manifest.
fn resolve_report(
    explicit: Option<PathBuf>,
    loaded: Option<&(CsynthManifest, PathBuf)>,
) -> anyhow::Result<PathBuf> {
    match (explicit, loaded) {
        (Some(path), _) => Ok(path),
        (None, Some((manifest, project_dir))) => locate::require_report(project_dir, manifest),
        (None, None) => {
            anyhow::bail!("no report given and no {} found", manifest::MANIFEST_FILE)
        }
    }
}

/// Load manifest, returning error if not found.
fn load_manifest_required(cwd: &Path) -> anyhow::Result<(CsynthManifest, PathBuf)> {
    match CsynthManifest::find_and_load(cwd)? {
        Some(loaded) => Ok(loaded),
        None => anyhow::bail!("no {} found", manifest::MANIFEST_FILE),
    }
}
