//! `turnover`: extract turnover-number kinetics for a set of enzyme
//! classification codes and write them as paginated workbooks.
//!
//! ```bash
//! turnover --targets input/codes.txt --database brenda.txt --pages 4
//! ```
//!
//! Settings not given on the command line come from `TURNOVER_*`
//! environment variables, `<root>/turnover.toml` and
//! `~/.turnover/config.toml`, in that order.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use turnover_core::config::{CliOverrides, TurnoverConfig};
use turnover_core::errors::{ErrorCode, PipelineError};
use turnover_core::tracing::init_tracing;

#[derive(Parser, Debug)]
#[command(name = "turnover")]
#[command(about = "Extract turnover numbers from the enzyme flat-file database")]
#[command(version)]
struct Args {
    /// Line-delimited file of target classification codes
    #[arg(long)]
    targets: Option<PathBuf>,

    /// The flat-file database
    #[arg(long)]
    database: Option<PathBuf>,

    /// Number of output workbooks to split the target codes across
    #[arg(long)]
    pages: Option<usize>,

    /// Directory the workbooks are written to
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Directory holding turnover.toml
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Print the run summary as JSON on stdout
    #[arg(long)]
    json: bool,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            targets_path: self.targets.clone(),
            database_path: self.database.clone(),
            pages: self.pages,
            output_dir: self.output_dir.clone(),
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.error_code(), error = %e, "run failed");
            eprintln!("{}", e.coded_message());
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), PipelineError> {
    let config = TurnoverConfig::load(&args.root, Some(&args.overrides()))?;
    let summary = turnover_cli::run(&config)?;

    if args.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(e) => tracing::warn!(error = %e, "could not serialize run summary"),
        }
    }
    Ok(())
}
