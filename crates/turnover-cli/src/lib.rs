//! Pipeline wiring: load targets, parse the database, export pages.
//!
//! Export starts only after the whole database has been parsed, so a fatal
//! parse error never leaves partial workbooks behind.

use serde::Serialize;
use tracing::info;
use turnover_core::config::TurnoverConfig;
use turnover_core::errors::PipelineError;
use turnover_core::types::TargetCodes;
use turnover_export::{ExportSummary, TableExporter, TableSink, XlsxSink};
use turnover_parser::{parse_file, ParseStats};

/// Everything a run reports back.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub target_codes: usize,
    pub parse: ParseStats,
    pub export: ExportSummary,
}

/// Run the pipeline, writing workbooks as configured.
pub fn run(config: &TurnoverConfig) -> Result<RunSummary, PipelineError> {
    let mut sink = XlsxSink::from_config(&config.export);
    run_with_sink(config, &mut sink)
}

/// Run the pipeline against any sink.
pub fn run_with_sink(
    config: &TurnoverConfig,
    sink: &mut dyn TableSink,
) -> Result<RunSummary, PipelineError> {
    let targets_path = config.input.require_targets_path()?;
    let database_path = config.input.require_database_path()?;

    let targets = TargetCodes::load(targets_path)?;
    info!(count = targets.len(), path = %targets_path.display(), "target codes loaded");

    let outcome = parse_file(database_path, &targets, &config.parser)?;

    let export = TableExporter::new(&outcome.index, &targets)
        .export(config.export.effective_pages(), sink)?;

    Ok(RunSummary {
        target_codes: targets.len(),
        parse: outcome.stats,
        export,
    })
}
