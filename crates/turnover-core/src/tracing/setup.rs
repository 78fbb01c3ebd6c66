//! Logging for a parse-and-export run.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the filter directives.
pub const LOG_ENV_VAR: &str = "TURNOVER_LOG";

/// Target prefix shared by every workspace crate and the binary.
const DEFAULT_DIRECTIVES: &str = "turnover=info";

/// Install the stderr subscriber used by the `turnover` binary.
///
/// Directives come from `TURNOVER_LOG`, e.g.
/// `TURNOVER_LOG=turnover_parser=debug` to see per-segment seal and discard
/// events and the periodic line-count progress. Without it only the
/// run-level events (`target codes loaded`, `database parsed`, `page written`) are shown.
/// Later calls are no-ops. stdout is left to the `--json` run summary.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
