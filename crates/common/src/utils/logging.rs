use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Used when `RUST_LOG` is unset. Orchestrator rejections log at `warn`, mutations at `info`.
pub const DEFAULT_FILTER: &str = "info,tower_http=info,axum=info,sqlx=warn";

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Human-readable compact lines on stdout.
pub fn init_logging_default() {
    let _ = fmt()
        .with_env_filter(filter())
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}

/// One JSON object per event on stdout, span fields included.
pub fn init_logging_json() {
    let _ = fmt()
        .with_env_filter(filter())
        .with_target(true)
        .json()
        .with_current_span(true)
        .with_writer(io::stdout)
        .try_init();
}

/// Pick the subscriber flavour from the `[logging] format` switch.
/// Safe to call more than once; later calls are no-ops.
pub fn init_logging(json: bool) {
    if json { init_logging_json() } else { init_logging_default() }
}
