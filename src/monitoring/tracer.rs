/*!
 * Tracing Setup
 * Structured logging for simulator runs using the tracing crate
 *
 * Log output goes to stderr so that stdout carries only the report.
 */

use tracing::info;
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: warn)
/// - MMU_TRACE_JSON: Enable JSON output (passed in as `use_json`)
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_tracing(use_json: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        // JSON output for production/parsing
        let initialized = registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init()
            .is_ok();
        if initialized {
            info!("Structured tracing initialized with JSON output");
        }
    } else {
        // Human-readable output for development
        let initialized = registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .compact(),
            )
            .try_init()
            .is_ok();
        if initialized {
            info!("Structured tracing initialized");
        }
    }
}
