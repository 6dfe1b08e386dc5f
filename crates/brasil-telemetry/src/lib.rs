//! Logging for MCP Brasil
//!
//! Events go through the `tracing` ecosystem. Output is always written to
//! stderr: stdout carries the MCP stdio transport and must stay clean.

use brasil_config::{LogConfig, LogFormat};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global subscriber
///
/// `filter_override` (from the command line or environment) takes
/// precedence over the configured filter. An unparsable directive falls
/// back to `info`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init(config: &LogConfig, filter_override: Option<&str>) -> anyhow::Result<()> {
    let directive = filter_override.unwrap_or(&config.filter);
    let filter = build_filter(directive);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(false);

    let fmt_layer = match config.format {
        LogFormat::Text => fmt_layer.boxed(),
        LogFormat::Json => fmt_layer.json().boxed(),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
}
