//! Chatkit Observability
//!
//! Logging setup for binaries built on the Chatkit SDK. The library crates
//! only emit `tracing` events; installing a subscriber is left to the
//! application, and this crate provides the default one.
//!
//! # Examples
//!
//! ```no_run
//! use chatkit_observability::{LogFormat, init_logging};
//!
//! init_logging(LogFormat::Compact);
//! tracing::info!("ready");
//! ```

use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Console output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable single-line output with ANSI colours.
    #[default]
    Compact,
    /// One JSON object per event, for log shippers.
    Json,
}

/// Builds the filter from `RUST_LOG`, falling back to `LOG_LEVEL` (default
/// "info") for the Chatkit crates with noisy dependencies held at warn.
pub fn env_filter() -> EnvFilter {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&log_level)))
}

/// Workspace crates whose events follow `LOG_LEVEL`.
const CHATKIT_TARGETS: &[&str] = &[
    "chatkit",
    "chatkit_core",
    "chatkit_config",
    "chatkit_auth",
    "chatkit_models",
    "chatkit_observability",
    "chatkit_cli",
];

/// Dependencies held at warn unless `RUST_LOG` says otherwise.
const QUIET_TARGETS: &[&str] = &["reqwest", "hyper", "hyper_util"];

fn default_directives(log_level: &str) -> String {
    CHATKIT_TARGETS
        .iter()
        .map(|target| format!("{target}={log_level}"))
        .chain(QUIET_TARGETS.iter().map(|target| format!("{target}=warn")))
        .collect::<Vec<_>>()
        .join(",")
}

/// Installs a global console subscriber writing to stderr.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init_logging(format: LogFormat) {
    let layer = match format {
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_filter(env_filter())
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_current_span(true)
            .with_span_list(true)
            .with_filter(env_filter())
            .boxed(),
    };

    tracing_subscriber::registry().with(layer).init();
}
