//! Logging setup for the LFPM checklist.
//!
//! Two `fmt` layers share one registry: stdout for the terminal, and a
//! crossbeam channel feeding the diagnostics strip in the window. The
//! channel is also where persistence failures surface to the user.

pub mod log_channel;

pub use log_channel::{ChannelWriterFactory, LogFeed, LogSeverity};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

const DEFAULT_DIRECTIVES: &str = "info";

/// Filter built from `RUST_LOG`-style directives. Falls back to INFO when
/// unset or unparsable.
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Installs the global subscriber. `RUST_LOG` overrides the INFO default.
pub fn init_tracing(log_tx: crossbeam_channel::Sender<String>) {
    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_target(false) // cleaner
        .pretty();

    let ui_layer = tracing_subscriber::fmt::layer()
        .with_writer(ChannelWriterFactory::new(log_tx))
        .with_ansi(false) // No color codes for UI text
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref()))
        .with(stdout_layer)
        .with(ui_layer)
        .init();
}
