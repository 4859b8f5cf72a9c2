//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber with a file-backed fmt
//! layer, turning `tracing` macro calls throughout the crate into timestamped
//! log lines.

use std::fs::{File, OpenOptions};
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::Config;

/// Initializes the tracing subscriber with file-based log output.
///
/// # Trace Level Resolution
///
/// 1. `RUST_LOG` environment variable (highest priority, full filter syntax)
/// 2. `config.trace_level` if set
/// 3. Default: `"info"`
///
/// # File Location
///
/// Log lines are appended to `cinescout.log` inside the data directory
/// (see [`get_data_dir`](crate::infrastructure::get_data_dir)). Writing to a
/// file rather than stderr keeps diagnostics out of the rendered UI.
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently does nothing if the directory or file cannot be created
///   (observability is optional)
/// - Idempotent: safe to call multiple times (only the first call takes
///   effect)
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let log_file = data_dir.join("cinescout.log");
    let Ok(file) = OpenOptions::new().create(true).append(true).open(log_file) else {
        return;
    };
    let writer = Arc::<File>::new(file);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);

    let _ = subscriber.try_init();
}
