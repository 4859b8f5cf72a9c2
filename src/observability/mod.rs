//! File-backed tracing for offline debugging.
//!
//! This module wires the `tracing` macros used throughout the crate to a log
//! file in the data directory. The terminal belongs to the rendered UI, so
//! diagnostics never go to stdout or stderr.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` in the application configuration
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! Initialize tracing early in the application lifecycle:
//!
//! ```rust
//! use cinescout::observability::init_tracing;
//! use cinescout::Config;
//!
//! let config = Config::default();
//! init_tracing(&config);
//!
//! tracing::debug!("application initialized");
//! ```

mod init;

pub use init::init_tracing;
