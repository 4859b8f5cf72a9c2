//! Error types for Cinescout.
//!
//! This module defines the centralized error type [`CinescoutError`] and a type
//! alias [`Result`] for convenient error handling throughout the crate. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.
//!
//! Note that "movie not found" is deliberately *not* an error variant: the OMDb
//! API reporting `Response: "False"` is an expected, reportable outcome modeled
//! as `Ok(None)` at the gateway boundary (see [`crate::api::MovieGateway`]).
//! Only genuine faults (transport failures, bad configuration, unusable theme
//! files) live here.

use thiserror::Error;

/// The main error type for Cinescout operations.
///
/// This enum consolidates all fault conditions that can occur during execution,
/// from HTTP transport failures to configuration issues. Reportable screen
/// conditions (empty input, movie not found) are handled by the fetch
/// aggregator and never surface as this type.
#[derive(Debug, Error)]
pub enum CinescoutError {
    /// The HTTP call itself failed.
    ///
    /// Covers connection errors, non-2xx status codes, and unparseable JSON
    /// bodies. The string contains a description of what went wrong; the
    /// aggregator converts it into a generic retry-worded screen message.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically
    /// converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    ///
    /// Occurs when a theme file cannot be read or its TOML cannot be parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are missing or malformed,
    /// for example an empty API key or an unusable base URL.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Cinescout operations.
///
/// This is a type alias for `std::result::Result<T, CinescoutError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, CinescoutError>;
