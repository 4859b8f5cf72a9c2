//! OMDb API access layer.
//!
//! This module owns everything that touches the external movie-metadata API:
//! the [`MovieGateway`] trait the rest of the crate programs against, the raw
//! serde response envelopes (with "N/A"-sentinel stripping at the parse
//! boundary), and the blocking HTTP client implementation.
//!
//! # Organization
//!
//! - [`gateway`]: The `MovieGateway` trait and plot-verbosity parameter
//! - [`models`]: Raw response envelopes and domain conversion
//! - [`client`]: `reqwest`-backed `OmdbClient`

pub mod client;
pub mod gateway;
pub mod models;

pub use client::OmdbClient;
pub use gateway::{MovieGateway, PlotLength};
