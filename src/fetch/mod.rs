//! Fetch aggregation layer.
//!
//! This module implements the fetch aggregator: it translates user queries
//! into outbound API requests, normalizes failures to reportable conditions,
//! and hands renderable responses back to the application layer. It is the
//! only place that touches the gateway, and nothing network-shaped propagates
//! past it.
//!
//! # Organization
//!
//! - [`requests`]: Request/response protocol types
//! - [`aggregator`]: Execution and outcome reduction, including the
//!   concurrent order-preserving top-movies batch

pub mod aggregator;
pub mod requests;

pub use aggregator::Aggregator;
pub use requests::{FetchRequest, FetchResponse};
