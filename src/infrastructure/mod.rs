//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module provides utilities for resolving where the application stores
//! its on-disk state and for normalizing user-supplied paths.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
