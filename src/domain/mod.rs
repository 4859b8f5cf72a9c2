//! Domain layer for Cinescout.
//!
//! This module contains the core domain types for the application, independent
//! of HTTP or terminal concerns. It follows domain-driven design principles by
//! keeping the movie models and error taxonomy isolated from external
//! dependencies.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`movie`]: Movie summary/detail models and poster placeholder handling

pub mod error;
pub mod movie;

pub use error::{CinescoutError, Result};
pub use movie::{MovieDetail, MovieSummary};
