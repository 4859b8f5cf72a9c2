//! Movie gateway abstraction.
//!
//! This module defines the [`MovieGateway`] trait that abstracts over the
//! external movie-metadata API. The fetch aggregator only ever talks to this
//! trait, which keeps its reduction logic (failure isolation, order
//! preservation, not-found handling) testable against an in-memory fake.
//!
//! # Design Philosophy
//!
//! The trait is minimal and maps one method per outbound request shape the
//! application actually issues, not a generic HTTP wrapper. "Not found" is an
//! expected outcome and is modeled in the return types (`Ok(None)`, empty
//! `Vec`), never as an error.

use crate::domain::error::Result;
use crate::domain::{MovieDetail, MovieSummary};

/// Plot verbosity requested on single-title lookups.
///
/// The API accepts a `plot` query parameter: `short` for batch/summary
/// fetches, `full` for single-detail views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotLength {
    /// Abbreviated plot, used when the result only feeds a summary card.
    Short,
    /// Complete plot, used for the detail screen.
    Full,
}

impl PlotLength {
    /// Returns the query-parameter value for this verbosity.
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Full => "full",
        }
    }
}

/// Abstraction over the external movie-metadata API.
///
/// Implementations must be [`Sync`] so the aggregator can share one gateway
/// across the scoped threads of a concurrent batch fetch.
///
/// # Implementations
///
/// - [`OmdbClient`](crate::api::OmdbClient): blocking HTTP client (default)
pub trait MovieGateway: Sync {
    /// Looks up a single movie by exact title.
    ///
    /// Returns `Ok(None)` when the API answers `Response: "False"` (title not
    /// matched).
    ///
    /// # Errors
    ///
    /// Returns a transport error if the HTTP call or response decoding fails.
    fn lookup_by_title(&self, title: &str) -> Result<Option<MovieDetail>>;

    /// Looks up a single movie by its opaque IMDb identifier.
    ///
    /// The identifier is sent unchecked; an unknown or malformed identifier
    /// simply yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the HTTP call or response decoding fails.
    fn lookup_by_id(&self, imdb_id: &str, plot: PlotLength) -> Result<Option<MovieDetail>>;

    /// Searches for movies matching a keyword.
    ///
    /// The API performs all matching and ranking; results are returned in the
    /// order received, never re-ranked. Both an empty result set and
    /// `Response: "False"` yield `Ok(vec![])`.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the HTTP call or response decoding fails.
    fn search(&self, keyword: &str) -> Result<Vec<MovieSummary>>;
}
