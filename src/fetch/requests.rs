//! Fetch request/response protocol types.
//!
//! This module defines the message protocol between the application layer and
//! the fetch aggregator. The event handler emits a [`FetchRequest`] (wrapped
//! in an action) for every network operation it wants performed; the runtime
//! executes it and feeds the resulting [`FetchResponse`] back in as an event.
//!
//! Every reportable condition (not found, transport failure) is a response
//! variant carrying its final human-readable message. Nothing network-shaped
//! propagates past the aggregator.

use serde::{Deserialize, Serialize};

use crate::domain::{MovieDetail, MovieSummary};

/// An outbound API operation requested by the event handler.
///
/// [`ById`](Self::ById) and [`CardDetails`](Self::CardDetails) issue the same
/// wire request; they differ only in the failure wording shown to the user
/// (an explicit ID search reports "not found with this IMDb ID", while an
/// activated card that fails to resolve reports a load failure).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchRequest {
    /// Single lookup keyed by exact title (`t=`), full plot.
    ByTitle {
        /// Title as typed by the user, already trimmed and non-empty.
        title: String,
    },

    /// Keyword search (`s=`); the API performs all matching and ranking.
    ByKeyword {
        /// Keyword as typed by the user, already trimmed and non-empty.
        keyword: String,
    },

    /// Single lookup keyed by IMDb identifier (`i=`), full plot.
    ById {
        /// Identifier sent unchecked, case and format unvalidated.
        imdb_id: String,
    },

    /// Detail lookup for an activated result card (`i=`), full plot.
    CardDetails {
        /// Identifier taken from the rendered card.
        imdb_id: String,
    },

    /// Concurrent batch lookup for the top-movies panel (`i=` with short
    /// plot, one request per identifier).
    TopMovies {
        /// Fixed, ordered identifier list; output order follows this order.
        imdb_ids: Vec<String>,
    },
}

/// The aggregator's reduction of one request to a renderable outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchResponse {
    /// A single movie resolved successfully; show the detail screen.
    Detail { detail: MovieDetail },

    /// A keyword search resolved successfully; show the list screen.
    List {
        /// Heading for the result grid (includes the quoted keyword).
        heading: String,
        /// Matches in the order the API returned them.
        summaries: Vec<MovieSummary>,
    },

    /// The API matched nothing; show the error screen with this message.
    NotFound { message: String },

    /// The HTTP call itself failed; show the error screen with this message.
    Failed { message: String },

    /// Batch fetch settled; the panel renders whatever survived.
    ///
    /// Individual identifier failures are already filtered out. An empty
    /// vector means every identifier failed, which the panel renders as an
    /// empty-state placeholder, never as an error screen.
    TopMovies { summaries: Vec<MovieSummary> },
}
