//! Fetch aggregation over the movie gateway.
//!
//! The [`Aggregator`] translates each [`FetchRequest`] into one or more
//! gateway calls and reduces every outcome (success, not-found, transport
//! failure) to a [`FetchResponse`] the view layer can render. No condition
//! escapes as an error: the aggregator is the propagation boundary.
//!
//! # Batch semantics
//!
//! [`TopMovies`](FetchRequest::TopMovies) fires one lookup per identifier
//! concurrently, waits for *every* outcome (join-all, not first-success or
//! first-failure), discards non-successes, and returns survivors in the
//! original identifier order. One bad identifier never aborts the batch; if
//! all fail the result is an empty list, not an error.

use crate::api::{MovieGateway, PlotLength};
use crate::domain::error::Result;
use crate::domain::MovieSummary;
use crate::fetch::requests::{FetchRequest, FetchResponse};

/// Executes fetch requests against a movie gateway.
///
/// Generic over the gateway so tests can substitute an in-memory fake for the
/// HTTP client.
#[derive(Debug)]
pub struct Aggregator<G: MovieGateway> {
    gateway: G,
}

impl<G: MovieGateway> Aggregator<G> {
    /// Wraps a gateway.
    pub const fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Executes one request and reduces it to a renderable response.
    ///
    /// This is the aggregator's only public operation; each variant dispatches
    /// to a dedicated handler below.
    pub fn execute(&self, request: &FetchRequest) -> FetchResponse {
        let _span = tracing::debug_span!("fetch_execute", request = ?request).entered();

        match request {
            FetchRequest::ByTitle { title } => self.handle_by_title(title),
            FetchRequest::ByKeyword { keyword } => self.handle_by_keyword(keyword),
            FetchRequest::ById { imdb_id } => self.handle_by_id(imdb_id),
            FetchRequest::CardDetails { imdb_id } => self.handle_card_details(imdb_id),
            FetchRequest::TopMovies { imdb_ids } => self.handle_top_movies(imdb_ids),
        }
    }

    /// Helper standardizing outcome reduction and logging across handlers.
    ///
    /// `on_hit` maps a successful payload to its response; `miss` is the
    /// message for the not-found condition and `failed` the generic
    /// retry-worded message for transport failures.
    fn report<T>(
        operation: &str,
        result: Result<Option<T>>,
        miss: &str,
        failed: &str,
        on_hit: impl FnOnce(T) -> FetchResponse,
    ) -> FetchResponse {
        match result {
            Ok(Some(value)) => {
                tracing::debug!(operation = operation, "lookup succeeded");
                on_hit(value)
            }
            Ok(None) => {
                tracing::debug!(operation = operation, "lookup matched nothing");
                FetchResponse::NotFound {
                    message: miss.to_string(),
                }
            }
            Err(e) => {
                tracing::debug!(operation = operation, error = %e, "lookup failed");
                FetchResponse::Failed {
                    message: failed.to_string(),
                }
            }
        }
    }

    fn handle_by_title(&self, title: &str) -> FetchResponse {
        Self::report(
            "search by title",
            self.gateway.lookup_by_title(title),
            "Movie not found. Please try another title.",
            "Failed to search movie. Please try again.",
            |detail| FetchResponse::Detail { detail },
        )
    }

    fn handle_by_id(&self, imdb_id: &str) -> FetchResponse {
        Self::report(
            "search by id",
            self.gateway.lookup_by_id(imdb_id, PlotLength::Full),
            "Movie not found with this IMDb ID.",
            "Failed to search movie. Please try again.",
            |detail| FetchResponse::Detail { detail },
        )
    }

    fn handle_card_details(&self, imdb_id: &str) -> FetchResponse {
        Self::report(
            "card details",
            self.gateway.lookup_by_id(imdb_id, PlotLength::Full),
            "Failed to load movie details.",
            "Failed to load movie details. Please try again.",
            |detail| FetchResponse::Detail { detail },
        )
    }

    /// Keyword searches report an empty result set and `Response: "False"`
    /// as the same "no movies found" condition.
    fn handle_by_keyword(&self, keyword: &str) -> FetchResponse {
        match self.gateway.search(keyword) {
            Ok(summaries) if summaries.is_empty() => {
                tracing::debug!(keyword = %keyword, "keyword search matched nothing");
                FetchResponse::NotFound {
                    message: "No movies found for this keyword.".to_string(),
                }
            }
            Ok(summaries) => {
                tracing::debug!(keyword = %keyword, result_count = summaries.len(), "keyword search succeeded");
                FetchResponse::List {
                    heading: format!("Search results for: \"{keyword}\""),
                    summaries,
                }
            }
            Err(e) => {
                tracing::debug!(keyword = %keyword, error = %e, "keyword search failed");
                FetchResponse::Failed {
                    message: "Failed to search movies. Please try again.".to_string(),
                }
            }
        }
    }

    /// Fires all batch lookups concurrently and joins every outcome.
    ///
    /// Handles are spawned in identifier order and joined in the same order,
    /// so the surviving summaries form an order-preserving subsequence of the
    /// input regardless of which request finishes first.
    fn handle_top_movies(&self, imdb_ids: &[String]) -> FetchResponse {
        let gateway = &self.gateway;

        let summaries: Vec<MovieSummary> = std::thread::scope(|scope| {
            let handles: Vec<_> = imdb_ids
                .iter()
                .map(|imdb_id| {
                    scope.spawn(move || gateway.lookup_by_id(imdb_id, PlotLength::Short))
                })
                .collect();

            handles
                .into_iter()
                .zip(imdb_ids)
                .filter_map(|(handle, imdb_id)| match handle.join() {
                    Ok(Ok(Some(detail))) => Some(detail.summary()),
                    Ok(Ok(None)) => {
                        tracing::debug!(imdb_id = %imdb_id, "top movie not found, dropping slot");
                        None
                    }
                    Ok(Err(e)) => {
                        tracing::debug!(imdb_id = %imdb_id, error = %e, "top movie fetch failed, dropping slot");
                        None
                    }
                    Err(_) => {
                        tracing::debug!(imdb_id = %imdb_id, "top movie fetch panicked, dropping slot");
                        None
                    }
                })
                .collect()
        });

        tracing::debug!(
            requested = imdb_ids.len(),
            loaded = summaries.len(),
            "top movies batch settled"
        );

        FetchResponse::TopMovies { summaries }
    }
}
