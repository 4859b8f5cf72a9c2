//! Blocking HTTP implementation of the movie gateway.
//!
//! [`OmdbClient`] issues `GET` requests against a single OMDb base endpoint,
//! attaching the static API key to every request. There are no retries, no
//! configured timeouts beyond the transport's own, and no caching; a single
//! transport failure surfaces immediately as
//! [`CinescoutError::Transport`](crate::domain::CinescoutError::Transport).

use crate::api::gateway::{MovieGateway, PlotLength};
use crate::api::models::{LookupEnvelope, SearchEnvelope};
use crate::domain::error::{CinescoutError, Result};
use crate::domain::{MovieDetail, MovieSummary};

/// Blocking OMDb API client.
///
/// Cheap to share by reference; the underlying `reqwest` client pools
/// connections internally.
#[derive(Debug, Clone)]
pub struct OmdbClient {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    /// Creates a client for the given endpoint and API key.
    ///
    /// # Errors
    ///
    /// Returns [`CinescoutError::Config`] if the API key is empty, or
    /// [`CinescoutError::Transport`] if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(CinescoutError::Config("API key must not be empty".to_string()));
        }

        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("cinescout/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CinescoutError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key,
        })
    }

    /// Performs one GET against the base endpoint with the given query
    /// parameters (plus the API key) and decodes the JSON body into `T`.
    fn get_json<T>(&self, params: &[(&str, &str)]) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str())])
            .query(params)
            .send()
            .map_err(|e| CinescoutError::Transport(e.to_string()))?
            .error_for_status()
            .map_err(|e| CinescoutError::Transport(e.to_string()))?;

        response
            .json::<T>()
            .map_err(|e| CinescoutError::Transport(e.to_string()))
    }
}

impl MovieGateway for OmdbClient {
    fn lookup_by_title(&self, title: &str) -> Result<Option<MovieDetail>> {
        tracing::debug!(title = %title, "looking up movie by title");
        let envelope: LookupEnvelope =
            self.get_json(&[("t", title), ("plot", PlotLength::Full.as_param())])?;
        if let Some(error) = envelope.error.as_deref() {
            tracing::debug!(api_error = %error, "lookup reported failure");
        }
        Ok(envelope.into_detail())
    }

    fn lookup_by_id(&self, imdb_id: &str, plot: PlotLength) -> Result<Option<MovieDetail>> {
        tracing::debug!(imdb_id = %imdb_id, plot = plot.as_param(), "looking up movie by id");
        let envelope: LookupEnvelope = self.get_json(&[("i", imdb_id), ("plot", plot.as_param())])?;
        Ok(envelope.into_detail())
    }

    fn search(&self, keyword: &str) -> Result<Vec<MovieSummary>> {
        tracing::debug!(keyword = %keyword, "searching movies by keyword");
        let envelope: SearchEnvelope = self.get_json(&[("s", keyword)])?;
        let summaries = envelope.into_summaries();
        tracing::debug!(result_count = summaries.len(), "search completed");
        Ok(summaries)
    }
}
