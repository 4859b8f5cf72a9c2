//! Raw OMDb response envelopes and their conversion to domain types.
//!
//! The OMDb API wraps every response in a JSON object whose `Response` field
//! is the string `"True"` or `"False"`. On failure there is no usable payload
//! beyond an optional `Error` message. Any data field may carry the literal
//! sentinel `"N/A"` meaning "value absent"; [`clean`] strips that sentinel
//! (and empty strings) here, at the parse boundary, so domain types only ever
//! hold genuine values.

use serde::Deserialize;

use crate::domain::{MovieDetail, MovieSummary};

/// The sentinel string the API uses for absent field values.
const NOT_AVAILABLE: &str = "N/A";

/// Normalizes a raw field value, mapping the "N/A" sentinel and empty strings
/// to `None`.
fn clean(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty() && v != NOT_AVAILABLE)
}

/// Envelope for single-title lookups (`t=` and `i=` requests).
///
/// All data fields are optional at the wire level; presence is only meaningful
/// when [`is_success`](Self::is_success) holds.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupEnvelope {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error")]
    pub error: Option<String>,
    #[serde(rename = "imdbID")]
    pub imdb_id: Option<String>,
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "Poster")]
    pub poster: Option<String>,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
    #[serde(rename = "Rated")]
    pub rated: Option<String>,
    #[serde(rename = "Runtime")]
    pub runtime: Option<String>,
    #[serde(rename = "Genre")]
    pub genre: Option<String>,
    #[serde(rename = "Plot")]
    pub plot: Option<String>,
    #[serde(rename = "Director")]
    pub director: Option<String>,
    #[serde(rename = "Actors")]
    pub actors: Option<String>,
    #[serde(rename = "Writer")]
    pub writer: Option<String>,
    #[serde(rename = "Language")]
    pub language: Option<String>,
    #[serde(rename = "Country")]
    pub country: Option<String>,
    #[serde(rename = "Released")]
    pub released: Option<String>,
    #[serde(rename = "BoxOffice")]
    pub box_office: Option<String>,
}

impl LookupEnvelope {
    /// Whether the API reported success (`Response: "True"`).
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.response == "True"
    }

    /// Converts a successful envelope into a domain [`MovieDetail`].
    ///
    /// Returns `None` when the envelope reported failure, so callers can treat
    /// `Response: "False"` and a genuinely missing record uniformly.
    #[must_use]
    pub fn into_detail(self) -> Option<MovieDetail> {
        if !self.is_success() {
            return None;
        }

        Some(MovieDetail {
            imdb_id: clean(self.imdb_id).unwrap_or_default(),
            title: clean(self.title).unwrap_or_default(),
            year: clean(self.year).unwrap_or_default(),
            poster: clean(self.poster),
            rating: clean(self.imdb_rating),
            rated: clean(self.rated),
            runtime: clean(self.runtime),
            genre: clean(self.genre),
            plot: clean(self.plot),
            director: clean(self.director),
            actors: clean(self.actors),
            writer: clean(self.writer),
            language: clean(self.language),
            country: clean(self.country),
            released: clean(self.released),
            box_office: clean(self.box_office),
        })
    }
}

/// Envelope for keyword searches (`s=` requests).
///
/// On success the matches arrive under the `Search` field; on failure that
/// field is absent entirely.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchEnvelope {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error")]
    pub error: Option<String>,
    #[serde(rename = "Search")]
    pub search: Option<Vec<SearchItem>>,
}

/// One entry of a keyword search result.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchItem {
    #[serde(rename = "imdbID")]
    pub imdb_id: Option<String>,
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "Poster")]
    pub poster: Option<String>,
}

impl SearchEnvelope {
    /// Whether the API reported success with a usable result collection.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.response == "True" && self.search.is_some()
    }

    /// Converts the envelope into domain summaries, preserving API order.
    ///
    /// A failed envelope (or one with no `Search` field) yields an empty
    /// vector; the caller reports both as the same "no movies found"
    /// condition.
    #[must_use]
    pub fn into_summaries(self) -> Vec<MovieSummary> {
        if self.response != "True" {
            return Vec::new();
        }

        self.search
            .unwrap_or_default()
            .into_iter()
            .map(|item| MovieSummary {
                imdb_id: clean(item.imdb_id).unwrap_or_default(),
                title: clean(item.title).unwrap_or_default(),
                year: clean(item.year).unwrap_or_default(),
                poster: clean(item.poster),
                // Keyword search responses carry no rating field.
                rating: None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_strips_sentinel_and_empty() {
        assert_eq!(clean(Some("N/A".to_string())), None);
        assert_eq!(clean(Some(String::new())), None);
        assert_eq!(clean(None), None);
        assert_eq!(clean(Some("9.0".to_string())), Some("9.0".to_string()));
    }

    #[test]
    fn successful_lookup_parses_into_detail() {
        let json = r#"{
            "Title": "The Matrix",
            "Year": "1999",
            "Rated": "R",
            "Released": "31 Mar 1999",
            "Runtime": "136 min",
            "Genre": "Action, Sci-Fi",
            "Director": "Lana Wachowski, Lilly Wachowski",
            "Writer": "Lilly Wachowski, Lana Wachowski",
            "Actors": "Keanu Reeves, Laurence Fishburne, Carrie-Anne Moss",
            "Plot": "A computer hacker learns about the true nature of reality.",
            "Language": "English",
            "Country": "United States, Australia",
            "Poster": "https://img.example/matrix.jpg",
            "imdbRating": "8.7",
            "imdbID": "tt0133093",
            "BoxOffice": "$172,076,928",
            "Response": "True"
        }"#;

        let envelope: LookupEnvelope = serde_json::from_str(json).unwrap();
        let detail = envelope.into_detail().expect("success envelope");

        assert_eq!(detail.headline(), "The Matrix (1999)");
        assert_eq!(detail.rating.as_deref(), Some("8.7"));
        assert_eq!(detail.box_office.as_deref(), Some("$172,076,928"));
    }

    #[test]
    fn sentinel_fields_become_absent() {
        let json = r#"{
            "Title": "Obscure Short",
            "Year": "2003",
            "Rated": "N/A",
            "Poster": "N/A",
            "imdbRating": "N/A",
            "BoxOffice": "N/A",
            "imdbID": "tt9999999",
            "Response": "True"
        }"#;

        let envelope: LookupEnvelope = serde_json::from_str(json).unwrap();
        let detail = envelope.into_detail().unwrap();

        assert_eq!(detail.rated, None);
        assert_eq!(detail.poster, None);
        assert_eq!(detail.rating, None);
        assert_eq!(detail.box_office, None);
    }

    #[test]
    fn failed_lookup_yields_none() {
        let json = r#"{"Response": "False", "Error": "Movie not found!"}"#;
        let envelope: LookupEnvelope = serde_json::from_str(json).unwrap();
        assert!(!envelope.is_success());
        assert!(envelope.into_detail().is_none());
    }

    #[test]
    fn search_envelope_preserves_order() {
        let json = r#"{
            "Search": [
                {"Title": "Alien", "Year": "1979", "imdbID": "tt0078748", "Poster": "N/A"},
                {"Title": "Aliens", "Year": "1986", "imdbID": "tt0090605", "Poster": "https://img.example/aliens.jpg"}
            ],
            "totalResults": "2",
            "Response": "True"
        }"#;

        let envelope: SearchEnvelope = serde_json::from_str(json).unwrap();
        let summaries = envelope.into_summaries();

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].imdb_id, "tt0078748");
        assert_eq!(summaries[0].poster, None);
        assert_eq!(summaries[1].title, "Aliens");
        assert!(summaries.iter().all(|s| s.rating.is_none()));
    }

    #[test]
    fn failed_search_yields_empty_collection() {
        let json = r#"{"Response": "False", "Error": "Movie not found!"}"#;
        let envelope: SearchEnvelope = serde_json::from_str(json).unwrap();
        assert!(!envelope.is_success());
        assert!(envelope.into_summaries().is_empty());
    }
}
