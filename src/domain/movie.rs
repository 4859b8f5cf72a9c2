//! Movie domain models.
//!
//! This module defines the two movie shapes the application renders:
//! [`MovieSummary`] (produced by keyword searches and the top-movies panel)
//! and [`MovieDetail`] (produced by title and IMDb ID lookups). Both are
//! immutable and request-scoped: constructed from a single API response, held
//! only while the current screen renders them, and discarded on the next
//! navigation.
//!
//! Optional fields hold `Option<String>` and are `None` whenever the API
//! returned its "N/A" sentinel (or an empty string). That stripping happens at
//! the response-parsing boundary in [`crate::api::models`], so nothing in this
//! module or downstream rendering code ever compares against magic strings.

use serde::{Deserialize, Serialize};

/// Placeholder image reference for summary cards with no poster.
///
/// Substituted at render time whenever the poster field is absent, so a broken
/// or missing poster URL never reaches the output.
pub const CARD_POSTER_PLACEHOLDER: &str =
    "https://via.placeholder.com/200x300/333/fff?text=No+Poster";

/// Placeholder image reference for the detail view, sized for the larger
/// detail poster slot.
pub const DETAIL_POSTER_PLACEHOLDER: &str =
    "https://via.placeholder.com/300x450/333/fff?text=No+Poster";

/// A movie as returned by search/list responses.
///
/// Carries just enough to render one card: the opaque IMDb identifier (used to
/// request the full detail when the card is activated), title, year, and the
/// optional poster and rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieSummary {
    /// Opaque identifier in the external API's namespace (e.g. `tt0111161`).
    pub imdb_id: String,
    /// Movie title.
    pub title: String,
    /// Release year as the API formats it (may be a range for series).
    pub year: String,
    /// Poster URL, absent when the API reported none.
    pub poster: Option<String>,
    /// IMDb rating as a string (e.g. `"9.3"`), absent when unrated.
    pub rating: Option<String>,
}

impl MovieSummary {
    /// Returns the poster URL, falling back to the card placeholder.
    #[must_use]
    pub fn poster_or_placeholder(&self) -> &str {
        self.poster.as_deref().unwrap_or(CARD_POSTER_PLACEHOLDER)
    }
}

/// A movie as returned by a single-title lookup.
///
/// Superset of [`MovieSummary`]: everything needed for the full detail layout.
/// Every extended field is independently optional; a `None` row is simply
/// omitted from rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster: Option<String>,
    pub rating: Option<String>,
    /// MPAA-style certification (e.g. `"R"`).
    pub rated: Option<String>,
    pub runtime: Option<String>,
    pub genre: Option<String>,
    pub plot: Option<String>,
    pub director: Option<String>,
    /// Principal cast, comma-separated as the API formats it.
    pub actors: Option<String>,
    pub writer: Option<String>,
    pub language: Option<String>,
    pub country: Option<String>,
    pub released: Option<String>,
    pub box_office: Option<String>,
}

impl MovieDetail {
    /// Formats the detail headline as `"<Title> (<Year>)"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cinescout::domain::MovieDetail;
    ///
    /// let detail = MovieDetail {
    ///     imdb_id: "tt0133093".to_string(),
    ///     title: "The Matrix".to_string(),
    ///     year: "1999".to_string(),
    ///     poster: None,
    ///     rating: None,
    ///     rated: None,
    ///     runtime: None,
    ///     genre: None,
    ///     plot: None,
    ///     director: None,
    ///     actors: None,
    ///     writer: None,
    ///     language: None,
    ///     country: None,
    ///     released: None,
    ///     box_office: None,
    /// };
    /// assert_eq!(detail.headline(), "The Matrix (1999)");
    /// ```
    #[must_use]
    pub fn headline(&self) -> String {
        format!("{} ({})", self.title, self.year)
    }

    /// Returns the poster URL, falling back to the detail placeholder.
    #[must_use]
    pub fn poster_or_placeholder(&self) -> &str {
        self.poster.as_deref().unwrap_or(DETAIL_POSTER_PLACEHOLDER)
    }

    /// Projects this detail down to a [`MovieSummary`].
    ///
    /// Used by the top-movies batch fetch, which looks up full records but
    /// only renders summary cards.
    #[must_use]
    pub fn summary(&self) -> MovieSummary {
        MovieSummary {
            imdb_id: self.imdb_id.clone(),
            title: self.title.clone(),
            year: self.year.clone(),
            poster: self.poster.clone(),
            rating: self.rating.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_detail() -> MovieDetail {
        MovieDetail {
            imdb_id: "tt0111161".to_string(),
            title: "The Shawshank Redemption".to_string(),
            year: "1994".to_string(),
            poster: None,
            rating: Some("9.3".to_string()),
            rated: None,
            runtime: None,
            genre: None,
            plot: None,
            director: None,
            actors: None,
            writer: None,
            language: None,
            country: None,
            released: None,
            box_office: None,
        }
    }

    #[test]
    fn headline_concatenates_title_and_year() {
        assert_eq!(bare_detail().headline(), "The Shawshank Redemption (1994)");
    }

    #[test]
    fn missing_poster_falls_back_to_placeholder() {
        let detail = bare_detail();
        assert_eq!(detail.poster_or_placeholder(), DETAIL_POSTER_PLACEHOLDER);

        let summary = detail.summary();
        assert_eq!(summary.poster_or_placeholder(), CARD_POSTER_PLACEHOLDER);
    }

    #[test]
    fn present_poster_is_used_verbatim() {
        let mut detail = bare_detail();
        detail.poster = Some("https://img.example/poster.jpg".to_string());
        assert_eq!(detail.poster_or_placeholder(), "https://img.example/poster.jpg");
    }

    #[test]
    fn summary_projection_keeps_card_fields() {
        let summary = bare_detail().summary();
        assert_eq!(summary.imdb_id, "tt0111161");
        assert_eq!(summary.rating.as_deref(), Some("9.3"));
    }
}
