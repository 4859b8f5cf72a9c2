//! Central application state and its viewmodel projection.
//!
//! [`AppState`] owns the active [`Screen`], the [`TopPanel`], the resolved
//! theme, and the fetch generation counter. All screen transitions go through
//! the named mutators here, so the panel-visibility rule and the
//! one-screen-at-a-time rule hold by construction. [`AppState::compute_viewmodel`]
//! projects the whole thing into a [`UiViewModel`] for the renderer.

use tracing::debug;

use crate::app::screens::{Screen, TopPanel};
use crate::domain::{MovieDetail, MovieSummary};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CardItem, DetailRow, DetailView, FooterInfo, HeaderInfo, MainView, PanelView, UiViewModel,
};

/// Plot text shown when the API returned none.
const PLOT_FALLBACK: &str = "No plot available.";

/// Central mutable state for the application.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The single active screen.
    pub screen: Screen,
    /// Top-movies panel contents, independent of the active screen.
    pub top_panel: TopPanel,
    /// Resolved color theme used by the renderer.
    pub theme: Theme,
    /// Monotonic counter identifying the newest issued search.
    ///
    /// Every new search bumps this before its fetch is issued; a completed
    /// fetch carrying an older value is stale and must be dropped.
    pub generation: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            screen: Screen::Home,
            top_panel: TopPanel::Loading,
            theme: Theme::default(),
            generation: 0,
        }
    }
}

impl AppState {
    /// Bumps and returns the generation for a newly issued search.
    pub fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Whether the top-movies panel accompanies the active screen.
    #[must_use]
    pub const fn panel_visible(&self) -> bool {
        self.screen.panel_visible()
    }

    // ------------------------------------------------------------------
    // Screen transitions
    // ------------------------------------------------------------------

    /// Returns to the home screen, restoring the panel.
    pub fn show_home(&mut self) {
        debug!("transition to home screen");
        self.screen = Screen::Home;
    }

    /// Replaces the main region with the loading indicator.
    pub fn show_loading(&mut self) {
        debug!("transition to loading screen");
        self.screen = Screen::Loading;
    }

    /// Shows the error banner with `message`; the panel stays visible.
    pub fn show_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug!(message, "transition to error screen");
        self.screen = Screen::Error(message);
    }

    /// Shows the result grid for a settled keyword search.
    pub fn show_movie_list(&mut self, heading: String, items: Vec<MovieSummary>) {
        debug!(count = items.len(), "transition to list screen");
        self.screen = Screen::List { heading, items };
    }

    /// Shows the detail layout for a single resolved movie.
    pub fn show_movie_details(&mut self, detail: MovieDetail) {
        debug!(imdb_id = %detail.imdb_id, "transition to detail screen");
        self.screen = Screen::Detail(detail);
    }

    // ------------------------------------------------------------------
    // Panel transitions
    // ------------------------------------------------------------------

    /// Replaces the panel contents with a settled batch result.
    pub fn set_top_movies(&mut self, summaries: Vec<MovieSummary>) {
        debug!(count = summaries.len(), "top-movies panel loaded");
        self.top_panel = TopPanel::Loaded(summaries);
    }

    /// Marks the panel as permanently unavailable for this run.
    pub fn set_top_movies_unavailable(&mut self) {
        debug!("top-movies panel unavailable");
        self.top_panel = TopPanel::Unavailable;
    }

    // ------------------------------------------------------------------
    // Card resolution
    // ------------------------------------------------------------------

    /// Resolves a 1-based card number to the IMDb ID it refers to.
    ///
    /// On the list screen, numbers address the result grid. On screens where
    /// the panel is visible, they address the panel cards instead. Returns
    /// `None` when no card carries that number.
    #[must_use]
    pub fn card_id(&self, number: usize) -> Option<&str> {
        if number == 0 {
            return None;
        }
        match &self.screen {
            Screen::List { items, .. } => items.get(number - 1).map(|m| m.imdb_id.as_str()),
            _ if self.screen.panel_visible() => match &self.top_panel {
                TopPanel::Loaded(items) => items.get(number - 1).map(|m| m.imdb_id.as_str()),
                _ => None,
            },
            _ => None,
        }
    }

    // ------------------------------------------------------------------
    // Viewmodel projection
    // ------------------------------------------------------------------

    /// Projects the full state into a render-ready [`UiViewModel`].
    #[must_use]
    pub fn compute_viewmodel(&self) -> UiViewModel {
        UiViewModel {
            header: self.compute_header(),
            main: self.compute_main(),
            panel: self.compute_panel(),
            footer: self.compute_footer(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = match &self.screen {
            Screen::Home | Screen::Loading | Screen::Error(_) => " Cinescout ".to_string(),
            Screen::List { items, .. } => format!(" Search Results ({}) ", items.len()),
            Screen::Detail(_) => " Movie Details ".to_string(),
        };
        HeaderInfo { title }
    }

    fn compute_footer(&self) -> FooterInfo {
        let hints = match &self.screen {
            Screen::Home | Screen::Error(_) => {
                "t <title> | k <keyword> | i <imdb-id> | o <n> open card | q quit"
            }
            Screen::Loading => "fetching | q quit",
            Screen::List { .. } => "o <n> open card | h home | q quit",
            Screen::Detail(_) => "h home | q quit",
        };
        FooterInfo {
            hints: hints.to_string(),
        }
    }

    fn compute_main(&self) -> MainView {
        match &self.screen {
            Screen::Home => MainView::Welcome {
                title: "Welcome to Movie Search".to_string(),
                subtitle: "Search for movies by title, keyword, or IMDb ID to get started."
                    .to_string(),
            },
            Screen::Loading => MainView::Loading {
                message: "Loading...".to_string(),
            },
            Screen::Error(message) => MainView::Banner {
                message: message.clone(),
            },
            Screen::List { heading, items } => MainView::Grid {
                heading: heading.clone(),
                cards: items
                    .iter()
                    .enumerate()
                    .map(|(i, m)| Self::card_item(m, i, None))
                    .collect(),
            },
            Screen::Detail(detail) => MainView::Detail(Self::detail_view(detail)),
        }
    }

    fn compute_panel(&self) -> Option<PanelView> {
        if !self.panel_visible() {
            return None;
        }
        let title = "Top Rated Movies".to_string();
        let view = match &self.top_panel {
            TopPanel::Loading => PanelView {
                title,
                placeholder: Some("Loading top movies...".to_string()),
                cards: vec![],
            },
            TopPanel::Unavailable => PanelView {
                title,
                placeholder: Some("Failed to load top movies".to_string()),
                cards: vec![],
            },
            TopPanel::Loaded(items) => PanelView {
                title,
                placeholder: None,
                cards: items
                    .iter()
                    .enumerate()
                    .map(|(i, m)| {
                        // Ranking badges decorate the first three cards only.
                        let badge = (i < 3).then(|| format!("TOP {}", i + 1));
                        Self::card_item(m, i, badge)
                    })
                    .collect(),
            },
        };
        Some(view)
    }

    fn card_item(summary: &MovieSummary, position: usize, badge: Option<String>) -> CardItem {
        CardItem {
            index: position + 1,
            title: summary.title.clone(),
            year: summary.year.clone(),
            rating: summary.rating.clone(),
            poster: summary.poster_or_placeholder().to_string(),
            badge,
        }
    }

    fn detail_view(detail: &MovieDetail) -> DetailView {
        let mut meta = Vec::new();
        if let Some(rating) = &detail.rating {
            meta.push(format!("⭐ {rating}/10"));
        }
        for value in [&detail.rated, &detail.runtime, &detail.genre] {
            if let Some(value) = value {
                meta.push(value.clone());
            }
        }

        let rows = [
            ("Director", &detail.director),
            ("Cast", &detail.actors),
            ("Writer", &detail.writer),
            ("Language", &detail.language),
            ("Country", &detail.country),
            ("Released", &detail.released),
            ("Box Office", &detail.box_office),
        ]
        .into_iter()
        .filter_map(|(label, value)| {
            value.as_ref().map(|value| DetailRow {
                label,
                value: value.clone(),
            })
        })
        .collect();

        DetailView {
            headline: detail.headline(),
            poster: detail.poster_or_placeholder().to_string(),
            meta,
            plot: detail
                .plot
                .clone()
                .unwrap_or_else(|| PLOT_FALLBACK.to_string()),
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str, title: &str) -> MovieSummary {
        MovieSummary {
            imdb_id: id.to_string(),
            title: title.to_string(),
            year: "1999".to_string(),
            poster: None,
            rating: Some("8.7".to_string()),
        }
    }

    fn sparse_detail() -> MovieDetail {
        MovieDetail {
            imdb_id: "tt0133093".to_string(),
            title: "The Matrix".to_string(),
            year: "1999".to_string(),
            poster: None,
            rating: Some("8.7".to_string()),
            rated: None,
            runtime: Some("136 min".to_string()),
            genre: None,
            plot: None,
            director: Some("Lana Wachowski, Lilly Wachowski".to_string()),
            actors: None,
            writer: None,
            language: Some("English".to_string()),
            country: None,
            released: None,
            box_office: None,
        }
    }

    #[test]
    fn panel_projection_follows_screen_visibility() {
        let mut state = AppState::default();
        state.set_top_movies(vec![summary("tt1", "A")]);

        assert!(state.compute_viewmodel().panel.is_some());

        state.show_movie_list("heading".to_string(), vec![]);
        assert!(state.compute_viewmodel().panel.is_none());

        state.show_error("boom");
        assert!(state.compute_viewmodel().panel.is_some());
    }

    #[test]
    fn ranking_badges_decorate_first_three_panel_cards() {
        let mut state = AppState::default();
        state.set_top_movies(vec![
            summary("tt1", "A"),
            summary("tt2", "B"),
            summary("tt3", "C"),
            summary("tt4", "D"),
            summary("tt5", "E"),
        ]);

        let panel = state.compute_viewmodel().panel.unwrap();
        let badges: Vec<Option<String>> = panel.cards.iter().map(|c| c.badge.clone()).collect();
        assert_eq!(
            badges,
            vec![
                Some("TOP 1".to_string()),
                Some("TOP 2".to_string()),
                Some("TOP 3".to_string()),
                None,
                None,
            ]
        );
    }

    #[test]
    fn unavailable_panel_renders_failure_placeholder() {
        let mut state = AppState::default();
        state.set_top_movies_unavailable();

        let panel = state.compute_viewmodel().panel.unwrap();
        assert_eq!(
            panel.placeholder.as_deref(),
            Some("Failed to load top movies")
        );
        assert!(panel.cards.is_empty());
    }

    #[test]
    fn detail_rows_omit_absent_fields() {
        let mut state = AppState::default();
        state.show_movie_details(sparse_detail());

        let MainView::Detail(view) = state.compute_viewmodel().main else {
            panic!("expected detail view");
        };
        assert_eq!(view.headline, "The Matrix (1999)");
        assert_eq!(view.plot, "No plot available.");
        assert_eq!(view.meta, vec!["⭐ 8.7/10".to_string(), "136 min".to_string()]);

        let labels: Vec<&str> = view.rows.iter().map(|r| r.label).collect();
        assert_eq!(labels, vec!["Director", "Language"]);
        assert!(!view.rows.iter().any(|r| r.value == "N/A"));
    }

    #[test]
    fn empty_list_keeps_heading_with_zero_cards() {
        let mut state = AppState::default();
        state.show_movie_list("Search results for: \"zzz\"".to_string(), vec![]);

        let MainView::Grid { heading, cards } = state.compute_viewmodel().main else {
            panic!("expected grid view");
        };
        assert_eq!(heading, "Search results for: \"zzz\"");
        assert!(cards.is_empty());
    }

    #[test]
    fn card_numbers_address_list_then_panel() {
        let mut state = AppState::default();
        state.set_top_movies(vec![summary("tt1", "A"), summary("tt2", "B")]);

        // Panel cards are addressable while the panel is visible.
        assert_eq!(state.card_id(2), Some("tt2"));
        assert_eq!(state.card_id(3), None);
        assert_eq!(state.card_id(0), None);

        // On the list screen the grid takes over the numbering.
        state.show_movie_list("h".to_string(), vec![summary("tt9", "Z")]);
        assert_eq!(state.card_id(1), Some("tt9"));
        assert_eq!(state.card_id(2), None);

        // No cards are addressable while loading.
        state.show_loading();
        assert_eq!(state.card_id(1), None);
    }
}
