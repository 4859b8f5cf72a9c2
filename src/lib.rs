//! Cinescout: a terminal client for the OMDb movie database.
//!
//! Cinescout looks movies up by exact title, keyword, or IMDb ID, renders the
//! results as ANSI-styled cards, and keeps a curated top-movies panel beside
//! the home and error screens:
//! - Exact-title and IMDb-ID lookups resolving to a full detail view
//! - Keyword search resolving to a numbered result grid
//! - Concurrent, failure-isolating batch fetch for the top-movies panel
//! - Theming via built-in or custom TOML color schemes
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Shim (main.rs)                            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │
//! ┌───────────────┐   ┌───────────────────────────────┐
//! │ UI Layer      │   │ Fetch Layer (fetch/)          │
//! │ (ui/)         │   │ - Request/response protocol   │
//! │ - Rendering   │   │ - Outcome reduction           │
//! │ - Theming     │   │ - Concurrent batch fetch      │
//! │ - Components  │   └───────────────────────────────┘
//! └───────────────┘                  │
//!                    ┌───────────────────────────────┐
//!                    │ API Layer (api/)              │
//!                    │ - MovieGateway trait          │
//!                    │ - OMDb HTTP client            │
//!                    │ - Response envelopes          │
//!                    └───────────────────────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Movie model (domain/movie)                       │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - File-backed tracing                              │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (movies, errors)
//! - [`fetch`]: Fetch aggregation and the top-movies batch
//! - [`api`]: OMDb gateway trait and HTTP client
//! - [`infrastructure`]: Platform utilities (paths)
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: File-backed tracing
//!
//! # Configuration
//!
//! The application is configured through environment variables, all optional:
//!
//! ```text
//! CINESCOUT_API_KEY      OMDb API key
//! CINESCOUT_BASE_URL     API base URL
//! CINESCOUT_TOP_MOVIES   Comma-separated IMDb IDs for the panel
//! CINESCOUT_THEME        Built-in theme name
//! CINESCOUT_THEME_FILE   Path to a custom TOML theme
//! CINESCOUT_TRACE_LEVEL  Tracing level (overridden by RUST_LOG)
//! ```
//!
//! # Example
//!
//! ```rust
//! use cinescout::{handle_event, initialize, Config, Event};
//!
//! let config = Config::default();
//! let mut state = initialize(&config);
//!
//! let (should_render, actions) =
//!     handle_event(&mut state, &Event::SearchTitle("Alien".to_string()));
//! assert!(should_render);
//! assert_eq!(actions.len(), 1);
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod fetch;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use api::{MovieGateway, OmdbClient};
pub use app::{handle_event, Action, AppState, Event, Screen, TopPanel};
pub use domain::{CinescoutError, MovieDetail, MovieSummary, Result};
pub use fetch::{Aggregator, FetchRequest, FetchResponse};
pub use ui::Theme;

use std::env;

/// IMDb identifiers shown in the top-movies panel by default.
///
/// The Shawshank Redemption, The Godfather, The Dark Knight, The Godfather
/// Part II, and 12 Angry Men, in panel order.
const DEFAULT_TOP_MOVIES: [&str; 5] = [
    "tt0111161",
    "tt0068646",
    "tt0468569",
    "tt0071562",
    "tt0050083",
];

/// Application configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// OMDb API key sent with every request.
    pub api_key: String,

    /// API base URL. Default: `https://www.omdbapi.com/`
    pub base_url: String,

    /// Ordered IMDb IDs for the top-movies panel.
    pub top_movies: Vec<String>,

    /// Built-in theme name to use.
    ///
    /// Options: `deep-sea`, `catppuccin-mocha`. Ignored if `theme_file` is
    /// set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Tracing level for the log file.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: "ee54881f".to_string(),
            base_url: "https://www.omdbapi.com/".to_string(),
            top_movies: DEFAULT_TOP_MOVIES.iter().map(ToString::to_string).collect(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Builds a configuration from `CINESCOUT_*` environment variables.
    ///
    /// Unset or empty variables fall back to the defaults;
    /// `CINESCOUT_TOP_MOVIES` is comma-separated with empty entries filtered
    /// out.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let top_movies = read_var("CINESCOUT_TOP_MOVIES")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|id| !id.is_empty())
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.top_movies);

        Self {
            api_key: read_var("CINESCOUT_API_KEY").unwrap_or(defaults.api_key),
            base_url: read_var("CINESCOUT_BASE_URL").unwrap_or(defaults.base_url),
            top_movies,
            theme_name: read_var("CINESCOUT_THEME"),
            theme_file: read_var("CINESCOUT_THEME_FILE"),
            trace_level: read_var("CINESCOUT_TRACE_LEVEL"),
        }
    }
}

fn read_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Initializes the application state from configuration.
///
/// Resolves the theme (custom file first, then built-in name, then default)
/// and returns an [`AppState`] on the home screen with the top-movies panel
/// in its loading state. Theme resolution never fails; a broken theme is
/// logged and replaced with the default.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing cinescout");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            let path = infrastructure::expand_tilde(theme_file);
            Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState {
        theme,
        ..AppState::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_starts_on_home_with_loading_panel() {
        let state = initialize(&Config::default());
        assert_eq!(state.screen, Screen::Home);
        assert_eq!(state.top_panel, TopPanel::Loading);
        assert_eq!(state.generation, 0);
        assert_eq!(state.theme.name, "deep-sea");
    }

    #[test]
    fn named_theme_is_resolved() {
        let config = Config {
            theme_name: Some("catppuccin-mocha".to_string()),
            ..Config::default()
        };
        assert_eq!(initialize(&config).theme.name, "catppuccin-mocha");
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config = Config {
            theme_name: Some("no-such-theme".to_string()),
            ..Config::default()
        };
        assert_eq!(initialize(&config).theme.name, "deep-sea");
    }
}
