//! Screen and panel state types for the application.
//!
//! This module defines the view-state machine: the [`Screen`] enum naming the
//! mutually exclusive main-region states, and the [`TopPanel`] enum for the
//! curated side panel. Exactly one `Screen` is active at a time; transitioning
//! to a new one fully replaces the rendered content region with no diffing and
//! no retained sub-state.

use crate::domain::{MovieDetail, MovieSummary};

/// The single currently-rendered top-level view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Static welcome message; the top-movies panel is shown alongside.
    Home,

    /// A fetch is in flight; replaces the main region until it settles.
    Loading,

    /// A reportable condition with its human-readable message.
    ///
    /// An empty message is permitted and renders an empty banner.
    Error(String),

    /// A heading plus a grid of result cards.
    List {
        /// Heading above the grid (e.g. `Search results for: "alien"`).
        heading: String,
        /// Cards in the order the API returned them; may be empty.
        items: Vec<MovieSummary>,
    },

    /// Full detail layout for one movie.
    Detail(MovieDetail),
}

impl Screen {
    /// Whether the top-movies panel accompanies this screen.
    ///
    /// The panel is visible on [`Home`](Self::Home) and restored to visible on
    /// [`Error`](Self::Error); it is hidden for every other screen. Deriving
    /// visibility from the active screen (rather than toggling a separate
    /// flag) makes the invariant impossible to violate.
    #[must_use]
    pub const fn panel_visible(&self) -> bool {
        matches!(self, Self::Home | Self::Error(_))
    }
}

/// State of the curated top-movies side panel.
///
/// Independent of [`Screen`]: the panel's contents survive navigation and are
/// only ever replaced by a settled batch fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopPanel {
    /// Batch fetch still in flight.
    Loading,

    /// Batch fetch settled with at least one surviving summary.
    Loaded(Vec<MovieSummary>),

    /// Every identifier in the batch failed; the panel renders its failure
    /// placeholder, never a hard failure screen.
    Unavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_accompanies_home_and_error_only() {
        assert!(Screen::Home.panel_visible());
        assert!(Screen::Error("nope".to_string()).panel_visible());
        assert!(!Screen::Loading.panel_visible());
        assert!(!Screen::List {
            heading: String::new(),
            items: vec![]
        }
        .panel_visible());
    }
}
