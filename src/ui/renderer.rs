//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view
//! model computation and delegation to UI components.
//!
//! # Architecture
//!
//! Rendering is a two-step process:
//!
//! 1. **View model computation**: [`AppState`] is projected into a
//!    [`UiViewModel`] with every display decision already made
//! 2. **Component rendering**: components append ANSI-styled lines to a
//!    `String` buffer, which is printed in one write
//!
//! Building the frame in a buffer keeps the output testable without a
//! terminal.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{MainView, UiViewModel};

/// Renders the current frame to stdout.
///
/// # Parameters
///
/// * `state` - Current application state
/// * `cols` - Terminal width in columns
pub fn render(state: &AppState, cols: usize) {
    let viewmodel = state.compute_viewmodel();
    print!("{}", render_to_string(&viewmodel, &state.theme, cols));
}

/// Builds the complete frame for a view model.
///
/// Layout order is fixed: header, main region, panel (when present), footer.
#[must_use]
pub fn render_to_string(vm: &UiViewModel, theme: &Theme, cols: usize) -> String {
    let mut out = String::new();

    components::render_header(&mut out, &vm.header, theme, cols);

    match &vm.main {
        MainView::Welcome { title, subtitle } => {
            components::render_welcome(&mut out, title, subtitle, theme, cols);
        }
        MainView::Loading { message } => {
            components::render_loading(&mut out, message, theme, cols);
        }
        MainView::Banner { message } => {
            components::render_banner(&mut out, message, theme, cols);
        }
        MainView::Grid { heading, cards } => {
            components::render_grid(&mut out, heading, cards, theme);
        }
        MainView::Detail(view) => {
            components::render_detail(&mut out, view, theme);
        }
    }

    if let Some(panel) = &vm.panel {
        components::render_panel(&mut out, panel, theme);
    }

    components::render_footer(&mut out, &vm.footer, theme, cols);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use crate::domain::MovieSummary;

    fn strip_ansi(text: &str) -> String {
        let mut out = String::new();
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c == '\u{001b}' {
                for esc in chars.by_ref() {
                    if esc == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    fn frame(state: &AppState) -> String {
        strip_ansi(&render_to_string(
            &state.compute_viewmodel(),
            &state.theme,
            80,
        ))
    }

    #[test]
    fn home_frame_shows_welcome_and_panel_placeholder() {
        let state = AppState::default();
        let text = frame(&state);

        assert!(text.contains("Welcome to Movie Search"));
        assert!(text.contains("Top Rated Movies"));
        assert!(text.contains("Loading top movies..."));
    }

    #[test]
    fn loading_frame_has_no_panel() {
        let mut state = AppState::default();
        state.set_top_movies(vec![MovieSummary {
            imdb_id: "tt0111161".to_string(),
            title: "The Shawshank Redemption".to_string(),
            year: "1994".to_string(),
            poster: None,
            rating: Some("9.3".to_string()),
        }]);
        state.show_loading();
        let text = frame(&state);

        assert!(text.contains("Loading..."));
        assert!(!text.contains("Top Rated Movies"));
    }

    #[test]
    fn error_frame_shows_banner_and_ranked_panel() {
        let mut state = AppState::default();
        state.set_top_movies(vec![MovieSummary {
            imdb_id: "tt0111161".to_string(),
            title: "The Shawshank Redemption".to_string(),
            year: "1994".to_string(),
            poster: None,
            rating: Some("9.3".to_string()),
        }]);
        state.show_error("Movie not found. Please try another title.");
        let text = frame(&state);

        assert!(text.contains("Movie not found. Please try another title."));
        assert!(text.contains("TOP 1"));
        assert!(text.contains("[1] The Shawshank Redemption (1994)"));
        assert!(text.contains("⭐ 9.3"));
    }

    #[test]
    fn empty_grid_frame_keeps_heading() {
        let mut state = AppState::default();
        state.show_movie_list("Search results for: \"zzz\"".to_string(), vec![]);
        let text = frame(&state);

        assert!(text.contains("Search results for: \"zzz\""));
        assert!(!text.contains("[1]"));
    }
}
