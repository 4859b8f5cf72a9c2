//! Event dispatch and state transitions.
//!
//! [`handle_event`] is the single entry point for everything that happens to
//! the application: user commands and completed fetches both arrive as
//! [`Event`]s. It mutates [`AppState`], and returns whether the UI must be
//! re-rendered together with the [`Action`]s the runtime should execute.
//! It performs no I/O of its own.

use tracing::{debug, debug_span};

use crate::app::actions::Action;
use crate::app::state::AppState;
use crate::fetch::{FetchRequest, FetchResponse};

/// Everything that can happen to the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// User submitted an exact-title search.
    SearchTitle(String),

    /// User submitted a keyword search.
    SearchKeyword(String),

    /// User submitted an IMDb-ID search.
    SearchId(String),

    /// User activated the card with this 1-based number.
    ActivateCard(usize),

    /// User asked to return to the home screen.
    GoHome,

    /// User asked to exit.
    Quit,

    /// A previously issued fetch settled.
    ///
    /// `generation` echoes the value the fetch was issued with; responses
    /// from superseded searches are dropped without touching the screen.
    /// Top-movies responses target the panel and bypass the check.
    FetchCompleted {
        generation: u64,
        response: FetchResponse,
    },
}

/// Applies one event to the state.
///
/// # Returns
///
/// `(should_render, actions)`: whether the frame must be redrawn, and the
/// side effects the runtime must execute.
pub fn handle_event(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    let _span = debug_span!("handle_event").entered();
    debug!(?event, "handling event");

    match event {
        Event::SearchTitle(raw) => submit_search(state, raw, "Please enter a movie title", |q| {
            FetchRequest::ByTitle { title: q }
        }),
        Event::SearchKeyword(raw) => submit_search(state, raw, "Please enter a keyword", |q| {
            FetchRequest::ByKeyword { keyword: q }
        }),
        Event::SearchId(raw) => submit_search(state, raw, "Please enter an IMDb ID", |q| {
            FetchRequest::ById { imdb_id: q }
        }),
        Event::ActivateCard(number) => activate_card(state, *number),
        Event::GoHome => {
            state.show_home();
            (true, vec![])
        }
        Event::Quit => (false, vec![Action::Quit]),
        Event::FetchCompleted {
            generation,
            response,
        } => apply_fetch_response(state, *generation, response),
    }
}

/// Validates the input, then issues a fetch under a fresh generation.
///
/// A blank submission is reported on the error screen (keeping the panel
/// visible) and no fetch is issued.
fn submit_search(
    state: &mut AppState,
    raw: &str,
    blank_message: &str,
    request: impl FnOnce(String) -> FetchRequest,
) -> (bool, Vec<Action>) {
    let query = raw.trim();
    if query.is_empty() {
        state.show_error(blank_message);
        return (true, vec![]);
    }

    let generation = state.next_generation();
    state.show_loading();
    (
        true,
        vec![Action::Fetch {
            generation,
            request: request(query.to_string()),
        }],
    )
}

fn activate_card(state: &mut AppState, number: usize) -> (bool, Vec<Action>) {
    let Some(imdb_id) = state.card_id(number).map(str::to_string) else {
        state.show_error(format!("No card number {number} is currently shown."));
        return (true, vec![]);
    };

    let generation = state.next_generation();
    state.show_loading();
    (
        true,
        vec![Action::Fetch {
            generation,
            request: FetchRequest::CardDetails { imdb_id },
        }],
    )
}

fn apply_fetch_response(
    state: &mut AppState,
    generation: u64,
    response: &FetchResponse,
) -> (bool, Vec<Action>) {
    // Panel updates are independent of the search lifecycle. An empty batch
    // means every identifier failed; the panel shows its failure placeholder.
    if let FetchResponse::TopMovies { summaries } = response {
        if summaries.is_empty() {
            state.set_top_movies_unavailable();
        } else {
            state.set_top_movies(summaries.clone());
        }
        return (state.panel_visible(), vec![]);
    }

    if generation != state.generation {
        debug!(
            stale = generation,
            current = state.generation,
            "dropping superseded fetch response"
        );
        return (false, vec![]);
    }

    match response {
        FetchResponse::Detail { detail } => state.show_movie_details(detail.clone()),
        FetchResponse::List { heading, summaries } => {
            state.show_movie_list(heading.clone(), summaries.clone());
        }
        FetchResponse::NotFound { message } | FetchResponse::Failed { message } => {
            state.show_error(message.clone());
        }
        FetchResponse::TopMovies { .. } => unreachable!("handled above"),
    }
    (true, vec![])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::screens::Screen;
    use crate::domain::{MovieDetail, MovieSummary};

    fn summary(id: &str) -> MovieSummary {
        MovieSummary {
            imdb_id: id.to_string(),
            title: "Alien".to_string(),
            year: "1979".to_string(),
            poster: None,
            rating: None,
        }
    }

    fn detail(id: &str) -> MovieDetail {
        MovieDetail {
            imdb_id: id.to_string(),
            title: "Alien".to_string(),
            year: "1979".to_string(),
            poster: None,
            rating: None,
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
    fn blank_title_reports_error_without_fetching() {
        let mut state = AppState::default();
        let (render, actions) = handle_event(&mut state, &Event::SearchTitle("   ".to_string()));

        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(
            state.screen,
            Screen::Error("Please enter a movie title".to_string())
        );
        assert!(state.panel_visible());
        assert_eq!(state.generation, 0);
    }

    #[test]
    fn title_search_enters_loading_and_issues_fetch() {
        let mut state = AppState::default();
        let (render, actions) =
            handle_event(&mut state, &Event::SearchTitle("  Alien ".to_string()));

        assert!(render);
        assert_eq!(state.screen, Screen::Loading);
        assert!(!state.panel_visible());
        assert_eq!(
            actions,
            vec![Action::Fetch {
                generation: 1,
                request: FetchRequest::ByTitle {
                    title: "Alien".to_string()
                },
            }]
        );
    }

    #[test]
    fn not_found_response_lands_on_error_with_panel() {
        let mut state = AppState::default();
        handle_event(&mut state, &Event::SearchId("tt9999999".to_string()));

        let (render, actions) = handle_event(
            &mut state,
            &Event::FetchCompleted {
                generation: 1,
                response: FetchResponse::NotFound {
                    message: "Movie not found with this IMDb ID.".to_string(),
                },
            },
        );

        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(
            state.screen,
            Screen::Error("Movie not found with this IMDb ID.".to_string())
        );
        assert!(state.panel_visible());
    }

    #[test]
    fn detail_response_hides_panel() {
        let mut state = AppState::default();
        handle_event(&mut state, &Event::SearchTitle("Alien".to_string()));
        handle_event(
            &mut state,
            &Event::FetchCompleted {
                generation: 1,
                response: FetchResponse::Detail {
                    detail: detail("tt0078748"),
                },
            },
        );

        assert!(matches!(state.screen, Screen::Detail(_)));
        assert!(!state.panel_visible());
    }

    #[test]
    fn superseded_response_is_dropped() {
        let mut state = AppState::default();
        handle_event(&mut state, &Event::SearchTitle("Alien".to_string()));
        handle_event(&mut state, &Event::SearchTitle("Aliens".to_string()));
        assert_eq!(state.generation, 2);

        let (render, actions) = handle_event(
            &mut state,
            &Event::FetchCompleted {
                generation: 1,
                response: FetchResponse::Detail {
                    detail: detail("tt0078748"),
                },
            },
        );

        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.screen, Screen::Loading);
    }

    #[test]
    fn top_movies_response_bypasses_generation_check() {
        let mut state = AppState::default();
        handle_event(&mut state, &Event::SearchTitle("Alien".to_string()));

        // Issued with generation 0 before any search; still applies.
        let (render, _) = handle_event(
            &mut state,
            &Event::FetchCompleted {
                generation: 0,
                response: FetchResponse::TopMovies {
                    summaries: vec![summary("tt0111161")],
                },
            },
        );

        // Panel is hidden while loading, so no redraw is needed.
        assert!(!render);
        assert!(
            matches!(&state.top_panel, crate::app::screens::TopPanel::Loaded(items) if items.len() == 1)
        );
        assert_eq!(state.screen, Screen::Loading);
    }

    #[test]
    fn all_failed_batch_marks_panel_unavailable() {
        let mut state = AppState::default();
        let (render, actions) = handle_event(
            &mut state,
            &Event::FetchCompleted {
                generation: 0,
                response: FetchResponse::TopMovies { summaries: vec![] },
            },
        );

        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(state.top_panel, crate::app::screens::TopPanel::Unavailable);
        assert_eq!(state.screen, Screen::Home);
    }

    #[test]
    fn activating_a_listed_card_fetches_its_details() {
        let mut state = AppState::default();
        state.show_movie_list(
            "Search results for: \"alien\"".to_string(),
            vec![summary("tt0078748"), summary("tt0090605")],
        );

        let (_, actions) = handle_event(&mut state, &Event::ActivateCard(2));

        assert_eq!(state.screen, Screen::Loading);
        assert_eq!(
            actions,
            vec![Action::Fetch {
                generation: 1,
                request: FetchRequest::CardDetails {
                    imdb_id: "tt0090605".to_string()
                },
            }]
        );
    }

    #[test]
    fn activating_a_missing_card_reports_error() {
        let mut state = AppState::default();
        let (render, actions) = handle_event(&mut state, &Event::ActivateCard(7));

        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(
            state.screen,
            Screen::Error("No card number 7 is currently shown.".to_string())
        );
    }

    #[test]
    fn go_home_restores_panel() {
        let mut state = AppState::default();
        state.show_movie_details(detail("tt0078748"));
        assert!(!state.panel_visible());

        let (render, actions) = handle_event(&mut state, &Event::GoHome);
        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(state.screen, Screen::Home);
        assert!(state.panel_visible());
    }

    #[test]
    fn quit_requests_teardown_without_redraw() {
        let mut state = AppState::default();
        let (render, actions) = handle_event(&mut state, &Event::Quit);
        assert!(!render);
        assert_eq!(actions, vec![Action::Quit]);
    }
}
