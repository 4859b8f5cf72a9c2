//! Terminal shim: command loop wiring the library layers together.
//!
//! The binary owns all I/O. It reads line commands from stdin, translates
//! them to [`Event`]s, executes the [`Action`]s the handler returns (fetches
//! run synchronously on the blocking client), and re-renders whenever the
//! handler says the frame changed. All behavior lives in the library; this
//! file only moves data between stdin, the aggregator, and stdout.

use std::io::{self, BufRead, Write};

use cinescout::observability::init_tracing;
use cinescout::ui::render;
use cinescout::{
    handle_event, initialize, Action, Aggregator, AppState, Config, Event, FetchRequest,
    MovieGateway, OmdbClient, Result,
};

/// Fixed frame width; output is line-oriented, not a full-screen TUI.
const COLS: usize = 80;

fn main() -> Result<()> {
    let config = Config::from_env();
    init_tracing(&config);

    let mut state = initialize(&config);
    let client = OmdbClient::new(&config.base_url, &config.api_key)?;
    let aggregator = Aggregator::new(client);

    render(&state, COLS);

    // The panel batch is issued up front; its response bypasses the search
    // generation check, so it can settle at any point.
    let panel_fetch = Action::Fetch {
        generation: 0,
        request: FetchRequest::TopMovies {
            imdb_ids: config.top_movies.clone(),
        },
    };
    if run_actions(&mut state, &aggregator, vec![panel_fetch]) {
        return Ok(());
    }

    prompt()?;
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let Some(event) = parse_command(&line) else {
            println!("Unknown command. Try: t <title>, k <keyword>, i <imdb-id>, o <n>, h, q");
            prompt()?;
            continue;
        };

        let (should_render, actions) = handle_event(&mut state, &event);
        if should_render {
            render(&state, COLS);
        }
        if run_actions(&mut state, &aggregator, actions) {
            break;
        }
        prompt()?;
    }

    Ok(())
}

/// Executes handler actions, feeding fetch outcomes back in as events.
///
/// Returns `true` when a quit was requested.
fn run_actions<G: MovieGateway>(
    state: &mut AppState,
    aggregator: &Aggregator<G>,
    actions: Vec<Action>,
) -> bool {
    let mut queue = actions;
    while let Some(action) = queue.pop() {
        match action {
            Action::Quit => return true,
            Action::Fetch {
                generation,
                request,
            } => {
                let response = aggregator.execute(&request);
                let (should_render, followups) = handle_event(
                    state,
                    &Event::FetchCompleted {
                        generation,
                        response,
                    },
                );
                if should_render {
                    render(state, COLS);
                }
                queue.extend(followups);
            }
        }
    }
    false
}

/// Parses one input line into an event.
///
/// Commands take the form `<verb> [argument]`; search verbs pass the raw
/// argument through so the handler owns blank-input validation.
fn parse_command(line: &str) -> Option<Event> {
    let trimmed = line.trim();
    let (verb, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest),
        None => (trimmed, ""),
    };

    match verb {
        "t" | "title" => Some(Event::SearchTitle(rest.to_string())),
        "k" | "keyword" => Some(Event::SearchKeyword(rest.to_string())),
        "i" | "id" => Some(Event::SearchId(rest.to_string())),
        "o" | "open" => Some(Event::ActivateCard(rest.trim().parse().unwrap_or(0))),
        "h" | "home" | "b" | "back" => Some(Event::GoHome),
        "q" | "quit" => Some(Event::Quit),
        _ => None,
    }
}

fn prompt() -> Result<()> {
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_parse_to_events() {
        assert_eq!(
            parse_command("t The Matrix"),
            Some(Event::SearchTitle("The Matrix".to_string()))
        );
        assert_eq!(
            parse_command("  k  alien "),
            Some(Event::SearchKeyword(" alien".to_string()))
        );
        assert_eq!(
            parse_command("i tt0133093"),
            Some(Event::SearchId("tt0133093".to_string()))
        );
        assert_eq!(parse_command("o 3"), Some(Event::ActivateCard(3)));
        assert_eq!(parse_command("o"), Some(Event::ActivateCard(0)));
        assert_eq!(parse_command("home"), Some(Event::GoHome));
        assert_eq!(parse_command("q"), Some(Event::Quit));
        assert_eq!(parse_command("frobnicate"), None);
    }

    #[test]
    fn blank_search_argument_is_passed_through() {
        // Validation (and the error message) belongs to the handler.
        assert_eq!(parse_command("t"), Some(Event::SearchTitle(String::new())));
    }
}
