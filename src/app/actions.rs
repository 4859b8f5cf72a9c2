//! Side effects requested by the event handler.
//!
//! The handler never performs I/O itself; it returns a list of [`Action`]s
//! for the runtime to execute. This keeps every state transition a pure
//! function of `(state, event)` and therefore directly testable.

use crate::fetch::FetchRequest;

/// A side effect the runtime must perform after an event is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Execute `request` and feed the outcome back as a
    /// [`FetchCompleted`](crate::app::Event::FetchCompleted) event carrying
    /// the same `generation`.
    Fetch {
        generation: u64,
        request: FetchRequest,
    },

    /// Tear down and exit.
    Quit,
}
