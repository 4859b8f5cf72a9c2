//! Application layer: state machine, events, and actions.
//!
//! All behavior flows through one pure entry point: the runtime feeds
//! [`Event`]s into [`handle_event`], which mutates [`AppState`] and returns
//! the [`Action`]s to execute. Rendering reads the state through
//! [`AppState::compute_viewmodel`] and never the other way around.
//!
//! # Organization
//!
//! - [`screens`]: The [`Screen`] and [`TopPanel`] view-state enums
//! - [`state`]: [`AppState`] with its transitions and viewmodel projection
//! - [`handler`]: [`Event`] dispatch
//! - [`actions`]: Side effects requested from the runtime

pub mod actions;
pub mod handler;
pub mod screens;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use screens::{Screen, TopPanel};
pub use state::AppState;
