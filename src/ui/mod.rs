//! Terminal UI layer.
//!
//! Everything the user sees lives here. The layer follows a strict MVVM
//! split: the state layer computes a [`viewmodel::UiViewModel`] with every
//! display decision resolved, and the components here only lay it out as
//! ANSI-styled text.
//!
//! # Organization
//!
//! - [`viewmodel`]: Render-ready projection types
//! - [`theme`]: Color schemes and ANSI escape helpers
//! - [`renderer`]: Frame assembly entry point
//! - [`components`]: Per-region renderers (header, grid, detail, panel, ...)
//! - [`helpers`]: Shared layout utilities

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_to_string};
pub use theme::Theme;
pub use viewmodel::UiViewModel;
