//! UI component renderers.
//!
//! Each component appends its ANSI-styled lines to a shared `String` buffer;
//! the top-level renderer decides which components a frame needs and in what
//! order. Components make no state decisions, they only lay out what the
//! viewmodel already resolved.

pub mod banner;
pub mod detail;
pub mod footer;
pub mod grid;
pub mod header;
pub mod panel;
pub mod welcome;

pub use banner::{render_banner, render_loading};
pub use detail::render_detail;
pub use footer::render_footer;
pub use grid::render_grid;
pub use header::render_header;
pub use panel::render_panel;
pub use welcome::render_welcome;
