//! Header component renderer.
//!
//! Renders the title bar with centered text, theme-aware colors, and optional
//! background styling, followed by a horizontal rule.

use crate::ui::helpers::{center, rule};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Appends the header title bar to `out`.
///
/// The title is centered, bold, and padded to the full width; themes may add
/// a background color for the bar.
pub fn render_header(out: &mut String, header: &HeaderInfo, theme: &Theme, cols: usize) {
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        out.push_str(&Theme::bg(bg));
    }
    out.push_str(&center(&header.title, cols));
    out.push_str(Theme::reset());
    out.push('\n');
    out.push_str(&rule(theme, cols));
    out.push('\n');
}
