//! Error banner and loading indicator components.
//!
//! Both render a single centered message line; they differ only in styling.
//! The banner uses the theme's alert colors, the loading indicator its accent
//! color.

use crate::ui::helpers::center;
use crate::ui::theme::Theme;

/// Appends the error banner to `out`.
///
/// An empty message still renders the colored bar.
pub fn render_banner(out: &mut String, message: &str, theme: &Theme, cols: usize) {
    out.push('\n');
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.banner_fg));
    out.push_str(&Theme::bg(&theme.colors.banner_bg));
    out.push_str(&center(message, cols));
    out.push_str(Theme::reset());
    out.push('\n');
}

/// Appends the in-flight fetch indicator to `out`.
pub fn render_loading(out: &mut String, message: &str, theme: &Theme, cols: usize) {
    out.push('\n');
    out.push_str(&Theme::fg(&theme.colors.loading_fg));
    out.push_str(&center(message, cols));
    out.push_str(Theme::reset());
    out.push('\n');
}
