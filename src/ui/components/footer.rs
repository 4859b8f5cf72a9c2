//! Footer component renderer.
//!
//! Renders the key-hint line in dimmed text below a horizontal rule.

use crate::ui::helpers::rule;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Appends the footer hint bar to `out`.
pub fn render_footer(out: &mut String, footer: &FooterInfo, theme: &Theme, cols: usize) {
    out.push_str(&rule(theme, cols));
    out.push('\n');
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&footer.hints);
    out.push_str(Theme::reset());
    out.push('\n');
}
