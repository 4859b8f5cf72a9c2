//! Home screen welcome component.

use crate::ui::helpers::center;
use crate::ui::theme::Theme;

/// Appends the centered welcome copy to `out`.
pub fn render_welcome(out: &mut String, title: &str, subtitle: &str, theme: &Theme, cols: usize) {
    out.push('\n');
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.heading_fg));
    out.push_str(&center(title, cols));
    out.push_str(Theme::reset());
    out.push('\n');
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str(&center(subtitle, cols));
    out.push_str(Theme::reset());
    out.push('\n');
}
