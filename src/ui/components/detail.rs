//! Movie detail component.
//!
//! Renders the full detail layout: headline, meta badges, plot, labeled info
//! rows, and the poster URL. Every absent field was already dropped by the
//! viewmodel projection, so this component never sees a missing value.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailView;

/// Appends the detail layout to `out`.
pub fn render_detail(out: &mut String, view: &DetailView, theme: &Theme) {
    out.push('\n');
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.heading_fg));
    out.push_str(&view.headline);
    out.push_str(Theme::reset());
    out.push('\n');

    if !view.meta.is_empty() {
        out.push_str(&Theme::fg(&theme.colors.rating_fg));
        out.push_str(&view.meta.join("  |  "));
        out.push_str(Theme::reset());
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str(&view.plot);
    out.push_str(Theme::reset());
    out.push('\n');
    out.push('\n');

    for row in &view.rows {
        out.push_str(Theme::bold());
        out.push_str(&Theme::fg(&theme.colors.text_normal));
        out.push_str(&format!("{}: ", row.label));
        out.push_str(Theme::reset());
        out.push_str(&Theme::fg(&theme.colors.text_normal));
        out.push_str(&row.value);
        out.push_str(Theme::reset());
        out.push('\n');
    }

    out.push_str(Theme::dim());
    out.push_str(&format!("\n{}", view.poster));
    out.push_str(Theme::reset());
    out.push('\n');
}
