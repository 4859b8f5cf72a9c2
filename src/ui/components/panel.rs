//! Top-movies panel component.
//!
//! Renders the curated panel that accompanies the home and error screens:
//! a title, then either a placeholder line (loading, failed, empty) or the
//! ranked movie cards.

use crate::ui::components::grid::render_card;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PanelView;

/// Appends the top-movies panel to `out`.
pub fn render_panel(out: &mut String, panel: &PanelView, theme: &Theme) {
    out.push('\n');
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.panel_fg));
    out.push_str(&panel.title);
    out.push_str(Theme::reset());
    out.push('\n');

    if let Some(placeholder) = &panel.placeholder {
        out.push_str(Theme::dim());
        out.push_str(placeholder);
        out.push_str(Theme::reset());
        out.push('\n');
        return;
    }

    for card in &panel.cards {
        render_card(out, card, theme);
    }
}
