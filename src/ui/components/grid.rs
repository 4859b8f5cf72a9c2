//! Result grid component.
//!
//! Renders the search-result heading followed by one card per match. An empty
//! result set still renders the heading, so a keyword that matched nothing is
//! visibly a successful search with zero results.

use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardItem;

/// Appends the result grid to `out`.
pub fn render_grid(out: &mut String, heading: &str, cards: &[CardItem], theme: &Theme) {
    out.push('\n');
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.heading_fg));
    out.push_str(heading);
    out.push_str(Theme::reset());
    out.push('\n');

    for card in cards {
        render_card(out, card, theme);
    }
}

/// Appends one movie card (two lines) to `out`.
///
/// ```text
///  TOP 1  [1] The Shawshank Redemption (1994) ⭐ 9.3
///         https://...
/// ```
///
/// The badge segment is panel-only; grid cards render without it. The poster
/// URL line is dimmed and indented under the title.
pub(super) fn render_card(out: &mut String, card: &CardItem, theme: &Theme) {
    if let Some(badge) = &card.badge {
        out.push_str(&Theme::fg(&theme.colors.badge_fg));
        out.push_str(&Theme::bg(&theme.colors.badge_bg));
        out.push_str(&format!(" {badge} "));
        out.push_str(Theme::reset());
        out.push(' ');
    }

    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str(&format!("[{}] {} ({})", card.index, card.title, card.year));
    out.push_str(Theme::reset());

    if let Some(rating) = &card.rating {
        out.push_str(&Theme::fg(&theme.colors.rating_fg));
        out.push_str(&format!(" ⭐ {rating}"));
        out.push_str(Theme::reset());
    }
    out.push('\n');

    out.push_str(Theme::dim());
    out.push_str(&format!("    {}", card.poster));
    out.push_str(Theme::reset());
    out.push('\n');
}
