//! Shared rendering utilities.
//!
//! Small text-layout helpers used across multiple UI components. All
//! rendering in this crate appends to a `String` buffer, so these return
//! strings instead of printing.

use crate::ui::theme::Theme;

/// Centers `text` within `cols` columns by padding with spaces.
///
/// Padding is split evenly; when the width cannot divide evenly, the right
/// side gets the extra column. Text wider than `cols` is returned unchanged.
#[must_use]
pub fn center(text: &str, cols: usize) -> String {
    let width = text.chars().count();
    if width >= cols {
        return text.to_string();
    }
    let left = (cols - width) / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(cols - width - left))
}

/// Builds a horizontal rule in the theme's border color, with trailing reset.
#[must_use]
pub fn rule(theme: &Theme, cols: usize) -> String {
    format!(
        "{}{}{}",
        Theme::fg(&theme.colors.border),
        "─".repeat(cols),
        Theme::reset()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centering_pads_both_sides() {
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(center("abc", 6), " abc  ");
        assert_eq!(center("abcdefgh", 4), "abcdefgh");
    }
}
