//! Status message renderer for the list area.
//!
//! Shown instead of catalog rows while nothing is loaded, while loading,
//! after a failure, and when the catalog came back empty.

use crate::ui::helpers::{center_padding, fit, position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centered two-line message starting at `row`.
///
/// The message uses `error_fg` for failures and `empty_state_fg` otherwise;
/// the subtitle is dimmed.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    let message = fit(&empty.message, cols);
    let msg_padding = center_padding(&message, cols);
    let color = if empty.is_error {
        &theme.colors.error_fg
    } else {
        &theme.colors.empty_state_fg
    };

    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", " ".repeat(msg_padding));
    print!("{message}");
    print!("{}", " ".repeat(cols.saturating_sub(msg_padding + text_width(&message))));
    print!("{}", Theme::reset());

    if empty.subtitle.is_empty() {
        return;
    }

    let subtitle = fit(&empty.subtitle, cols);
    let sub_padding = center_padding(&subtitle, cols);

    position_cursor(row + 1, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(sub_padding));
    print!("{subtitle}");
    print!("{}", " ".repeat(cols.saturating_sub(sub_padding + text_width(&subtitle))));
    print!("{}", Theme::reset());
}
