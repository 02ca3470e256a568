//! Footer component renderer.

use crate::ui::helpers::{center_padding, fit, position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders centered keybinding hints on `row`, truncated to the terminal
/// width.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text = fit(&footer.keybindings, cols);
    let padding = center_padding(&help_text, cols);

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{help_text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_width(&help_text))));
    print!("{}", Theme::reset());
    row + 1
}
