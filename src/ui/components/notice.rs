//! Notice line renderer.

use crate::ui::helpers::{fit, position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::NoticeLine;

/// Renders the notice on `row`, or blanks the row when there is none.
pub fn render_notice(row: usize, notice: Option<&NoticeLine>, theme: &Theme, cols: usize) {
    position_cursor(row, 1);
    let Some(notice) = notice else {
        print!("{}", " ".repeat(cols));
        return;
    };

    let text = fit(&notice.text, cols.saturating_sub(1));
    print!(" {}{text}", Theme::fg(theme.colors.notice_fg(notice.level)));
    print!("{}", " ".repeat(cols.saturating_sub(text_width(&text) + 1)));
    print!("{}", Theme::reset());
}
