//! Catalog list renderer.
//!
//! Each row is a favorite marker, the title, and a right-aligned meta
//! column (year and rating). The cursor row is drawn with the selection
//! colors across the full width.

use crate::ui::helpers::{fit, position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Width reserved for the meta column, e.g. `"2024  ★ 7.4"`.
const META_WIDTH: usize = 12;

/// Renders all rows starting at `row` and returns the row after the last.
pub fn render_list_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_list_row(current_row, item, theme, cols);
    }
    current_row
}

fn render_list_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let base_fg = if item.is_selected {
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        &theme.colors.selection_fg
    } else {
        &theme.colors.text_normal
    };

    if item.is_favorite {
        print!("{}♥ ", Theme::fg(&theme.colors.favorite_fg));
    } else {
        print!("  ");
    }

    let title_width = cols.saturating_sub(META_WIDTH + 3);
    let title = fit(&item.title, title_width);
    print!("{}{title}", Theme::fg(base_fg));
    print!("{}", " ".repeat(title_width.saturating_sub(text_width(&title)) + 1));

    let meta = fit(&item.meta, META_WIDTH);
    let meta_fg = if item.is_selected {
        base_fg
    } else {
        &theme.colors.rating_fg
    };
    print!("{}{:>width$}", Theme::fg(meta_fg), meta, width = META_WIDTH);

    let used = 3 + title_width + META_WIDTH;
    print!("{}", " ".repeat(cols.saturating_sub(used)));
    print!("{}", Theme::reset());
    row + 1
}
