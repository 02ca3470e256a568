//! Favorites panel renderer.
//!
//! The strip of chips is drawn shifted horizontally by the gesture offset
//! so a swipe visibly drags the panel. Chips shifted past the left edge are
//! clipped rather than wrapped.

use crate::ui::helpers::{fit, position_cursor, text_width};
use crate::ui::layout::{Layout, STRIP_START_COLUMN};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FavoritesPanel;

pub fn render_favorites_panel(layout: &Layout, panel: &FavoritesPanel, theme: &Theme) {
    let cols = layout.cols;

    position_cursor(layout.panel_border, 1);
    print!("{}{}{}", Theme::fg(&theme.colors.border), "─".repeat(cols), Theme::reset());

    position_cursor(layout.panel_title, 1);
    if panel.focused {
        print!("{}", Theme::bold());
    }
    let title = fit(&panel.title, cols.saturating_sub(1));
    print!(" {}{title}", Theme::fg(&theme.colors.favorite_fg));
    print!("{}", " ".repeat(cols.saturating_sub(text_width(&title) + 1)));
    print!("{}", Theme::reset());

    render_strip(layout, panel, theme);

    position_cursor(layout.panel_hint, 1);
    let hint = fit(&panel.hint, cols.saturating_sub(1));
    print!("{}{} {hint}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(cols.saturating_sub(text_width(&hint) + 1)));
    print!("{}", Theme::reset());
}

fn render_strip(layout: &Layout, panel: &FavoritesPanel, theme: &Theme) {
    let cols = layout.cols;
    position_cursor(layout.panel_strip, 1);

    if panel.chips.is_empty() {
        let room = cols.saturating_sub(STRIP_START_COLUMN);
        let empty = fit("No favorites yet. Right-click or press f to add one.", room);
        print!("{}{}", " ".repeat(STRIP_START_COLUMN), Theme::fg(&theme.colors.text_dim));
        print!("{empty}");
        print!("{}", " ".repeat(room.saturating_sub(text_width(&empty))));
        print!("{}", Theme::reset());
        return;
    }

    // One cell per column of the unshifted strip: the char and whether it
    // belongs to a selected chip (`None` for gaps).
    let mut cells: Vec<(char, Option<bool>)> = Vec::new();
    for chip in &panel.chips {
        let text = format!("[{}]", chip.label);
        cells.extend(text.chars().map(|c| (c, Some(chip.is_selected))));
        cells.push((' ', None));
    }

    let origin = i64::try_from(STRIP_START_COLUMN).unwrap_or(0) + i64::from(panel.shift);
    let mut current: Option<Option<bool>> = None;

    for column in 0..cols {
        let index = i64::try_from(column).unwrap_or(i64::MAX) - origin;
        let (ch, style) = usize::try_from(index)
            .ok()
            .and_then(|index| cells.get(index).copied())
            .unwrap_or((' ', None));

        if current != Some(style) {
            print!("{}", Theme::reset());
            match style {
                Some(true) => print!(
                    "{}{}",
                    Theme::fg(&theme.colors.selection_fg),
                    Theme::bg(&theme.colors.selection_bg)
                ),
                Some(false) => print!("{}", Theme::fg(&theme.colors.favorite_fg)),
                None => {}
            }
            current = Some(style);
        }
        print!("{ch}");
    }
    print!("{}", Theme::reset());
}
