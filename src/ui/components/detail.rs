//! Detail overlay renderer.
//!
//! A framed box centered over the list showing title, overview, rating and
//! release date, and the poster URL when the item has one.

use crate::ui::helpers::{fit, position_cursor, text_width, wrap};
use crate::ui::layout::Layout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailOverlay;

/// Longest overview shown before the remaining lines are cut.
const MAX_OVERVIEW_LINES: usize = 8;

pub fn render_detail(layout: &Layout, detail: &DetailOverlay, theme: &Theme) {
    let width = layout.cols.saturating_sub(8).clamp(20, 72).min(layout.cols);
    let inner = width.saturating_sub(4);
    let left = (layout.cols.saturating_sub(width)) / 2 + 1;

    let mut body: Vec<(String, &str)> = Vec::new();
    for line in wrap(&detail.overview, inner).into_iter().take(MAX_OVERVIEW_LINES) {
        body.push((line, theme.colors.text_normal.as_str()));
    }
    body.push((String::new(), theme.colors.text_normal.as_str()));
    body.push((fit(&detail.info, inner), theme.colors.rating_fg.as_str()));
    if let Some(url) = &detail.poster_url {
        body.push((fit(url, inner), theme.colors.text_dim.as_str()));
    }
    body.push((String::new(), theme.colors.text_normal.as_str()));
    body.push((
        fit("Enter/Esc: close   f: add to favorites", inner),
        theme.colors.text_dim.as_str(),
    ));

    let height = body.len() + 2;
    let top = layout.list_top + layout.list_height.saturating_sub(height) / 2;

    let heart = if detail.is_favorite { " ♥" } else { "" };
    let title = fit(&format!(" {}{heart} ", detail.title), inner);

    frame_top(top, left, width, &title, theme);
    for (offset, (text, color)) in body.iter().enumerate() {
        frame_line(top + 1 + offset, left, width, text, color, theme);
    }
    frame_bottom(top + height - 1, left, width, theme);
}

pub(super) fn frame_top(row: usize, left: usize, width: usize, title: &str, theme: &Theme) {
    position_cursor(row, left);
    open_fill(theme);
    let rule = width.saturating_sub(3 + text_width(title));
    print!("{}╭─{}", Theme::fg(&theme.colors.overlay_border), Theme::bold());
    print!("{title}{}", Theme::reset());
    open_fill(theme);
    print!("{}{}╮{}", Theme::fg(&theme.colors.overlay_border), "─".repeat(rule), Theme::reset());
}

pub(super) fn frame_line(row: usize, left: usize, width: usize, text: &str, color: &str, theme: &Theme) {
    let inner = width.saturating_sub(4);
    position_cursor(row, left);
    open_fill(theme);
    print!("{}│ ", Theme::fg(&theme.colors.overlay_border));
    print!("{}{text}", Theme::fg(color));
    print!("{}", " ".repeat(inner.saturating_sub(text_width(text))));
    print!("{} │{}", Theme::fg(&theme.colors.overlay_border), Theme::reset());
}

pub(super) fn frame_bottom(row: usize, left: usize, width: usize, theme: &Theme) {
    position_cursor(row, left);
    open_fill(theme);
    print!(
        "{}╰{}╯{}",
        Theme::fg(&theme.colors.overlay_border),
        "─".repeat(width.saturating_sub(2)),
        Theme::reset()
    );
}

fn open_fill(theme: &Theme) {
    if let Some(bg) = &theme.colors.overlay_bg {
        print!("{}", Theme::bg(bg));
    }
}
