//! Clear-confirmation dialog renderer.

use super::detail::{frame_bottom, frame_line, frame_top};
use crate::ui::helpers::{fit, text_width};
use crate::ui::layout::Layout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ConfirmDialog;

pub fn render_confirm(layout: &Layout, dialog: &ConfirmDialog, theme: &Theme) {
    let content = text_width(&dialog.message).max(text_width(&dialog.options));
    let width = (content + 4).max(30).min(layout.cols);
    let inner = width.saturating_sub(4);
    let left = (layout.cols.saturating_sub(width)) / 2 + 1;
    let top = layout.list_top + layout.list_height.saturating_sub(5) / 2;

    frame_top(top, left, width, &fit(&format!(" {} ", dialog.title), inner), theme);
    frame_line(top + 1, left, width, &fit(&dialog.message, inner), &theme.colors.text_normal, theme);
    frame_line(top + 2, left, width, "", &theme.colors.text_normal, theme);
    frame_line(top + 3, left, width, &fit(&dialog.options, inner), &theme.colors.warning_fg, theme);
    frame_bottom(top + 4, left, width, theme);
}
