//! Composable UI component renderers.
//!
//! Each component draws one region of the screen at the rows given by
//! [`Layout`]. Overlays (detail, confirmation) are drawn last so they sit on
//! top of the list.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`list`]: Catalog rows with favorite markers and ratings
//! - [`empty`]: Loading, failure and empty-catalog messages
//! - [`favorites`]: Favorites panel, shifted by the swipe offset
//! - [`detail`]: Item detail overlay
//! - [`confirm`]: Clear-confirmation dialog
//! - [`notice`]: Feedback line
//! - [`footer`]: Keybinding hints

mod confirm;
mod detail;
mod empty;
mod favorites;
mod footer;
mod header;
mod list;
mod notice;

use crate::ui::helpers::position_cursor;
use crate::ui::layout::Layout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ListBody, UIViewModel};

use confirm::render_confirm;
use detail::render_detail;
use empty::render_empty_state;
use favorites::render_favorites_panel;
use footer::render_footer;
use header::render_header;
use list::render_list_rows;
use notice::render_notice;

/// Renders a horizontal border line and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Blanks `count` rows starting at `row`.
fn clear_rows(row: usize, count: usize, cols: usize) {
    for offset in 0..count {
        position_cursor(row + offset, 1);
        print!("{}", " ".repeat(cols));
    }
}

/// Renders the full screen.
///
/// ```text
/// [Header]
/// [Border]
/// [Catalog rows or status message]
/// [Favorites panel: border, title, strip, hint]
/// [Notice]
/// [Footer]
/// ```
pub fn render_screen(vm: &UIViewModel, layout: &Layout, theme: &Theme) {
    let cols = layout.cols;

    let mut current_row = render_header(1, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    clear_rows(current_row, layout.list_height, cols);
    match &vm.body {
        ListBody::Items(items) => {
            render_list_rows(current_row, items, theme, cols);
        }
        ListBody::Status(status) => {
            let middle = current_row + layout.list_height.saturating_sub(2) / 2;
            render_empty_state(middle, status, theme, cols);
        }
    }

    render_favorites_panel(layout, &vm.favorites, theme);
    render_notice(layout.notice_row, vm.notice.as_ref(), theme, cols);
    render_footer(layout.footer_row, &vm.footer, theme, cols);

    if let Some(detail) = &vm.detail {
        render_detail(layout, detail, theme);
    }
    if let Some(confirm) = &vm.confirm {
        render_confirm(layout, confirm, theme);
    }
}
