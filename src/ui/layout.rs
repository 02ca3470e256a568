//! Screen geometry shared by rendering and mouse hit-testing.
//!
//! Rows are 1-indexed, matching ANSI cursor addressing:
//!
//! ```text
//! 1            header
//! 2            border
//! 3..=h+2      catalog list (h = list_height)
//! rows-5       favorites panel border
//! rows-4       favorites title
//! rows-3       favorites strip
//! rows-2       swipe hint
//! rows-1       notice line
//! rows         footer
//! ```

/// Rows above the list (header + border).
const TOP_CHROME: usize = 2;

/// Rows below the list (panel, notice, footer).
const BOTTOM_CHROME: usize = 6;

/// Column where the favorites strip starts.
pub const STRIP_START_COLUMN: usize = 2;

/// Longest title shown in the favorites strip before truncation.
pub const STRIP_TITLE_WIDTH: usize = 22;

/// Terminal dimensions last reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub rows: usize,
    pub cols: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { rows: 24, cols: 80 }
    }
}

/// Computed row positions for one viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub cols: usize,
    pub list_top: usize,
    pub list_height: usize,
    pub panel_border: usize,
    pub panel_title: usize,
    pub panel_strip: usize,
    pub panel_hint: usize,
    pub notice_row: usize,
    pub footer_row: usize,
}

impl Layout {
    #[must_use]
    pub fn compute(viewport: Viewport) -> Self {
        let rows = viewport.rows.max(TOP_CHROME + BOTTOM_CHROME);
        let footer_row = rows;

        Self {
            cols: viewport.cols,
            list_top: TOP_CHROME + 1,
            list_height: rows - TOP_CHROME - BOTTOM_CHROME,
            panel_border: rows - 5,
            panel_title: rows - 4,
            panel_strip: rows - 3,
            panel_hint: rows - 2,
            notice_row: rows - 1,
            footer_row,
        }
    }

    /// Zero-based position within the visible list window for `line`.
    #[must_use]
    pub const fn list_slot(&self, line: usize) -> Option<usize> {
        if line >= self.list_top && line < self.list_top + self.list_height {
            Some(line - self.list_top)
        } else {
            None
        }
    }

    /// Whether `line` falls on the favorites panel (title, strip or hint).
    #[must_use]
    pub const fn in_favorites_panel(&self, line: usize) -> bool {
        line >= self.panel_title && line <= self.panel_hint
    }
}

/// First list index to show so `selected` stays roughly centered.
#[must_use]
pub fn window_start(selected: usize, total: usize, height: usize) -> usize {
    if height == 0 || total <= height {
        return 0;
    }
    let start = selected.saturating_sub(height / 2);
    start.min(total - height)
}

/// Truncates `title` to [`STRIP_TITLE_WIDTH`] characters with an ellipsis.
#[must_use]
pub fn strip_label(title: &str) -> String {
    if title.chars().count() > STRIP_TITLE_WIDTH {
        let kept: String = title.chars().take(STRIP_TITLE_WIDTH - 1).collect();
        format!("{kept}…")
    } else {
        title.to_string()
    }
}

/// Column spans `(start, width)` of each favorite chip in the strip.
///
/// Chips are `[label]` separated by one space, starting at
/// [`STRIP_START_COLUMN`].
#[must_use]
pub fn strip_spans<'a>(titles: impl IntoIterator<Item = &'a str>) -> Vec<(usize, usize)> {
    let mut column = STRIP_START_COLUMN;
    titles
        .into_iter()
        .map(|title| {
            let width = strip_label(title).chars().count() + 2;
            let span = (column, width);
            column += width + 1;
            span
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_for_default_viewport() {
        let layout = Layout::compute(Viewport::default());
        assert_eq!(layout.list_top, 3);
        assert_eq!(layout.list_height, 16);
        assert_eq!(layout.panel_strip, 21);
        assert_eq!(layout.footer_row, 24);

        assert_eq!(layout.list_slot(3), Some(0));
        assert_eq!(layout.list_slot(18), Some(15));
        assert_eq!(layout.list_slot(19), None);
        assert!(layout.in_favorites_panel(21));
        assert!(!layout.in_favorites_panel(19));
    }

    #[test]
    fn tiny_viewport_has_empty_list() {
        let layout = Layout::compute(Viewport { rows: 3, cols: 20 });
        assert_eq!(layout.list_height, 0);
        assert_eq!(layout.list_slot(3), None);
    }

    #[test]
    fn window_keeps_selection_visible() {
        assert_eq!(window_start(0, 5, 10), 0);
        assert_eq!(window_start(3, 100, 10), 0);
        assert_eq!(window_start(50, 100, 10), 45);
        assert_eq!(window_start(99, 100, 10), 90);
    }

    #[test]
    fn strip_spans_are_contiguous() {
        let spans = strip_spans(["Up", "Heat"]);
        assert_eq!(spans, vec![(2, 4), (7, 6)]);
    }

    #[test]
    fn long_titles_are_truncated() {
        let label = strip_label("The Lord of the Rings: The Fellowship of the Ring");
        assert_eq!(label.chars().count(), STRIP_TITLE_WIDTH);
        assert!(label.ends_with('…'));
    }
}
