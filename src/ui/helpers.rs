//! Shared rendering utilities.
//!
//! Width calculations work on `char` counts, not bytes, so titles with
//! accents or symbols (`★`, `♥`) pad and truncate correctly.

/// Positions the cursor at a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of characters in `text`.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Truncates `text` to at most `width` characters, ending in `…` when cut.
///
/// # Example
///
/// ```rust
/// use marquee::ui::helpers::fit;
///
/// assert_eq!(fit("Interstellar", 8), "Interst…");
/// assert_eq!(fit("Up", 8), "Up");
/// ```
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    if text_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut kept: String = text.chars().take(width - 1).collect();
    kept.push('…');
    kept
}

/// Greedy word wrap to lines of at most `width` characters.
///
/// Words longer than `width` are hard-split.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let mut word = word.to_string();
        while text_width(&word) > width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            let head: String = word.chars().take(width).collect();
            word = word.chars().skip(width).collect();
            lines.push(head);
        }
        if word.is_empty() {
            continue;
        }

        let needed = if line.is_empty() { text_width(&word) } else { text_width(&line) + 1 + text_width(&word) };
        if needed > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&word);
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Left padding that centers `text` in `cols` columns.
#[must_use]
pub fn center_padding(text: &str, cols: usize) -> usize {
    cols.saturating_sub(text_width(text)) / 2
}
