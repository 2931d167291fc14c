use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate to fit within `max_cells`, appending `…` if anything was cut.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    let budget = max_cells - 1;
    let mut width = 0;
    let mut result = String::new();
    for grapheme in s.graphemes(true) {
        let gw = display_width(grapheme);
        if width + gw > budget {
            break;
        }
        width += gw;
        result.push_str(grapheme);
    }
    result.push('\u{2026}');
    result
}

/// Pad with spaces on the right up to `cells` terminal cells.
pub fn pad_to_width(s: &str, cells: usize) -> String {
    let w = display_width(s);
    if w >= cells {
        return s.to_string();
    }
    format!("{}{}", s, " ".repeat(cells - w))
}

/// Next grapheme boundary after `byte_offset`. Returns None if at end.
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset >= s.len() {
        return None;
    }
    match s[byte_offset..].grapheme_indices(true).nth(1) {
        Some((i, _)) => Some(byte_offset + i),
        None => Some(s.len()),
    }
}

/// Previous grapheme boundary before `byte_offset`. Returns None if at start.
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset == 0 {
        return None;
    }
    s[..byte_offset]
        .grapheme_indices(true)
        .last()
        .map(|(i, _)| i)
}

/// Delete the grapheme before `cursor`, returning the new cursor.
pub fn delete_prev_grapheme(s: &mut String, cursor: usize) -> usize {
    match prev_grapheme_boundary(s, cursor) {
        Some(start) => {
            s.replace_range(start..cursor, "");
            start
        }
        None => cursor,
    }
}

/// Byte range of `s` that fits in `cells` columns with the cursor (a byte
/// offset) on screen and one cell left for it.
pub fn scroll_window(s: &str, cursor: usize, cells: usize) -> (usize, usize) {
    let cursor = cursor.min(s.len());
    let mut start = 0;
    let mut leading = s[..cursor].grapheme_indices(true);
    while display_width(&s[start..cursor]) + 1 > cells {
        match leading.next() {
            Some((i, g)) => start = i + g.len(),
            None => break,
        }
    }

    let mut end = start;
    for (i, g) in s[start..].grapheme_indices(true) {
        let next = start + i + g.len();
        if display_width(&s[start..next]) > cells {
            break;
        }
        end = next;
    }
    (start, end)
}
