use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells. Tabs count as 4 cells.
pub fn display_width(s: &str) -> usize {
    s.graphemes(true).map(grapheme_width).sum()
}

/// Truncate to at most `max_cells` cells, ending in `…` when anything was cut.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let budget = max_cells - 1;
    let mut width = 0;
    let mut out = String::new();
    for g in s.graphemes(true) {
        let gw = grapheme_width(g);
        if width + gw > budget {
            break;
        }
        width += gw;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Byte offset of the grapheme boundary after `offset`, if any
pub fn next_boundary(s: &str, offset: usize) -> Option<usize> {
    s.get(offset..)?
        .graphemes(true)
        .next()
        .map(|g| offset + g.len())
}

/// Byte offset of the grapheme boundary before `offset`, if any
pub fn prev_boundary(s: &str, offset: usize) -> Option<usize> {
    s.get(..offset)?
        .grapheme_indices(true)
        .next_back()
        .map(|(i, _)| i)
}

/// Start of the word left of `offset`, skipping whitespace first
pub fn word_start_before(s: &str, offset: usize) -> usize {
    let prefix = &s[..offset];
    let graphemes: Vec<(usize, &str)> = prefix.grapheme_indices(true).collect();
    let mut idx = graphemes.len();
    while idx > 0 && is_blank(graphemes[idx - 1].1) {
        idx -= 1;
    }
    while idx > 0 && !is_blank(graphemes[idx - 1].1) {
        idx -= 1;
    }
    graphemes.get(idx).map_or(offset, |(i, _)| *i).min(offset)
}

/// Start of the next word right of `offset`, or the end of the string
pub fn word_start_after(s: &str, offset: usize) -> usize {
    let mut past_word = false;
    for (i, g) in s[offset..].grapheme_indices(true) {
        if is_blank(g) {
            past_word = true;
        } else if past_word {
            return offset + i;
        }
    }
    s.len()
}

fn is_blank(g: &str) -> bool {
    g.chars().all(char::is_whitespace)
}

fn grapheme_width(g: &str) -> usize {
    if g == "\t" { 4 } else { UnicodeWidthStr::width(g) }
}
