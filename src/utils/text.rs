//! Text fitting helpers for fixed-width terminal cells
//!
//! Widths are counted in `char`s so multi-byte text is never split inside a
//! code point.

const ELLIPSIS: &str = "...";

/// Shorten `s` to at most `max_len` chars, ending in "..." when cut
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len <= ELLIPSIS.len() {
        return s.chars().take(max_len).collect();
    }
    let kept: String = s.chars().take(max_len - ELLIPSIS.len()).collect();
    format!("{kept}{ELLIPSIS}")
}

/// Greedy word wrap into at most `max_lines` lines of `width` chars
///
/// Words longer than `width` are split. When text remains after the last
/// allowed line, that line is truncated with "...".
pub fn wrap_text_lines(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace().flat_map(|w| split_long_word(w, width)) {
        let current_len = current.chars().count();
        let word_len = word.chars().count();

        if current_len == 0 {
            current = word;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(&word);
        } else {
            lines.push(std::mem::replace(&mut current, word));
            if lines.len() == max_lines {
                let last = lines.pop().unwrap_or_default();
                lines.push(with_ellipsis(&last, width));
                return lines;
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn split_long_word(word: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    chars.chunks(width).map(|c| c.iter().collect()).collect()
}

fn with_ellipsis(line: &str, width: usize) -> String {
    if line.chars().count() + ELLIPSIS.len() <= width {
        format!("{line}{ELLIPSIS}")
    } else {
        let kept: String = line
            .chars()
            .take(width.saturating_sub(ELLIPSIS.len()))
            .collect();
        format!("{kept}{ELLIPSIS}")
    }
}
