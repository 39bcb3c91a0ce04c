//! Greedy word wrap to a fixed character column.
//!
//! Whitespace (newlines included) is collapsed to single spaces. Words longer
//! than the column are split at the column boundary; there is no hyphenation.

/// Wraps `text` into lines of at most `columns` characters.
pub fn wrap_lines(text: &str, columns: usize) -> Vec<String> {
    let columns = columns.max(1);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if current_len > 0 && current_len + 1 + word_len <= columns {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
            continue;
        }

        if current_len > 0 {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if word_len <= columns {
            current.push_str(word);
            current_len = word_len;
            continue;
        }

        // Over-long word: emit full-width chunks, keep the tail open.
        let chars: Vec<char> = word.chars().collect();
        let mut chunks = chars.chunks(columns).peekable();
        while let Some(chunk) = chunks.next() {
            let piece: String = chunk.iter().collect();
            if chunks.peek().is_some() {
                lines.push(piece);
            } else {
                current_len = chunk.len();
                current = piece;
            }
        }
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines
}

/// Wraps `text` and joins the lines with `\n`.
pub fn wrap_text(text: &str, columns: usize) -> String {
    wrap_lines(text, columns).join("\n")
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_empty_text() {
        assert!(wrap_lines("", 10).is_empty());
        assert!(wrap_lines("   \n ", 10).is_empty());
        assert_eq!(wrap_text("", 10), "");
    }

    #[test]
    fn test_wrap_short_text_is_one_line() {
        assert_eq!(wrap_lines("hello world", 20), vec!["hello world"]);
    }

    #[test]
    fn test_wrap_breaks_at_word_boundaries() {
        let lines = wrap_lines("the quick brown fox jumps over the lazy dog", 10);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps over", "the lazy", "dog"]);
        assert!(lines.iter().all(|l| l.chars().count() <= 10));
    }

    #[test]
    fn test_wrap_collapses_whitespace() {
        assert_eq!(wrap_text("a\n\nb   c\td", 80), "a b c d");
    }

    #[test]
    fn test_wrap_splits_long_words() {
        assert_eq!(wrap_lines("abcdefghij xy", 4), vec!["abcd", "efgh", "ij", "xy"]);
    }

    #[test]
    fn test_wrap_long_word_tail_accepts_following_words() {
        assert_eq!(wrap_lines("abcdefg hi", 5), vec!["abcde", "fg hi"]);
    }

    #[test]
    fn test_wrap_column_one() {
        assert_eq!(wrap_lines("ab c", 1), vec!["a", "b", "c"]);
        // Zero columns is treated as one.
        assert_eq!(wrap_lines("ab", 0), vec!["a", "b"]);
    }

    #[test]
    fn test_wrap_counts_chars_not_bytes() {
        assert_eq!(wrap_lines("привет мир", 6), vec!["привет", "мир"]);
    }
}
