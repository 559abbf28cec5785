//! Greedy word wrap with an indent prefix.
//!
//! The invariants the layout engine leans on:
//! - whitespace runs collapse; empty input yields no lines at all
//! - every emitted line starts with exactly `prefix` spaces
//! - no emitted line carries trailing whitespace
//! - every emitted line carries at least one character of content, even
//!   when `prefix >= width`

/// Reflow `text` into lines of at most `width` columns, each starting with
/// `prefix` spaces. Width is measured in characters, prefix included.
///
/// A word wider than the room between prefix and width is hard-broken into
/// room-sized chunks, each on its own line.
pub fn wrap(text: &str, prefix: usize, width: usize) -> Vec<String> {
    let indent = " ".repeat(prefix);
    let room = if width > prefix { width - prefix } else { 1 };

    let mut lines = Vec::new();
    // Content of the line being filled, without the indent.
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let mut word = word;
        let mut word_len = word.chars().count();

        if current_len > 0 && current_len + 1 + word_len <= room {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
            continue;
        }

        if current_len > 0 {
            lines.push(format!("{indent}{current}"));
            current.clear();
            current_len = 0;
        }

        while word_len > room {
            let (head, tail) = split_at_chars(word, room);
            lines.push(format!("{indent}{head}"));
            word = tail;
            word_len -= room;
        }
        current.push_str(word);
        current_len = word_len;
    }

    if current_len > 0 {
        lines.push(format!("{indent}{current}"));
    }
    lines
}

fn split_at_chars(s: &str, n: usize) -> (&str, &str) {
    match s.char_indices().nth(n) {
        Some((idx, _)) => s.split_at(idx),
        None => (s, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
                         Pellentesque facilisis nisi vel nibh luctus sit amet semper \
                         tellus gravida.";

    #[test]
    fn empty_text_yields_no_lines() {
        assert!(wrap("", 0, 70).is_empty());
        assert!(wrap("  \t\n ", 4, 70).is_empty());
    }

    #[test]
    fn short_text_is_one_line() {
        assert_eq!(wrap("Some text", 2, 70), vec!["  Some text"]);
    }

    #[test]
    fn interior_whitespace_collapses() {
        assert_eq!(wrap("a\tb\n  c", 0, 70), vec!["a b c"]);
    }

    #[test]
    fn fills_to_the_width_boundary() {
        let lines = wrap(LOREM, 0, 70);
        assert_eq!(
            lines[0],
            "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Pellentesque"
        );
        assert_eq!(lines[0].chars().count(), 70);
        assert_eq!(
            lines[1],
            "facilisis nisi vel nibh luctus sit amet semper tellus gravida."
        );
    }

    #[test]
    fn prefix_shrinks_the_room() {
        let lines = wrap(LOREM, 2, 70);
        assert_eq!(
            lines,
            vec![
                "  Lorem ipsum dolor sit amet, consectetur adipiscing elit.",
                "  Pellentesque facilisis nisi vel nibh luctus sit amet semper tellus",
                "  gravida.",
            ]
        );
    }

    #[test]
    fn overlong_word_hard_breaks() {
        assert_eq!(wrap("abcdefghij", 0, 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn overlong_word_after_content_starts_fresh() {
        assert_eq!(wrap("hi abcdefghij", 0, 4), vec!["hi", "abcd", "efgh", "ij"]);
    }

    #[test]
    fn prefix_at_or_past_width_still_progresses() {
        assert_eq!(
            wrap("word", 6, 4),
            vec!["      w", "      o", "      r", "      d"]
        );
    }

    #[test]
    fn no_trailing_whitespace() {
        for line in wrap(LOREM, 3, 20) {
            assert_eq!(line, line.trim_end());
        }
    }

    #[test]
    fn multibyte_words_split_on_char_boundaries() {
        assert_eq!(wrap("déjàvu", 0, 3), vec!["déj", "àvu"]);
    }
}
