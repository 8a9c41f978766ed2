//! Compact multi-line titles for graph labels and tooltips.
//!
//! Text is squeezed into at most `max_lines` lines of at most
//! `max_words_per_line` words. Lines prefer to end after punctuation and avoid
//! ending right before an article, preposition or conjunction. Leftover words
//! are replaced by a trailing `...`.

use serde::Serialize;

const ELLIPSIS: &str = "...";

const BREAK_PUNCTUATION: &[char] = &[',', ';', ':', '.', '!', '?'];

/// Words a line should not end right before.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "of", "in", "on", "at", "to", "for", "and", "or", "but", "with", "from",
    "by",
];

/// How much text a title may hold. Zero bounds behave as 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TitleBounds {
    pub max_words_per_line: usize,
    pub max_lines: usize,
}

impl TitleBounds {
    pub const fn new(max_words_per_line: usize, max_lines: usize) -> Self {
        Self {
            max_words_per_line,
            max_lines,
        }
    }
}

/// Format `text` within `bounds`.
///
/// Text that fits on one line comes back whitespace-normalized and otherwise
/// untouched.
///
/// ```
/// use reasoning_graph::title::{TitleBounds, smart_title};
///
/// assert_eq!(smart_title("  Short \n text ", TitleBounds::new(8, 2)), "Short text");
/// assert_eq!(
///     smart_title("one two three four The five six", TitleBounds::new(4, 2)),
///     "one two three\nfour The five six"
/// );
/// ```
pub fn smart_title(text: &str, bounds: TitleBounds) -> String {
    let per_line = bounds.max_words_per_line.max(1);
    let max_lines = bounds.max_lines.max(1);

    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= per_line {
        return words.join(" ");
    }

    let mut lines: Vec<String> = Vec::with_capacity(max_lines);
    let mut cursor = 0;
    for line_num in 0..max_lines {
        if cursor >= words.len() {
            break;
        }

        let end = (cursor + per_line).min(words.len());
        let mut line = &words[cursor..end];
        if line_num + 1 < max_lines && end < words.len() {
            line = natural_break(line, words[end]);
        }

        // Words given back by the break start the next line.
        cursor += line.len();
        lines.push(line.join(" "));
    }

    if cursor < words.len() {
        if let Some(last) = lines.last_mut() {
            last.push_str(ELLIPSIS);
        }
    }

    lines.join("\n")
}

/// Shorten a full line to a better break point, given the word that would follow it.
fn natural_break<'a, 'w>(line: &'a [&'w str], next: &str) -> &'a [&'w str] {
    let len = line.len();

    // Look at the last three words, never the first one on the line.
    for i in (len.saturating_sub(3).max(1)..len).rev() {
        if line[i].ends_with(BREAK_PUNCTUATION) {
            return &line[..=i];
        }
    }

    if len > 3 && STOP_WORDS.contains(&next.to_lowercase().as_str()) {
        return &line[..len - 1];
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn fmt(text: &str, words: usize, lines: usize) -> String {
        smart_title(text, TitleBounds::new(words, lines))
    }

    #[test]
    fn short_text_is_normalized_only() {
        assert_eq!(fmt("  Short \n\t text  ", 8, 2), "Short text");
        assert_eq!(fmt("", 8, 2), "");
        // Fits on one line even with a single allowed line: no marker.
        assert_eq!(fmt("one two three", 3, 1), "one two three");
    }

    #[test]
    fn plain_wrap_with_truncation() {
        assert_eq!(
            fmt(
                "This is a longer piece of text that will need to be broken into multiple \
                 lines for display in a graphviz node because it contains too many words",
                8,
                2
            ),
            "This is a longer piece of text that\nwill need to be broken into multiple lines..."
        );
    }

    #[test]
    fn last_line_is_not_adjusted() {
        assert_eq!(
            fmt(
                "The quick brown fox jumps over the lazy dog. Meanwhile, in the forest, \
                 other animals were preparing for winter.",
                8,
                2
            ),
            "The quick brown fox jumps over the lazy\n\
             dog. Meanwhile, in the forest, other animals were..."
        );
    }

    #[test]
    fn breaks_after_punctuation() {
        assert_eq!(
            fmt("Alpha beta gamma, delta epsilon zeta eta theta iota kappa", 5, 3),
            "Alpha beta gamma,\ndelta epsilon zeta eta theta\niota kappa"
        );
    }

    #[test]
    fn punctuation_on_first_word_is_ignored() {
        assert_eq!(
            fmt("First, second third fourth fifth sixth", 3, 2),
            "First, second third\nfourth fifth sixth"
        );
    }

    #[test]
    fn punctuation_outside_window_is_ignored() {
        assert_eq!(
            fmt(
                "Natural Language Processing, Machine Learning, and Deep Learning are \
                 important fields in Computer Science",
                8,
                2
            ),
            "Natural Language Processing, Machine Learning, and Deep Learning\n\
             are important fields in Computer Science"
        );
    }

    #[test]
    fn avoids_breaking_before_stop_word() {
        assert_eq!(
            fmt("alpha beta gamma delta epsilon of zeta eta theta", 5, 2),
            "alpha beta gamma delta\nepsilon of zeta eta theta"
        );
        // Case-insensitive on the following word.
        assert_eq!(
            fmt("one two three four The five six", 4, 2),
            "one two three\nfour The five six"
        );
    }

    #[test]
    fn short_lines_keep_word_before_stop_word() {
        assert_eq!(fmt("a b c d e f g h i j k l m n o p q r s t", 3, 2), "a b c\nd e f...");
        assert_eq!(fmt("x y z the w", 3, 2), "x y z\nthe w");
    }

    #[test]
    fn single_line_truncates() {
        assert_eq!(
            fmt("one two three four five six seven eight nine", 8, 1),
            "one two three four five six seven eight..."
        );
    }

    #[test]
    fn exact_fill_has_no_marker() {
        assert_eq!(
            fmt("one two three four five six seven eight nine ten", 4, 3),
            "one two three four\nfive six seven eight\nnine ten"
        );
    }

    #[test]
    fn zero_bounds_behave_as_one() {
        assert_eq!(fmt("one two", 0, 0), "one...");
    }

    proptest! {
        #[test]
        fn respects_bounds(
            words in prop::collection::vec("[a-z]{1,6}[,.;]?", 0..60),
            per_line in 1usize..12,
            max_lines in 1usize..6,
        ) {
            let text = words.join(" ");
            let out = fmt(&text, per_line, max_lines);
            let lines: Vec<&str> = out.split('\n').collect();
            prop_assert!(lines.len() <= max_lines);
            for line in lines {
                prop_assert!(line.split_whitespace().count() <= per_line);
            }
        }

        #[test]
        fn fitting_text_is_idempotent(words in prop::collection::vec("[a-z]{1,8}", 0..8)) {
            let text = words.join(" ");
            let once = fmt(&text, 8, 2);
            prop_assert_eq!(&once, &text);
            prop_assert_eq!(fmt(&once, 8, 2), once.clone());
        }
    }
}
