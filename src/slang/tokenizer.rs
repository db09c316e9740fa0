//! Word-boundary scanner.
//!
//! A word token is a maximal run of ASCII letters and apostrophes. A run only
//! counts when neither neighbour is a word character (any alphanumeric or
//! `_`), so `hi` inside `history` or `hi5` is never a token. Apostrophes at
//! the edges of a run stay outside the token.

use std::ops::Range;

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '\''
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Byte ranges of every word token in `text`, in order.
pub fn word_spans(text: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut prev: Option<char> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if !is_token_char(c) {
            prev = Some(c);
            continue;
        }

        let mut end = start + c.len_utf8();
        let mut last = c;
        while let Some(&(i, next)) = chars.peek() {
            if !is_token_char(next) {
                break;
            }
            end = i + next.len_utf8();
            last = next;
            chars.next();
        }

        let bounded_before = prev.map_or(true, |p| !is_word_char(p));
        let bounded_after = chars.peek().map_or(true, |&(_, n)| !is_word_char(n));
        prev = Some(last);
        if !(bounded_before && bounded_after) {
            continue;
        }

        // Apostrophes are one byte each.
        let run = &text[start..end];
        let lead = run.len() - run.trim_start_matches('\'').len();
        let trail = run.len() - run.trim_end_matches('\'').len();
        if lead + trail < run.len() {
            spans.push(start + lead..end - trail);
        }
    }

    spans
}

/// Rebuild `text`, passing every word token through `swap`. Tokens for which
/// `swap` returns `None` and all non-token text are copied unchanged.
pub fn replace_words<F>(text: &str, mut swap: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    for span in word_spans(text) {
        let word = &text[span.clone()];
        if let Some(replacement) = swap(word) {
            out.push_str(&text[cursor..span.start]);
            out.push_str(&replacement);
            cursor = span.end;
        }
    }

    out.push_str(&text[cursor..]);
    out
}
