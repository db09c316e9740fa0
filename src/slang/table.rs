//! The fixed replacement table and emote set.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Table entries in definition order. A later duplicate key overrides an
/// earlier one, so `awesome` resolves to `fire`.
const ENTRIES: &[(&str, &str)] = &[
    ("hello", "yo"),
    ("hi", "yo"),
    ("hey", "yo"),
    ("friend", "bestie"),
    ("friends", "besties"),
    ("cool", "slay"),
    ("awesome", "slay"),
    ("amazing", "slay"),
    ("good", "valid"),
    ("great", "fire"),
    ("bad", "mid"),
    ("boring", "mid"),
    ("crazy", "wild"),
    ("really", "fr"),
    ("very", "so"),
    ("yes", "bet"),
    ("no", "nah"),
    ("okay", "okok"),
    ("ok", "okok"),
    ("awesome", "fire"),
    ("bro", "bruh"),
    ("dude", "bruh"),
    ("money", "rizz"),
    ("talk", "yap"),
    ("talking", "yapping"),
    ("talked", "yapped"),
    ("laugh", "lol"),
    ("laughing", "lol"),
    ("hilarious", "lol"),
];

/// Tags used for the optional emote suffix.
pub const EMOTES: &[&str] = &["no cap", "fr", "ngl", "lowkey", "highkey", "slay"];

/// Process-wide replacement table, built on first use.
pub static REPLACEMENTS: Lazy<ReplacementTable> =
    Lazy::new(|| ReplacementTable::from_entries(ENTRIES));

/// Lookup from a lowercase trigger word to its lowercase replacement.
#[derive(Debug, Clone, Default)]
pub struct ReplacementTable {
    words: HashMap<&'static str, &'static str>,
}

impl ReplacementTable {
    /// Build a table by inserting entries in order (last write wins).
    pub fn from_entries(entries: &[(&'static str, &'static str)]) -> Self {
        let mut words = HashMap::with_capacity(entries.len());
        for (word, replacement) in entries {
            words.insert(*word, *replacement);
        }
        Self { words }
    }

    /// Replacement for an already-lowercased word.
    pub fn get(&self, lower: &str) -> Option<&'static str> {
        self.words.get(lower).copied()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
