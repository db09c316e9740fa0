//! Local slang transformer.
//!
//! Rewrites text by swapping words from a fixed [`ReplacementTable`] while
//! keeping the casing style of each original word, then applies two
//! independent random embellishments:
//!
//! - with probability [`SUFFIX_PROBABILITY`], an emote tag from [`EMOTES`] is
//!   appended as `" (tag)"`;
//! - with probability [`EMPHASIS_PROBABILITY`], every `!` becomes `!!!`.
//!
//! Randomness comes from an injected [`Entropy`] so callers can fix both
//! draws. Empty input is returned untouched and consumes no entropy.
//!
//! # Example
//!
//! ```
//! use slangify::SlangTransformer;
//!
//! let slang = SlangTransformer::new();
//! assert_eq!(slang.swap_words("Hey friend"), "Yo bestie");
//! ```

pub mod entropy;
pub mod table;
pub mod tokenizer;

pub use entropy::{Entropy, RngEntropy};
pub use table::{ReplacementTable, EMOTES, REPLACEMENTS};

/// Probability of appending an emote suffix.
pub const SUFFIX_PROBABILITY: f64 = 0.5;
/// Probability of tripling every exclamation mark.
pub const EMPHASIS_PROBABILITY: f64 = 0.4;

/// Stateless transformer over the process-wide table and emote set.
#[derive(Debug, Clone, Copy)]
pub struct SlangTransformer {
    table: &'static ReplacementTable,
    emotes: &'static [&'static str],
}

impl Default for SlangTransformer {
    fn default() -> Self {
        Self::new()
    }
}

impl SlangTransformer {
    pub fn new() -> Self {
        Self {
            table: &REPLACEMENTS,
            emotes: EMOTES,
        }
    }

    /// Transform `text` using the calling thread's random generator.
    pub fn transform(&self, text: &str) -> String {
        self.transform_with(text, &mut RngEntropy::thread())
    }

    /// Transform `text`, drawing the embellishment decisions from `entropy`.
    ///
    /// Draw order: suffix coin, tag index (only when the suffix is taken),
    /// emphasis coin.
    pub fn transform_with<E>(&self, text: &str, entropy: &mut E) -> String
    where
        E: Entropy + ?Sized,
    {
        if text.is_empty() {
            return String::new();
        }

        let mut out = self.swap_words(text);

        if entropy.chance(SUFFIX_PROBABILITY) {
            let tag = self.emotes[entropy.index(self.emotes.len())];
            out.push_str(" (");
            out.push_str(tag);
            out.push(')');
        }

        if entropy.chance(EMPHASIS_PROBABILITY) {
            out = out.replace('!', "!!!");
        }

        out
    }

    /// The deterministic part of the transform: table swaps only.
    pub fn swap_words(&self, text: &str) -> String {
        tokenizer::replace_words(text, |word| {
            self.table
                .get(&word.to_ascii_lowercase())
                .map(|replacement| match_case(word, replacement))
        })
    }
}

/// Apply the casing style of `word` to `replacement`.
fn match_case(word: &str, replacement: &str) -> String {
    let mut letters = word.chars().filter(char::is_ascii_alphabetic).peekable();
    let all_upper = letters.peek().is_some() && letters.all(|c| c.is_ascii_uppercase());

    if all_upper {
        return replacement.to_uppercase();
    }
    if word.chars().next().is_some_and(|c| c.is_uppercase()) {
        return capitalize(replacement);
    }
    replacement.to_string()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Transform `text` with a default [`SlangTransformer`].
pub fn transform(text: &str) -> String {
    SlangTransformer::new().transform(text)
}
