//! Keyword normalisation.

use std::fmt;

use crate::alphabet::{Alphabet, ALPHABET_LEN};

/// A normalised keyword: lowercase alphabet letters, each at most once, in
/// order of first occurrence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Keyword(String);

impl Keyword {
    /// Normalises `raw` against `alphabet`.
    ///
    /// Characters are lowercased first, then anything outside the alphabet
    /// (non-letters and the excluded letter) is dropped and repeats are removed.
    pub fn normalize(raw: &str, alphabet: &Alphabet) -> Self {
        let mut seen = [false; 26];
        let mut normalized = String::with_capacity(ALPHABET_LEN);
        for c in raw.chars().map(|c| c.to_ascii_lowercase()) {
            if !alphabet.contains(c) {
                continue;
            }
            let slot = &mut seen[(c as u8 - b'a') as usize];
            if !*slot {
                *slot = true;
                normalized.push(c);
            }
        }
        Self(normalized)
    }

    /// The normalised letters.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Keyword {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
