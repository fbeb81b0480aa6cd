//! The 25-letter alphabet a Playfair table is built from.

use crate::error::{PlayfairError, Result};

/// Number of letters that fit in a 5×5 table.
pub const ALPHABET_LEN: usize = 25;

/// Letter dropped from the Latin alphabet when none is configured.
pub const DEFAULT_EXCLUDED: char = 'q';

/// Ordered set of 25 distinct lowercase ASCII letters: `a..=z` minus one
/// excluded letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alphabet {
    letters: [u8; ALPHABET_LEN],
    excluded: u8,
}

impl Alphabet {
    /// Builds the alphabet that omits `excluded` (case-insensitive).
    pub fn without(excluded: char) -> Result<Self> {
        if !excluded.is_ascii_alphabetic() {
            return Err(PlayfairError::InvalidConfig(format!(
                "excluded letter must be an ASCII letter, got {excluded:?}"
            )));
        }
        let excluded = excluded.to_ascii_lowercase() as u8;

        let mut letters = [0u8; ALPHABET_LEN];
        for (slot, letter) in letters
            .iter_mut()
            .zip((b'a'..=b'z').filter(|&b| b != excluded))
        {
            *slot = letter;
        }

        Ok(Self { letters, excluded })
    }

    /// The letter left out of the table.
    #[inline]
    pub fn excluded(&self) -> char {
        self.excluded as char
    }

    /// Returns true for lowercase letters that belong to the alphabet.
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        c.is_ascii_lowercase() && c as u8 != self.excluded
    }

    /// Same as [`contains`](Self::contains) after ASCII lowercasing.
    #[inline]
    pub fn contains_ignore_case(&self, c: char) -> bool {
        self.contains(c.to_ascii_lowercase())
    }

    /// Letters in alphabet order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().map(|&b| b as char)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::without(DEFAULT_EXCLUDED).expect("default excluded letter is ASCII")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_omits_q() {
        let alphabet = Alphabet::default();
        let letters: String = alphabet.letters().collect();
        assert_eq!(letters, "abcdefghijklmnoprstuvwxyz");
        assert_eq!(alphabet.excluded(), 'q');
    }

    #[test]
    fn without_matches_default_for_q() {
        assert_eq!(Alphabet::without('Q').unwrap(), Alphabet::default());
    }

    #[test]
    fn without_j() {
        let alphabet = Alphabet::without('j').unwrap();
        let letters: String = alphabet.letters().collect();
        assert_eq!(letters, "abcdefghiklmnopqrstuvwxyz");
        assert!(alphabet.contains('q'));
        assert!(!alphabet.contains('j'));
    }

    #[test]
    fn without_rejects_non_letters() {
        for bad in ['1', ' ', 'é', '-'] {
            assert!(matches!(
                Alphabet::without(bad),
                Err(PlayfairError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn contains_is_lowercase_only() {
        let alphabet = Alphabet::default();
        assert!(alphabet.contains('a'));
        assert!(!alphabet.contains('A'));
        assert!(alphabet.contains_ignore_case('A'));
        assert!(!alphabet.contains_ignore_case('Q'));
        assert!(!alphabet.contains('7'));
    }
}
