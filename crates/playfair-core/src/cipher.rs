//! Keyword-driven Playfair encoding and decoding.

use crate::alphabet::Alphabet;
use crate::config::{CipherConfig, InputPolicy};
use crate::digraph::{prepare_plaintext, transform, Direction};
use crate::error::{PlayfairError, Result};
use crate::grid::Grid;
use crate::keyword::Keyword;

/// Playfair cipher holding a keyword and the table derived from it.
///
/// The table is rebuilt only by [`set_keyword`](Self::set_keyword); encoding
/// and decoding read it without modification. Before any keyword is set the
/// cipher uses the table of the empty keyword, i.e. the plain alphabet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayfairCipher {
    config: CipherConfig,
    alphabet: Alphabet,
    keyword: Keyword,
    grid: Grid,
}

impl PlayfairCipher {
    /// Creates a cipher with the default configuration and an empty keyword.
    pub fn new() -> Self {
        Self {
            config: CipherConfig::default(),
            alphabet: Alphabet::default(),
            keyword: Keyword::default(),
            grid: Grid::default(),
        }
    }

    /// Creates a cipher with the default configuration and the given keyword.
    pub fn with_keyword(keyword: &str) -> Self {
        let mut cipher = Self::new();
        cipher.set_keyword(keyword);
        cipher
    }

    /// Creates a cipher with explicit configuration and an empty keyword.
    pub fn with_config(config: CipherConfig) -> Result<Self> {
        let alphabet = config.validate()?;
        let keyword = Keyword::default();
        let grid = Grid::build(&keyword, &alphabet);
        Ok(Self {
            config,
            alphabet,
            keyword,
            grid,
        })
    }

    /// Normalises `keyword` and rebuilds the table, replacing any previous
    /// keyword. Never fails: letters the table cannot hold are ignored.
    pub fn set_keyword(&mut self, keyword: &str) {
        self.keyword = Keyword::normalize(keyword, &self.alphabet);
        self.grid = Grid::build(&self.keyword, &self.alphabet);
        log::debug!(
            "rebuilt table for keyword {:?}: {}",
            self.keyword.as_str(),
            self.grid.letters()
        );
    }

    /// The normalised keyword, empty if none was set.
    #[inline]
    pub fn keyword(&self) -> &str {
        self.keyword.as_str()
    }

    /// The current table.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The alphabet the table is built from.
    #[inline]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Active configuration.
    #[inline]
    pub fn config(&self) -> &CipherConfig {
        &self.config
    }

    /// Encodes `plain_text`.
    ///
    /// Padding letters already present are dropped, doubled letters within a
    /// digraph are split with the padding letter and odd-length text is padded
    /// at the end. Output case follows the case of the prepared input.
    pub fn encode(&self, plain_text: &str) -> Result<String> {
        let letters = self.admit(plain_text)?;
        let prepared = prepare_plaintext(&letters, self.config.padding_letter());
        log::trace!(
            "prepared {} letters into {} for encoding",
            letters.len(),
            prepared.len()
        );
        transform(&self.grid, &prepared, Direction::Forward)
    }

    /// Decodes `cipher_text`.
    ///
    /// Padding is not removed; the caller decides which padding letters in
    /// the result are spurious.
    ///
    /// # Errors
    /// [`PlayfairError::InvalidArgument`] when the text has an odd number of
    /// letters.
    pub fn decode(&self, cipher_text: &str) -> Result<String> {
        let letters = self.admit(cipher_text)?;
        transform(&self.grid, &letters, Direction::Backward)
    }

    /// Applies the input policy, returning only letters the table holds.
    fn admit(&self, text: &str) -> Result<Vec<char>> {
        match self.config.policy {
            InputPolicy::Reject => text
                .chars()
                .enumerate()
                .map(|(position, ch)| {
                    if self.alphabet.contains_ignore_case(ch) {
                        Ok(ch)
                    } else {
                        Err(PlayfairError::UnsupportedCharacter { ch, position })
                    }
                })
                .collect(),
            InputPolicy::Strip => {
                let total = text.chars().count();
                let letters: Vec<char> = text
                    .chars()
                    .filter(|&ch| self.alphabet.contains_ignore_case(ch))
                    .collect();
                if letters.len() != total {
                    log::debug!(
                        "stripped {} characters outside the alphabet",
                        total - letters.len()
                    );
                }
                Ok(letters)
            }
        }
    }
}

impl Default for PlayfairCipher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn keyword_cipher() -> PlayfairCipher {
        PlayfairCipher::with_keyword("keyword")
    }

    #[test]
    fn normalises_keyword() {
        let mut cipher = PlayfairCipher::new();
        cipher.set_keyword("KEY WORD Q");
        assert_eq!(cipher.keyword(), "keyword");
    }

    #[test]
    fn keyword_empty_until_set() {
        assert_eq!(PlayfairCipher::new().keyword(), "");
        assert_eq!(PlayfairCipher::with_keyword("123 q").keyword(), "");
    }

    #[test]
    fn encode_decode_known_vector() {
        let cipher = keyword_cipher();
        let encoded = cipher.encode("thisisasecretmessage").unwrap();
        assert_eq!(encoded, "vfjpjpcnoddkulomncmd");
        assert_eq!(cipher.decode(&encoded).unwrap(), "thisisasecretmessage");
    }

    #[test]
    fn encode_decode_odd_text_keeps_padding() {
        let cipher = keyword_cipher();
        let encoded = cipher.encode("othisisasecretmessage").unwrap();
        assert_eq!(encoded, "kzijpjncmordkuudpzncmd");
        assert_eq!(cipher.decode(&encoded).unwrap(), "othisisasecretmesxsage");
    }

    #[test]
    fn decode_rejects_odd_length() {
        let cipher = keyword_cipher();
        let text = "abcdefghijklmnoprstuvwxyza";
        assert_eq!(text.len(), 26);
        let odd = format!("{text}b");
        assert_eq!(
            cipher.decode(&odd),
            Err(PlayfairError::InvalidArgument { len: 27 })
        );
    }

    #[test]
    fn preserves_case_per_position() {
        let cipher = keyword_cipher();
        let encoded = cipher.encode("ThisIsASecretMessage").unwrap();
        assert_eq!(encoded, "VfjpJpCNoddkuLomncmd");
        assert_eq!(cipher.decode(&encoded).unwrap(), "ThisIsASecretMessage");
    }

    #[test]
    fn uses_plain_alphabet_before_keyword_is_set() {
        let cipher = PlayfairCipher::new();
        let encoded = cipher.encode("hello").unwrap();
        assert_eq!(encoded, "jcmwmk");
        assert_eq!(cipher.decode(&encoded).unwrap(), "helxlo");
    }

    #[test]
    fn set_keyword_replaces_state() {
        let mut cipher = PlayfairCipher::with_keyword("playfair example");
        cipher.set_keyword("keyword");
        assert_eq!(cipher, keyword_cipher());

        let first = cipher.grid().clone();
        cipher.set_keyword("keyword");
        assert_eq!(cipher.grid(), &first);
    }

    #[test]
    fn reject_policy_reports_position() {
        let cipher = keyword_cipher();
        assert_eq!(
            cipher.encode("hide the gold"),
            Err(PlayfairError::UnsupportedCharacter { ch: ' ', position: 4 })
        );
        assert_eq!(
            cipher.decode("quit"),
            Err(PlayfairError::UnsupportedCharacter { ch: 'q', position: 0 })
        );
    }

    #[test]
    fn strip_policy_drops_unsupported_characters() {
        let mut cipher = PlayfairCipher::with_config(CipherConfig {
            policy: InputPolicy::Strip,
            ..CipherConfig::default()
        })
        .unwrap();
        cipher.set_keyword("keyword");

        let encoded = cipher.encode("this is a secret message!").unwrap();
        assert_eq!(encoded, "vfjpjpcnoddkulomncmd");
        assert_eq!(
            cipher.decode("vfjp jpcn-oddk ulom ncmd").unwrap(),
            "thisisasecretmessage"
        );
        assert_eq!(
            cipher.decode("vfj q"),
            Err(PlayfairError::InvalidArgument { len: 3 })
        );
    }

    #[test]
    fn playfair_example_with_j_excluded() {
        let mut cipher = PlayfairCipher::with_config(CipherConfig {
            excluded: 'j',
            ..CipherConfig::default()
        })
        .unwrap();
        cipher.set_keyword("playfair example");
        assert_eq!(cipher.keyword(), "playfirexm");
        assert_eq!(cipher.grid().letters(), "playfirexmbcdghknoqstuvwz");

        let encoded = cipher.encode("hidethegoldinthetreestump").unwrap();
        assert_eq!(encoded, "bmodzbxdnabekudmuixmmouvif");
        assert_eq!(
            cipher.decode(&encoded).unwrap(),
            "hidethegoldinthetrexestump"
        );
    }

    #[test]
    fn with_config_rejects_invalid_padding() {
        let err = PlayfairCipher::with_config(CipherConfig {
            padding: 'q',
            ..CipherConfig::default()
        })
        .unwrap_err();
        assert!(matches!(err, PlayfairError::InvalidConfig(_)));
    }

    #[test]
    fn random_round_trip_matches_prepared_text() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let cipher = keyword_cipher();
        let letters: Vec<char> = cipher.alphabet().letters().collect();
        for _ in 0..100 {
            let len = rng.gen_range(0..64);
            let text: String = (0..len)
                .map(|_| {
                    let c = letters[rng.gen_range(0..letters.len())];
                    if rng.gen_bool(0.3) {
                        c.to_ascii_uppercase()
                    } else {
                        c
                    }
                })
                .collect();
            let prepared: Vec<char> = text.chars().collect();
            let expected: String = prepare_plaintext(&prepared, 'x').into_iter().collect();
            let encoded = cipher.encode(&text).unwrap();
            assert_eq!(encoded.len(), expected.len());
            assert_eq!(cipher.decode(&encoded).unwrap(), expected);
        }
    }
}
