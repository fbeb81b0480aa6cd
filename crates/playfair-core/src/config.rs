//! Cipher configuration.

use crate::alphabet::{Alphabet, DEFAULT_EXCLUDED};
use crate::error::{PlayfairError, Result};

/// Default letter used to split doubled letters and to pad odd-length text.
pub const DEFAULT_PADDING: char = 'x';

/// How characters outside the cipher alphabet are treated in `encode`/`decode`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputPolicy {
    /// Fail with [`PlayfairError::UnsupportedCharacter`].
    #[default]
    Reject,
    /// Drop them before any other processing.
    Strip,
}

/// Configuration for [`PlayfairCipher`](crate::PlayfairCipher).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CipherConfig {
    /// Letter left out of the 5×5 table.
    pub excluded: char,
    /// Letter inserted between doubled letters and appended to odd-length text.
    pub padding: char,
    /// Treatment of characters the table cannot hold.
    pub policy: InputPolicy,
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self {
            excluded: DEFAULT_EXCLUDED,
            padding: DEFAULT_PADDING,
            policy: InputPolicy::Reject,
        }
    }
}

impl CipherConfig {
    /// Checks the configuration and returns the alphabet it describes.
    pub fn validate(&self) -> Result<Alphabet> {
        let alphabet = Alphabet::without(self.excluded)?;
        if !self.padding.is_ascii_alphabetic() {
            return Err(PlayfairError::InvalidConfig(format!(
                "padding letter must be an ASCII letter, got {:?}",
                self.padding
            )));
        }
        if !alphabet.contains_ignore_case(self.padding) {
            return Err(PlayfairError::InvalidConfig(format!(
                "padding letter {:?} is the excluded letter",
                self.padding
            )));
        }
        Ok(alphabet)
    }

    /// Padding letter in the lowercase form that gets inserted into text.
    #[inline]
    pub fn padding_letter(&self) -> char {
        self.padding.to_ascii_lowercase()
    }
}
