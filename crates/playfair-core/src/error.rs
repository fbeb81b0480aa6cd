//! Error types for the Playfair cipher.

use thiserror::Error;

/// Errors produced while configuring the cipher or transforming text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayfairError {
    /// Ciphertext handed to `decode` has an odd number of letters, so it cannot
    /// be the output of a digraph encoding.
    #[error("text length must be even to be a Playfair ciphertext, got {len} letters")]
    InvalidArgument {
        /// Number of letters in the rejected text.
        len: usize,
    },

    /// A character outside the cipher alphabet reached the transformer.
    #[error("character {ch:?} at position {position} is not suitable for encryption")]
    UnsupportedCharacter {
        /// The offending character.
        ch: char,
        /// Character offset within the caller's input.
        position: usize,
    },

    /// The cipher configuration cannot produce a usable table.
    #[error("invalid cipher configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PlayfairError>;
