//! Playfair digraph cipher over a keyword-derived 5×5 table.
//!
//! This crate provides:
//! - Keyword normalisation and the 25-letter table built from it.
//! - Digraph preparation (padding of doubled letters and odd-length text).
//! - The row/column/rectangle substitution for encoding and decoding.
//!
//! The cipher is a classical pen-and-paper scheme and offers no
//! cryptographic protection.
//!
//! # Examples
//!
//! ```
//! use playfair_core::PlayfairCipher;
//!
//! let mut cipher = PlayfairCipher::new();
//! cipher.set_keyword("KEY WORD Q");
//! assert_eq!(cipher.keyword(), "keyword");
//!
//! let encoded = cipher.encode("thisisasecretmessage").unwrap();
//! assert_eq!(encoded, "vfjpjpcnoddkulomncmd");
//! assert_eq!(cipher.decode(&encoded).unwrap(), "thisisasecretmessage");
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod alphabet;
mod cipher;
mod config;
mod digraph;
mod error;
mod grid;
mod keyword;

pub use crate::alphabet::{Alphabet, ALPHABET_LEN, DEFAULT_EXCLUDED};
pub use crate::cipher::PlayfairCipher;
pub use crate::config::{CipherConfig, InputPolicy, DEFAULT_PADDING};
pub use crate::digraph::{prepare_plaintext, substitute_pair, Direction};
pub use crate::error::{PlayfairError, Result};
pub use crate::grid::{Coord, Grid, SIDE};
pub use crate::keyword::Keyword;
