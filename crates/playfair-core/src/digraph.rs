//! Digraph preparation and the row/column/rectangle substitution rule.

use crate::error::{PlayfairError, Result};
use crate::grid::{Coord, Grid};

/// Direction of the substitution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Encoding: shift +1.
    Forward,
    /// Decoding: shift −1.
    Backward,
}

impl Direction {
    /// Signed row/column offset applied to letters sharing a row or column.
    #[inline]
    pub const fn shift(self) -> isize {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Splits plaintext into encodable digraphs.
///
/// Every `padding` letter already in the text is removed, a lowercase
/// `padding` is inserted between the letters of any pair that would repeat a
/// letter (ignoring case), and one more is appended when the length is odd.
pub fn prepare_plaintext(letters: &[char], padding: char) -> Vec<char> {
    let mut prepared: Vec<char> = Vec::with_capacity(letters.len() + letters.len() / 2 + 1);
    for &c in letters.iter().filter(|c| !c.eq_ignore_ascii_case(&padding)) {
        let pair_open = prepared.len() % 2 == 1;
        if pair_open && prepared.last().is_some_and(|open| open.eq_ignore_ascii_case(&c)) {
            prepared.push(padding);
        }
        prepared.push(c);
    }
    if prepared.len() % 2 == 1 {
        prepared.push(padding);
    }
    prepared
}

/// Substitutes one pair of letters. The returned letters are lowercase.
pub fn substitute_pair(
    grid: &Grid,
    a: char,
    b: char,
    direction: Direction,
) -> Option<(char, char)> {
    let p1 = grid.locate(a)?;
    let p2 = grid.locate(b)?;
    let shift = direction.shift();

    let (d1, d2) = if p1.row() == p2.row() {
        (p1.shift_col(shift), p2.shift_col(shift))
    } else if p1.col() == p2.col() {
        (p1.shift_row(shift), p2.shift_row(shift))
    } else {
        (
            Coord::new(p1.row(), p2.col()),
            Coord::new(p2.row(), p1.col()),
        )
    };

    Some((grid.at(d1), grid.at(d2)))
}

/// Applies the substitution to consecutive, non-overlapping pairs of
/// `letters`, which must have even length. Each output letter takes the case
/// of the input letter at the same position.
pub fn transform(grid: &Grid, letters: &[char], direction: Direction) -> Result<String> {
    if letters.len() % 2 != 0 {
        return Err(PlayfairError::InvalidArgument { len: letters.len() });
    }

    let mut out = String::with_capacity(letters.len());
    for (idx, pair) in letters.chunks_exact(2).enumerate() {
        let (a, b) = (pair[0], pair[1]);
        let (d1, d2) = substitute_pair(grid, a, b, direction).ok_or_else(|| {
            let (ch, offset) = if grid.locate(a).is_none() { (a, 0) } else { (b, 1) };
            PlayfairError::UnsupportedCharacter {
                ch,
                position: idx * 2 + offset,
            }
        })?;
        out.push(match_case(a, d1));
        out.push(match_case(b, d2));
    }

    log::trace!("{direction:?} substituted {} digraphs", letters.len() / 2);
    Ok(out)
}

#[inline]
fn match_case(source: char, letter: char) -> char {
    if source.is_ascii_uppercase() {
        letter.to_ascii_uppercase()
    } else {
        letter
    }
}
