//! The 5×5 letter table and its builder.

use std::fmt;

use crate::alphabet::{Alphabet, ALPHABET_LEN};
use crate::keyword::Keyword;

/// Side length of the table.
pub const SIDE: usize = 5;

/// Position of a letter in the table; both components are in `0..SIDE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// Creates a coordinate, panicking when it falls outside the table.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        assert!(row < SIDE && col < SIDE, "coordinate outside the 5x5 table");
        Self { row, col }
    }

    /// Row index.
    #[inline]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Column index.
    #[inline]
    pub const fn col(self) -> usize {
        self.col
    }

    #[inline]
    const fn from_index(idx: usize) -> Self {
        Self {
            row: idx / SIDE,
            col: idx % SIDE,
        }
    }

    #[inline]
    const fn index(self) -> usize {
        self.row * SIDE + self.col
    }

    /// Moves `shift` columns to the right, wrapping within the row.
    #[inline]
    pub fn shift_col(self, shift: isize) -> Self {
        Self {
            row: self.row,
            col: wrap(self.col, shift),
        }
    }

    /// Moves `shift` rows down, wrapping within the column.
    #[inline]
    pub fn shift_row(self, shift: isize) -> Self {
        Self {
            row: wrap(self.row, shift),
            col: self.col,
        }
    }
}

#[inline]
fn wrap(pos: usize, shift: isize) -> usize {
    (pos as isize + shift).rem_euclid(SIDE as isize) as usize
}

/// Keyword-derived 5×5 table holding each alphabet letter exactly once.
///
/// Cells are stored row-major in a flat array; a letter-indexed reverse map
/// is built alongside so lookups never scan the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: [u8; ALPHABET_LEN],
    positions: [Option<Coord>; 26],
}

impl Grid {
    /// Builds the table: keyword letters first, then the rest of the
    /// alphabet in order, filling rows left to right. Keyword letters the
    /// alphabet does not hold are skipped.
    pub fn build(keyword: &Keyword, alphabet: &Alphabet) -> Self {
        let mut cells = [0u8; ALPHABET_LEN];
        let mut positions = [None; 26];
        let mut next = 0;

        let fill = keyword.as_str().chars().chain(alphabet.letters());
        for c in fill.filter(|&c| alphabet.contains(c)) {
            if next == ALPHABET_LEN {
                break;
            }
            let slot = &mut positions[letter_index(c)];
            if slot.is_some() {
                continue;
            }
            *slot = Some(Coord::from_index(next));
            cells[next] = c as u8;
            next += 1;
        }
        debug_assert_eq!(next, ALPHABET_LEN, "alphabet must complete the table");

        Self { cells, positions }
    }

    /// Letter stored at `coord` (always lowercase).
    #[inline]
    pub fn at(&self, coord: Coord) -> char {
        self.cells[coord.index()] as char
    }

    /// Finds `c` in the table, ignoring ASCII case. Returns `None` for the
    /// excluded letter and for anything that is not an ASCII letter.
    #[inline]
    pub fn locate(&self, c: char) -> Option<Coord> {
        let lower = c.to_ascii_lowercase();
        if !lower.is_ascii_lowercase() {
            return None;
        }
        self.positions[letter_index(lower)]
    }

    /// Iterates over the rows of the table.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.cells.chunks_exact(SIDE)
    }

    /// All 25 letters in row-major order.
    pub fn letters(&self) -> String {
        self.cells.iter().map(|&b| b as char).collect()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::build(&Keyword::default(), &Alphabet::default())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, &letter) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", letter as char)?;
            }
        }
        Ok(())
    }
}

#[inline]
fn letter_index(c: char) -> usize {
    (c as u8 - b'a') as usize
}
