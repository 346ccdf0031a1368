// File:    substitution.rs
// Author:  apezoo
// Date:    2026-10-15
//
// Description: Rectangle, row and column substitution over the keyed matrix, plus filler removal.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The digraph substitution engine.
//!
//! Each pair of letters is located in the [`Matrix`] and replaced according
//! to exactly one of three rules:
//!
//! * **Rectangle**: rows and columns differ. Each letter takes the letter in
//!   its own row and the other letter's column. This rule is its own inverse.
//! * **Row**: both letters share a row. Each moves one column right to
//!   encrypt, one column left to decrypt, wrapping around.
//! * **Column**: both letters share a column. Each moves one row down to
//!   encrypt, one row up to decrypt, wrapping around.

use crate::config::DigraphConfig;
use crate::digraph::pairs;
use crate::error::{CipherError, Result};
use crate::matrix::{Matrix, Position};

/// Which way a pair is transformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Plaintext to ciphertext.
    Encrypt,
    /// Ciphertext to plaintext.
    Decrypt,
}

/// The substitution case selected for a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Letters in different rows and columns.
    Rectangle,
    /// Letters in the same row.
    Row,
    /// Letters in the same column.
    Column,
}

impl Rule {
    /// Selects the rule for two positions.
    ///
    /// Rectangle is checked first, then row. Two equal positions can only
    /// come from an identical-letter pair and fall under the row rule.
    #[must_use]
    pub const fn classify(a: Position, b: Position) -> Self {
        if a.row != b.row && a.column != b.column {
            Self::Rectangle
        } else if a.row == b.row {
            Self::Row
        } else {
            Self::Column
        }
    }
}

const fn step(index: usize, len: usize, direction: Direction) -> usize {
    match direction {
        Direction::Encrypt => (index + 1) % len,
        Direction::Decrypt => (index + len - 1) % len,
    }
}

fn locate(matrix: &Matrix, letter: char) -> Result<Position> {
    matrix
        .position(letter)
        .ok_or(CipherError::UnknownSymbol(letter))
}

/// Substitutes a single pair.
///
/// # Errors
///
/// Returns [`CipherError::UnknownSymbol`] if either letter is not in the matrix.
pub fn substitute_pair(
    matrix: &Matrix,
    (first, second): (char, char),
    direction: Direction,
) -> Result<(char, char)> {
    let a = locate(matrix, first)?;
    let b = locate(matrix, second)?;

    let (a, b) = match Rule::classify(a, b) {
        Rule::Rectangle => (
            Position {
                row: a.row,
                column: b.column,
            },
            Position {
                row: b.row,
                column: a.column,
            },
        ),
        Rule::Row => (
            Position {
                row: a.row,
                column: step(a.column, matrix.columns(), direction),
            },
            Position {
                row: b.row,
                column: step(b.column, matrix.columns(), direction),
            },
        ),
        Rule::Column => (
            Position {
                row: step(a.row, matrix.rows(), direction),
                column: a.column,
            },
            Position {
                row: step(b.row, matrix.rows(), direction),
                column: b.column,
            },
        ),
    };

    Ok((matrix.at(a), matrix.at(b)))
}

fn substitute_all(matrix: &Matrix, letters: &[char], direction: Direction) -> Result<Vec<char>> {
    if letters.len() % 2 != 0 {
        return Err(CipherError::OddLength(letters.len()));
    }
    let mut out = Vec::with_capacity(letters.len());
    for pair in pairs(letters) {
        let (a, b) = substitute_pair(matrix, pair, direction)?;
        out.push(a);
        out.push(b);
    }
    Ok(out)
}

/// Encrypts a prepared digraph sequence.
///
/// # Errors
///
/// Returns [`CipherError::OddLength`] for an odd number of letters and
/// [`CipherError::UnknownSymbol`] for letters missing from the matrix.
pub fn encrypt(matrix: &Matrix, digraphs: &[char]) -> Result<String> {
    substitute_all(matrix, digraphs, Direction::Encrypt).map(|v| v.into_iter().collect())
}

/// Reverses [`encrypt`] and strips the fillers inserted during preparation.
///
/// # Errors
///
/// Same conditions as [`encrypt`].
pub fn decrypt(matrix: &Matrix, config: &DigraphConfig, digraphs: &[char]) -> Result<String> {
    let plain = substitute_all(matrix, digraphs, Direction::Decrypt)?;
    Ok(strip_fillers(config, plain).into_iter().collect())
}

/// Removes fillers that sit between two identical letters, then a trailing
/// terminal filler.
///
/// Any filler letter found between two equal letters is assumed to be
/// padding. A plaintext that genuinely contains such a pattern (for example
/// `AXA`) loses its middle letter; the pattern cannot be told apart from
/// inserted padding.
#[must_use]
pub fn strip_fillers(config: &DigraphConfig, mut letters: Vec<char>) -> Vec<char> {
    let mut i = 0;
    while i + 2 < letters.len() {
        if letters[i] == letters[i + 2] && config.is_filler(letters[i + 1]) {
            log::debug!("Removing filler '{}' at position {}", letters[i + 1], i + 1);
            letters.remove(i + 1);
            i += 1;
        } else {
            i += 2;
        }
    }

    if letters.last() == Some(&config.terminal_filler) {
        letters.pop();
    }

    letters
}
