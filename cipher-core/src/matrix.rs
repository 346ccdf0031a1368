// File:    matrix.rs
// Author:  apezoo
// Date:    2026-10-15
//
// Description: Builds the keyed letter grid used by the digraph cipher.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The keyed letter matrix and text normalization.

use crate::alphabet::dedup_ordered;
use crate::config::DigraphConfig;
use crate::error::Result;
use std::collections::HashMap;
use std::fmt;

/// Uppercases `text`, drops whitespace and applies the configured letter merges.
#[must_use]
pub fn normalize_text(config: &DigraphConfig, text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .map(|c| config.merge(c))
        .collect()
}

/// A cell coordinate in the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub column: usize,
}

/// A row-major grid holding every letter of the digraph alphabet exactly once.
///
/// Built once per key and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Matrix {
    cells: Vec<char>,
    rows: usize,
    columns: usize,
    positions: HashMap<char, Position>,
}

impl Matrix {
    /// Lays out the normalized key followed by the rest of the alphabet.
    ///
    /// Key letters outside the configured alphabet are dropped, so the grid
    /// always contains exactly `rows * columns` distinct letters.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CipherError::InvalidConfig`] if `config` fails
    /// [`DigraphConfig::validate`], for example when the grid shape does not
    /// match the alphabet size.
    pub fn build(config: &DigraphConfig, key: &str) -> Result<Self> {
        config.validate()?;
        let key = normalize_text(config, key);
        let cells = dedup_ordered(
            key.chars()
                .filter(|c| config.alphabet.contains(*c))
                .chain(config.alphabet.letters().iter().copied()),
        );

        let positions = cells
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                (
                    c,
                    Position {
                        row: i / config.columns,
                        column: i % config.columns,
                    },
                )
            })
            .collect();

        let matrix = Self {
            cells,
            rows: config.rows,
            columns: config.columns,
            positions,
        };
        log::debug!("Built {}x{} matrix:\n{matrix}", matrix.rows, matrix.columns);
        Ok(matrix)
    }

    /// Finds the cell holding `letter`.
    #[must_use]
    pub fn position(&self, letter: char) -> Option<Position> {
        self.positions.get(&letter).copied()
    }

    /// The letter at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the grid.
    #[must_use]
    pub fn at(&self, pos: Position) -> char {
        assert!(
            pos.row < self.rows && pos.column < self.columns,
            "position {pos:?} is outside the matrix"
        );
        self.cells[pos.row * self.columns + pos.column]
    }

    /// The letters of row `index`.
    #[must_use]
    pub fn row(&self, index: usize) -> &[char] {
        let start = index * self.columns;
        &self.cells[start..start + self.columns]
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// All letters in row-major order.
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.cells
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            let line = self
                .row(r)
                .iter()
                .map(char::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            if r + 1 < self.rows {
                writeln!(f, "{line}")?;
            } else {
                write!(f, "{line}")?;
            }
        }
        Ok(())
    }
}
