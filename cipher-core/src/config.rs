// File:    config.rs
// Author:  apezoo
// Date:    2026-10-15
//
// Description: Explicit cipher configuration: alphabets, grid shape, letter merges and fillers.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Configuration passed into every cipher operation.
//!
//! Nothing in the crate reads a global alphabet; callers build a
//! [`CipherConfig`] (usually [`CipherConfig::default`]) or load one from a
//! JSON file and hand it to the operations.

use crate::alphabet::Alphabet;
use crate::error::{CipherError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A rule that folds one letter into another before enciphering.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterMerge {
    /// The letter that is replaced.
    pub from: char,
    /// The letter it is replaced with.
    pub into: char,
}

/// Settings for the shift cipher.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ShiftConfig {
    /// Base alphabet rotated by the shift amount.
    pub alphabet: Alphabet,
}

impl Default for ShiftConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::latin(),
        }
    }
}

/// Settings for the digraph (Playfair-style) cipher.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DigraphConfig {
    /// Base alphabet laid out in the matrix after the key.
    pub alphabet: Alphabet,
    /// Number of matrix rows.
    pub rows: usize,
    /// Number of matrix columns.
    pub columns: usize,
    /// Letters folded into others during normalization.
    pub merges: Vec<LetterMerge>,
    /// Letters inserted between identical letters of a pair.
    pub fillers: Vec<char>,
    /// Letter appended to odd-length text.
    pub terminal_filler: char,
}

impl Default for DigraphConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::romanian_extended(),
            rows: 5,
            columns: 6,
            merges: vec![
                LetterMerge { from: 'J', into: 'I' },
                LetterMerge { from: 'Ş', into: 'Ș' },
                LetterMerge { from: 'Ţ', into: 'Ț' },
            ],
            fillers: vec!['Q', 'X', 'Z'],
            terminal_filler: 'V',
        }
    }
}

impl DigraphConfig {
    /// Applies the merge rules to a single (already uppercased) letter.
    #[must_use]
    pub fn merge(&self, letter: char) -> char {
        self.merges
            .iter()
            .find(|m| m.from == letter)
            .map_or(letter, |m| m.into)
    }

    /// Whether `letter` is one of the pair-breaking filler letters.
    #[must_use]
    pub fn is_filler(&self, letter: char) -> bool {
        self.fillers.contains(&letter)
    }

    /// Checks the grid shape, fillers and merges.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidConfig`] describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.columns == 0 {
            return Err(CipherError::InvalidConfig(
                "matrix must have at least one row and one column".into(),
            ));
        }
        if self.rows * self.columns != self.alphabet.len() {
            return Err(CipherError::InvalidConfig(format!(
                "a {}x{} matrix needs {} letters but the alphabet has {}",
                self.rows,
                self.columns,
                self.rows * self.columns,
                self.alphabet.len()
            )));
        }
        if self.fillers.len() < 2 {
            return Err(CipherError::InvalidConfig(
                "at least two filler letters are required".into(),
            ));
        }
        if let Some(f) = self
            .fillers
            .iter()
            .chain(std::iter::once(&self.terminal_filler))
            .find(|f| !self.alphabet.contains(**f))
        {
            return Err(CipherError::InvalidConfig(format!(
                "filler '{f}' is not part of the matrix alphabet"
            )));
        }
        for merge in &self.merges {
            if self.alphabet.contains(merge.from) {
                return Err(CipherError::InvalidConfig(format!(
                    "merged letter '{}' must not be part of the matrix alphabet",
                    merge.from
                )));
            }
            if !self.alphabet.contains(merge.into) {
                return Err(CipherError::InvalidConfig(format!(
                    "merge target '{}' is not part of the matrix alphabet",
                    merge.into
                )));
            }
        }
        Ok(())
    }
}

/// Complete configuration for both ciphers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CipherConfig {
    /// Shift cipher settings.
    pub shift: ShiftConfig,
    /// Digraph cipher settings.
    pub digraph: DigraphConfig,
    /// Minimum number of letters a key must have.
    pub min_key_length: usize,
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self {
            shift: ShiftConfig::default(),
            digraph: DigraphConfig::default(),
            min_key_length: 7,
        }
    }
}

impl CipherConfig {
    /// Loads a configuration from a JSON file and validates it.
    ///
    /// Sections missing from the file keep their default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// resulting configuration fails [`CipherConfig::validate`].
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        log::debug!("Loaded cipher configuration from '{}'", path.display());
        Ok(config)
    }

    /// Checks that the digraph grid, fillers and merges are consistent.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidConfig`] describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        self.digraph.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_is_valid() {
        assert!(CipherConfig::default().validate().is_ok());
    }

    #[test]
    fn merge_folds_j_and_cedillas() {
        let digraph = DigraphConfig::default();
        assert_eq!(digraph.merge('J'), 'I');
        assert_eq!(digraph.merge('Ş'), 'Ș');
        assert_eq!(digraph.merge('Ţ'), 'Ț');
        assert_eq!(digraph.merge('K'), 'K');
    }

    #[test]
    fn rejects_mismatched_grid() {
        let mut config = CipherConfig::default();
        config.digraph.columns = 5;
        assert!(matches!(
            config.validate(),
            Err(CipherError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_filler_outside_alphabet() {
        let mut config = CipherConfig::default();
        config.digraph.terminal_filler = 'J';
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_single_filler() {
        let mut config = CipherConfig::default();
        config.digraph.fillers = vec!['X'];
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"min_key_length": 9, "digraph": {{"fillers": ["X", "Z"]}}}}"#).unwrap();

        let config = CipherConfig::load(file.path()).unwrap();
        assert_eq!(config.min_key_length, 9);
        assert_eq!(config.digraph.fillers, vec!['X', 'Z']);
        assert_eq!(config.digraph.terminal_filler, 'V');
        assert_eq!(config.shift, ShiftConfig::default());
    }

    #[test]
    fn load_rejects_invalid_alphabet() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"shift": {{"alphabet": "ABCA"}}}}"#).unwrap();
        assert!(matches!(
            CipherConfig::load(file.path()),
            Err(CipherError::Json(_))
        ));
    }
}
