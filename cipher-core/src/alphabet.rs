// File:    alphabet.rs
// Author:  apezoo
// Date:    2026-10-15
//
// Description: Ordered, duplicate-free letter sequences and the keyed alphabet builder.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Alphabets and the first-occurrence-wins deduplication both ciphers rely on.

use crate::error::{CipherError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

const LATIN: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ROMANIAN_EXTENDED: &str = "AĂÂBCDEFGHIÎKLMNOPQRSȘTȚUVWXYZ";

/// Removes repeated letters, keeping the first occurrence of each.
///
/// This is the single deduplication routine behind both the keyed shift
/// alphabet and the digraph matrix, so the two can never drift apart.
pub fn dedup_ordered<I>(letters: I) -> Vec<char>
where
    I: IntoIterator<Item = char>,
{
    let mut seen = HashSet::new();
    letters.into_iter().filter(|c| seen.insert(*c)).collect()
}

/// An ordered sequence of unique letters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alphabet {
    letters: Vec<char>,
}

impl Alphabet {
    /// Builds an alphabet from a string, rejecting repeated letters.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::EmptyAlphabet`] for an empty string and
    /// [`CipherError::DuplicateLetter`] when a letter occurs twice.
    pub fn new(letters: &str) -> Result<Self> {
        if letters.is_empty() {
            return Err(CipherError::EmptyAlphabet);
        }
        let mut seen = HashSet::new();
        for c in letters.chars() {
            if !seen.insert(c) {
                return Err(CipherError::DuplicateLetter(c));
            }
        }
        Ok(Self {
            letters: letters.chars().collect(),
        })
    }

    /// The 26-letter English alphabet used by the shift cipher.
    #[must_use]
    pub fn latin() -> Self {
        Self {
            letters: LATIN.chars().collect(),
        }
    }

    /// The 30-symbol Romanian alphabet (without `J`) used by the digraph matrix.
    #[must_use]
    pub fn romanian_extended() -> Self {
        Self {
            letters: ROMANIAN_EXTENDED.chars().collect(),
        }
    }

    /// Returns a new alphabet whose first letters are the key's letters in
    /// first-occurrence order, followed by the remaining letters of `self`.
    ///
    /// Key letters that are not part of this alphabet are skipped, so the
    /// result always has the same size as `self`. An empty key yields an
    /// unchanged copy.
    #[must_use]
    pub fn keyed(&self, key: &str) -> Self {
        let letters = dedup_ordered(
            key.chars()
                .filter(|c| self.contains(*c))
                .chain(self.letters.iter().copied()),
        );
        log::debug!("Built keyed alphabet: {}", letters.iter().collect::<String>());
        Self { letters }
    }

    /// Position of `letter` in the alphabet.
    #[must_use]
    pub fn index_of(&self, letter: char) -> Option<usize> {
        self.letters.iter().position(|&c| c == letter)
    }

    /// Whether `letter` belongs to the alphabet.
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Whether the alphabet has no letters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The letters in order.
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.letters.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

impl TryFrom<String> for Alphabet {
    type Error = CipherError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.letters.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_keeps_first_occurrence() {
        let out: String = dedup_ordered("CRYPTOGRAPHY".chars()).into_iter().collect();
        assert_eq!(out, "CRYPTOGAH");
    }

    #[test]
    fn builtin_sizes() {
        assert_eq!(Alphabet::latin().len(), 26);
        assert_eq!(Alphabet::romanian_extended().len(), 30);
        assert!(!Alphabet::romanian_extended().contains('J'));
    }

    #[test]
    fn keyed_puts_key_first() {
        let keyed = Alphabet::latin().keyed("CRYPTOGRAPHY");
        assert_eq!(keyed.to_string(), "CRYPTOGAHBDEFIJKLMNQSUVWXZ");
        assert_eq!(keyed.len(), 26);
    }

    #[test]
    fn keyed_with_empty_key_is_unchanged() {
        assert_eq!(Alphabet::latin().keyed(""), Alphabet::latin());
    }

    #[test]
    fn keyed_skips_foreign_letters() {
        let keyed = Alphabet::latin().keyed("ȘAB");
        assert_eq!(keyed, Alphabet::latin());
    }

    #[test]
    fn new_rejects_duplicates_and_empty() {
        assert!(matches!(
            Alphabet::new("ABCA"),
            Err(CipherError::DuplicateLetter('A'))
        ));
        assert!(matches!(Alphabet::new(""), Err(CipherError::EmptyAlphabet)));
    }

    #[test]
    fn serde_uses_plain_string() {
        let json = serde_json::to_string(&Alphabet::latin()).unwrap();
        assert_eq!(json, "\"ABCDEFGHIJKLMNOPQRSTUVWXYZ\"");
        let back: Alphabet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Alphabet::latin());
        assert!(serde_json::from_str::<Alphabet>("\"AAB\"").is_err());
    }
}
