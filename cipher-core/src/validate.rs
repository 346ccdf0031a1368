// File:    validate.rs
// Author:  apezoo
// Date:    2026-10-15
//
// Description: Input checks for messages, keys and shift amounts, run before the cipher operations.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Input checks run by the caller before invoking a cipher.
//!
//! The cipher operations assume validated input; these functions give an
//! interactive shell or CLI a single place to reject bad input with a
//! descriptive [`CipherError`] instead of re-prompting inside the core.

use crate::alphabet::Alphabet;
use crate::config::{CipherConfig, DigraphConfig};
use crate::error::{CipherError, Result};
use crate::matrix::normalize_text;

/// Drops whitespace and uppercases the rest.
#[must_use]
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

fn first_foreign(alphabet: &Alphabet, text: &str) -> Option<char> {
    text.chars().find(|c| !alphabet.contains(*c))
}

/// Checks that `message` is non-empty and made only of `alphabet`'s letters.
///
/// # Errors
///
/// Returns [`CipherError::InvalidMessage`] otherwise.
pub fn validate_message(alphabet: &Alphabet, message: &str) -> Result<()> {
    if message.is_empty() {
        return Err(CipherError::InvalidMessage("message is empty".into()));
    }
    if let Some(c) = first_foreign(alphabet, message) {
        return Err(CipherError::InvalidMessage(format!(
            "'{c}' is not one of the letters {alphabet}"
        )));
    }
    Ok(())
}

/// Checks that the shift amount lies in `[1, 25]`.
///
/// # Errors
///
/// Returns [`CipherError::InvalidShiftAmount`] otherwise.
pub fn validate_shift(key1: i64) -> Result<u32> {
    match u32::try_from(key1) {
        Ok(k @ 1..=25) => Ok(k),
        _ => Err(CipherError::InvalidShiftAmount(key1)),
    }
}

/// Checks that `key` has at least `min_len` letters, all from `alphabet`.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] otherwise.
pub fn validate_key(alphabet: &Alphabet, key: &str, min_len: usize) -> Result<()> {
    let len = key.chars().count();
    if len < min_len {
        return Err(CipherError::InvalidKey(format!(
            "key has {len} letters but at least {min_len} are required"
        )));
    }
    if let Some(c) = first_foreign(alphabet, key) {
        return Err(CipherError::InvalidKey(format!(
            "'{c}' is not one of the letters {alphabet}"
        )));
    }
    Ok(())
}

/// Validates a digraph key after applying the configured letter merges.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] if the key is too short or contains
/// letters that are not in the matrix alphabet.
pub fn validate_digraph_key(config: &CipherConfig, key: &str) -> Result<()> {
    validate_key(
        &config.digraph.alphabet,
        &normalize_text(&config.digraph, key),
        config.min_key_length,
    )
}

/// Validates a digraph plaintext after applying the configured letter merges.
///
/// # Errors
///
/// Returns [`CipherError::InvalidMessage`] for empty text or letters outside
/// the matrix alphabet.
pub fn validate_plaintext(config: &DigraphConfig, text: &str) -> Result<()> {
    validate_message(&config.alphabet, &normalize_text(config, text))
}

/// Validates digraph ciphertext.
///
/// Unlike plaintext, ciphertext is never merged: a merge-source letter such
/// as `J` cannot have been produced by encryption and is rejected, as is an
/// odd number of letters.
///
/// # Errors
///
/// Returns [`CipherError::InvalidMessage`] for foreign letters and
/// [`CipherError::OddLength`] for an odd letter count.
pub fn validate_ciphertext(config: &DigraphConfig, text: &str) -> Result<()> {
    let text = sanitize(text);
    validate_message(&config.alphabet, &text)?;
    let len = text.chars().count();
    if len % 2 != 0 {
        return Err(CipherError::OddLength(len));
    }
    Ok(())
}
