// File:    shift.rs
// Author:  apezoo
// Date:    2026-10-15
//
// Description: Caesar-family shift cipher over an optionally keyed alphabet.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The shift cipher engine.

use crate::alphabet::Alphabet;
use crate::error::{CipherError, Result};

fn shift_with(
    alphabet: &Alphabet,
    message: &str,
    key1: u32,
    key2: Option<&str>,
    forward: bool,
) -> Result<String> {
    let alphabet = match key2 {
        Some(key) if !key.is_empty() => {
            let keyed = alphabet.keyed(key);
            log::debug!("New alphabet: {keyed}");
            keyed
        }
        _ => alphabet.clone(),
    };

    let len = alphabet.len();
    let offset = key1 as usize % len;
    let letters = alphabet.letters();

    message
        .chars()
        .map(|c| -> Result<char> {
            let index = alphabet.index_of(c).ok_or(CipherError::UnknownSymbol(c))?;
            let target = if forward {
                (index + offset) % len
            } else {
                (index + len - offset) % len
            };
            Ok(letters[target])
        })
        .collect()
}

/// Replaces each letter with the one `key1` places further along the
/// alphabet, wrapping around.
///
/// With `key2`, the alphabet is first reordered so that `key2`'s letters
/// (deduplicated) come first.
///
/// # Errors
///
/// Returns [`CipherError::UnknownSymbol`] if `message` contains a letter
/// missing from `alphabet`.
pub fn encrypt(alphabet: &Alphabet, message: &str, key1: u32, key2: Option<&str>) -> Result<String> {
    shift_with(alphabet, message, key1, key2, true)
}

/// The inverse of [`encrypt`] for the same alphabet and keys.
///
/// # Errors
///
/// Returns [`CipherError::UnknownSymbol`] if `ciphertext` contains a letter
/// missing from `alphabet`.
pub fn decrypt(
    alphabet: &Alphabet,
    ciphertext: &str,
    key1: u32,
    key2: Option<&str>,
) -> Result<String> {
    shift_with(alphabet, ciphertext, key1, key2, false)
}
