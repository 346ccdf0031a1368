// File:    lib.rs
// Author:  apezoo
// Date:    2026-10-15
//
// Description: The main library crate for cipher-core, exposing the shift and digraph cipher operations.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # Cipher Core Library
//!
//! Two classical substitution ciphers:
//!
//! * a shift (Caesar-family) cipher, optionally over a keyed alphabet, and
//! * a Playfair-style digraph cipher over a 5x6 matrix of the Romanian
//!   alphabet.
//!
//! Neither offers any real security. All operations are pure and take their
//! alphabets from an explicit [`CipherConfig`] or [`Alphabet`]. Inputs are
//! expected to have passed the checks in [`validate`] first; the operations
//! still return an error rather than panic on letters they cannot place.

/// Ordered letter sequences and keyed alphabets.
pub mod alphabet;
/// Alphabets, grid shape and filler settings.
pub mod config;
/// Digraph preparation.
pub mod digraph;
/// Error type.
pub mod error;
/// The keyed letter matrix.
pub mod matrix;
/// The shift cipher.
pub mod shift;
/// The digraph substitution engine.
pub mod substitution;
/// Input checks run before the cipher operations.
pub mod validate;

pub use alphabet::Alphabet;
pub use config::CipherConfig;
pub use error::{CipherError, Result};
pub use matrix::Matrix;

use rand::Rng;

/// Encrypts `message` with the shift cipher.
///
/// # Errors
///
/// Returns [`CipherError::UnknownSymbol`] for letters outside `alphabet`.
pub fn shift_encrypt(
    alphabet: &Alphabet,
    message: &str,
    key1: u32,
    key2: Option<&str>,
) -> Result<String> {
    shift::encrypt(alphabet, message, key1, key2)
}

/// Decrypts `ciphertext` produced by [`shift_encrypt`] with the same keys.
///
/// # Errors
///
/// Returns [`CipherError::UnknownSymbol`] for letters outside `alphabet`.
pub fn shift_decrypt(
    alphabet: &Alphabet,
    ciphertext: &str,
    key1: u32,
    key2: Option<&str>,
) -> Result<String> {
    shift::decrypt(alphabet, ciphertext, key1, key2)
}

/// Encrypts `message` with the digraph cipher, picking fillers with the
/// thread-local random generator.
///
/// # Errors
///
/// Returns [`CipherError::InvalidConfig`] if `config` is inconsistent and
/// [`CipherError::UnknownSymbol`] if the normalized message holds a letter
/// that is not in the matrix.
pub fn digraph_encrypt(config: &CipherConfig, message: &str, key: &str) -> Result<String> {
    digraph_encrypt_with_rng(config, message, key, &mut rand::rng())
}

/// Like [`digraph_encrypt`], drawing fillers from `rng`.
///
/// # Errors
///
/// Returns [`CipherError::InvalidConfig`] if `config` is inconsistent and
/// [`CipherError::UnknownSymbol`] if the normalized message holds a letter
/// that is not in the matrix.
pub fn digraph_encrypt_with_rng<R>(
    config: &CipherConfig,
    message: &str,
    key: &str,
    rng: &mut R,
) -> Result<String>
where
    R: Rng + ?Sized,
{
    config.validate()?;
    let digraph = &config.digraph;
    let text = matrix::normalize_text(digraph, message);
    let matrix = Matrix::build(digraph, key)?;
    let prepared = digraph::prepare(digraph, &text, rng);
    substitution::encrypt(&matrix, &prepared)
}

/// Decrypts `ciphertext` produced by [`digraph_encrypt`] with the same key,
/// removing the fillers added during encryption.
///
/// # Errors
///
/// Returns [`CipherError::InvalidConfig`] if `config` is inconsistent,
/// [`CipherError::OddLength`] for an odd number of letters and
/// [`CipherError::UnknownSymbol`] for letters not in the matrix.
pub fn digraph_decrypt(config: &CipherConfig, ciphertext: &str, key: &str) -> Result<String> {
    config.validate()?;
    let digraph = &config.digraph;
    let letters: Vec<char> = validate::sanitize(ciphertext).chars().collect();
    let matrix = Matrix::build(digraph, key)?;
    substitution::decrypt(&matrix, digraph, &letters)
}
