// File:    error.rs
// Author:  apezoo
// Date:    2026-10-15
//
// Description: Error type shared by the shift and digraph cipher operations.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Error types for the cipher core.

use thiserror::Error;

/// Errors produced by validation, configuration loading and the cipher engines.
#[derive(Debug, Error)]
pub enum CipherError {
    /// The key is too short or contains letters outside the target alphabet.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// The shift amount is outside `[1, 25]`.
    #[error("shift amount {0} is outside the range 1-25")]
    InvalidShiftAmount(i64),

    /// The message is empty or contains symbols outside the target alphabet.
    #[error("invalid message: {0}")]
    InvalidMessage(String),

    /// A symbol could not be found in the alphabet or matrix in use.
    #[error("symbol '{0}' is not part of the alphabet")]
    UnknownSymbol(char),

    /// Digraph input must have an even number of letters.
    #[error("digraph text has odd length {0}")]
    OddLength(usize),

    /// An alphabet listed the same letter twice.
    #[error("letter '{0}' appears more than once in the alphabet")]
    DuplicateLetter(char),

    /// An alphabet without any letters was supplied.
    #[error("alphabet must not be empty")]
    EmptyAlphabet,

    /// The configuration is internally inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading a configuration file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed.
    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CipherError>;
