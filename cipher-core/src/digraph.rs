// File:    digraph.rs
// Author:  apezoo
// Date:    2026-10-15
//
// Description: Splits normalized text into letter pairs, inserting fillers where needed.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Digraph preparation for the matrix cipher.

use crate::config::DigraphConfig;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Turns normalized text into an even-length letter sequence in which no
/// pair (positions `2k`, `2k+1`) holds the same letter twice.
///
/// Pairs are scanned left to right. When both letters of the pair starting
/// at `i` are equal, a filler is inserted at `i + 1` and the scan continues
/// at `i + 2`, which after the insertion holds the duplicated letter, so it
/// gets paired with whatever follows it. The filler is drawn from the
/// configured filler letters that differ from the duplicated one. An
/// odd-length result gets the terminal filler appended.
pub fn prepare<R>(config: &DigraphConfig, text: &str, rng: &mut R) -> Vec<char>
where
    R: Rng + ?Sized,
{
    let mut letters: Vec<char> = text.chars().collect();

    let mut i = 0;
    while i + 1 < letters.len() {
        let letter = letters[i];
        if letter == letters[i + 1] {
            let candidates: Vec<char> = config
                .fillers
                .iter()
                .copied()
                .filter(|&f| f != letter)
                .collect();
            let filler = candidates
                .choose(rng)
                .copied()
                .unwrap_or(config.terminal_filler);
            log::debug!("Inserting filler '{filler}' after '{letter}' at position {i}");
            letters.insert(i + 1, filler);
        }
        i += 2;
    }

    if letters.len() % 2 != 0 {
        letters.push(config.terminal_filler);
    }

    letters
}

/// Iterates over consecutive pairs; a trailing unpaired letter is ignored.
pub fn pairs(letters: &[char]) -> impl Iterator<Item = (char, char)> + '_ {
    letters.chunks_exact(2).map(|pair| (pair[0], pair[1]))
}
