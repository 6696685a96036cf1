//! Enumeration of letter combinations
//!
//! Both enumerations walk the product of the five per-position sets in the
//! same order: position 1 outermost, position 5 innermost, each set in its own
//! order. They are lazy and restartable: every call builds a fresh iterator
//! over the borrowed sets.

use super::pool::PositionSets;
use crate::core::{Letter, WORD_LEN};
use crate::dictionary::Dictionary;
use itertools::iproduct;

/// How the generator walks the search space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Enumeration {
    /// Every combination of the per-position sets
    Exhaustive,
    /// Skip any branch whose prefix starts no dictionary word
    #[default]
    Pruned,
}

impl Enumeration {
    /// Create enumeration from name string
    ///
    /// Supported names: "exhaustive", "full", "pruned".
    /// Defaults to pruned if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "exhaustive" | "full" => Self::Exhaustive,
            _ => Self::Pruned,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exhaustive => "exhaustive",
            Self::Pruned => "pruned",
        }
    }
}

/// Lazy Cartesian product of the five position sets
pub fn exhaustive(sets: &PositionSets) -> impl Iterator<Item = [Letter; WORD_LEN]> + '_ {
    let [s1, s2, s3, s4, s5] = sets.sets();
    iproduct!(s1.iter(), s2.iter(), s3.iter(), s4.iter(), s5.iter())
        .map(|(&a, &b, &c, &d, &e)| [a, b, c, d, e])
}

/// Depth-first walk that abandons dead prefixes
///
/// Yields a subset of [`exhaustive`] in the same relative order. A complete
/// combination is yielded whenever its 4-letter prefix begins some dictionary
/// word; the final membership test is left to the caller.
pub struct Pruned<'a> {
    sets: &'a [Vec<Letter>; WORD_LEN],
    dictionary: &'a Dictionary,
    cursor: [usize; WORD_LEN],
    prefix: [u8; WORD_LEN],
    depth: usize,
    done: bool,
}

impl<'a> Pruned<'a> {
    #[must_use]
    pub fn new(sets: &'a PositionSets, dictionary: &'a Dictionary) -> Self {
        Self {
            sets: sets.sets(),
            dictionary,
            cursor: [0; WORD_LEN],
            prefix: [0; WORD_LEN],
            depth: 0,
            done: false,
        }
    }

    /// Move past the current letter at `depth`
    fn advance(&mut self) {
        self.cursor[self.depth] += 1;
    }
}

impl Iterator for Pruned<'_> {
    type Item = [Letter; WORD_LEN];

    fn next(&mut self) -> Option<Self::Item> {
        let sets = self.sets;
        while !self.done {
            let set = &sets[self.depth];

            if self.cursor[self.depth] >= set.len() {
                // This level is exhausted: backtrack
                if self.depth == 0 {
                    self.done = true;
                    break;
                }
                self.cursor[self.depth] = 0;
                self.depth -= 1;
                self.advance();
                continue;
            }

            self.prefix[self.depth] = set[self.cursor[self.depth]].byte();

            if self.depth == WORD_LEN - 1 {
                let letters = std::array::from_fn(|i| sets[i][self.cursor[i]]);
                self.advance();
                return Some(letters);
            }

            if self.dictionary.has_prefix(&self.prefix[..=self.depth]) {
                self.depth += 1;
            } else {
                self.advance();
            }
        }

        None
    }
}
