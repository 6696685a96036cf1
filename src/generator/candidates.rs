//! Candidate generation
//!
//! # Algorithm
//! 1. Pool = green ∪ yellow ∪ gray letters
//! 2. Per-position sets: the green letter, or the pool minus yellow exclusions
//! 3. Enumerate the product of the five sets
//! 4. Keep strings containing every yellow letter that are in the dictionary
//! 5. Deduplicate, preserving first-seen order

use super::enumerate::{Enumeration, Pruned, exhaustive};
use super::pool::{LetterPool, PositionSets};
use crate::core::{Constraints, GrayConstraint, GreenConstraint, Word, YellowConstraint};
use crate::dictionary::Dictionary;
use itertools::{Either, Itertools};
use log::debug;

/// Candidate words in generation order, without duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateList {
    words: Vec<Word>,
}

impl CandidateList {
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w.text() == word)
    }

    /// Words as plain strings
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.words.iter().map(Word::text).collect()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Word> {
        self.words
    }
}

impl<'a> IntoIterator for &'a CandidateList {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Counters describing one generation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// Size of the full product of the per-position sets
    pub search_space: u64,
    /// Complete 5-letter strings actually tested
    pub examined: u64,
}

/// Everything computed during one generation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generation {
    pub pool: LetterPool,
    pub position_sets: PositionSets,
    pub candidates: CandidateList,
    pub stats: GenerationStats,
}

/// Generates candidates from constraints against a borrowed dictionary
///
/// Stateless between calls: the same inputs always give the same output.
#[derive(Debug, Clone, Copy)]
pub struct CandidateGenerator<'d> {
    dictionary: &'d Dictionary,
    enumeration: Enumeration,
}

impl<'d> CandidateGenerator<'d> {
    #[must_use]
    pub const fn new(dictionary: &'d Dictionary) -> Self {
        Self {
            dictionary,
            enumeration: Enumeration::Pruned,
        }
    }

    #[must_use]
    pub const fn with_enumeration(mut self, enumeration: Enumeration) -> Self {
        self.enumeration = enumeration;
        self
    }

    #[must_use]
    pub const fn enumeration(&self) -> Enumeration {
        self.enumeration
    }

    /// Candidate words for `constraints`
    #[must_use]
    pub fn generate(&self, constraints: &Constraints) -> CandidateList {
        self.run(constraints).candidates
    }

    /// Candidate words plus the pool, position sets and counters behind them
    #[must_use]
    pub fn run(&self, constraints: &Constraints) -> Generation {
        self.run_parts(&constraints.greens, &constraints.yellows, &constraints.grays)
    }

    fn run_parts(
        &self,
        greens: &GreenConstraint,
        yellows: &YellowConstraint,
        grays: &GrayConstraint,
    ) -> Generation {
        let pool = LetterPool::new(greens, yellows, grays);
        debug!("Pool: {pool}");
        let position_sets = PositionSets::new(greens, yellows, &pool);
        debug!("Per-position sets: {position_sets}");

        let required = yellows.letters();
        let mut examined = 0u64;

        let combinations = match self.enumeration {
            Enumeration::Exhaustive => Either::Left(exhaustive(&position_sets)),
            Enumeration::Pruned => Either::Right(Pruned::new(&position_sets, self.dictionary)),
        };

        let words: Vec<Word> = combinations
            .inspect(|_| examined += 1)
            .filter(|letters| required.iter().all(|r| letters.contains(r)))
            .filter(|letters| self.dictionary.contains_chars(&letters.map(|l| l.byte())))
            .map(Word::from_letters)
            .unique()
            .inspect(|word| debug!("Candidate: {word}"))
            .collect();

        let stats = GenerationStats {
            search_space: position_sets.search_space(),
            examined,
        };
        debug!(
            "{} candidates ({} of {} combinations examined, {})",
            words.len(),
            stats.examined,
            stats.search_space,
            self.enumeration.name()
        );

        Generation {
            pool,
            position_sets,
            candidates: CandidateList { words },
            stats,
        }
    }
}

/// Every dictionary word consistent with the three constraint sets
///
/// # Examples
/// ```
/// use wordle_filter::dictionary::Dictionary;
/// use wordle_filter::generator::generate;
/// use wordle_filter::parser::parse;
///
/// let dictionary = Dictionary::from_text("slate\nstale\nsteal\nleast\n");
/// let c = parse("s____", "e2", "talk").unwrap();
///
/// // Generation order follows the pool order [s, e, t, a, l, k], not the alphabet
/// let candidates = generate(&c.greens, &c.yellows, &c.grays, &dictionary);
/// assert_eq!(candidates.texts(), vec!["steal", "stale", "slate"]);
/// ```
#[must_use]
pub fn generate(
    greens: &GreenConstraint,
    yellows: &YellowConstraint,
    grays: &GrayConstraint,
    dictionary: &Dictionary,
) -> CandidateList {
    CandidateGenerator::new(dictionary)
        .run_parts(greens, yellows, grays)
        .candidates
}
