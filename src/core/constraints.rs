//! Structured constraint sets derived from Wordle-style feedback
//!
//! - Greens pin a letter to a position.
//! - Yellows say a letter is in the word but not at the flagged position.
//! - Grays are extra letters the user still considers available.
//!
//! None of these types validate the combination they form; see
//! [`Constraints::conflicts`] for a read-only report of overlaps.

use super::letter::{Letter, Position, WORD_LEN};
use std::fmt;

/// Position -> letter fixed at that position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GreenConstraint {
    slots: [Option<Letter>; WORD_LEN],
}

impl GreenConstraint {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin `letter` at `position`, replacing any previous green there
    pub fn set(&mut self, position: Position, letter: Letter) {
        self.slots[position.index()] = Some(letter);
    }

    #[inline]
    #[must_use]
    pub const fn get(&self, position: Position) -> Option<Letter> {
        self.slots[position.index()]
    }

    /// Green entries in ascending position order
    pub fn iter(&self) -> impl Iterator<Item = (Position, Letter)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|letter| (Position::from_index(i), letter)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

/// Position -> letters known to be in the word but not at that position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YellowConstraint {
    excluded: [Vec<Letter>; WORD_LEN],
    /// Every distinct entry in the order it was first inserted
    entries: Vec<(Position, Letter)>,
}

impl YellowConstraint {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `letter` is present but not at `position`
    ///
    /// Repeating the same pair is a no-op.
    pub fn insert(&mut self, position: Position, letter: Letter) {
        let slot = &mut self.excluded[position.index()];
        if !slot.contains(&letter) {
            slot.push(letter);
            self.entries.push((position, letter));
        }
    }

    /// Letters excluded at `position`, in insertion order
    #[inline]
    #[must_use]
    pub fn excluded_at(&self, position: Position) -> &[Letter] {
        &self.excluded[position.index()]
    }

    #[inline]
    #[must_use]
    pub fn is_excluded(&self, position: Position, letter: Letter) -> bool {
        self.excluded[position.index()].contains(&letter)
    }

    /// Every (position, letter) entry in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (Position, Letter)> + '_ {
        self.entries.iter().copied()
    }

    /// Distinct yellow letters across all positions, first occurrence wins
    #[must_use]
    pub fn letters(&self) -> Vec<Letter> {
        let mut letters = Vec::new();
        for (_, letter) in self.iter() {
            if !letters.contains(&letter) {
                letters.push(letter);
            }
        }
        letters
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Letters the user lists as still available
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrayConstraint {
    letters: Vec<Letter>,
}

impl GrayConstraint {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a letter; duplicates are ignored
    pub fn insert(&mut self, letter: Letter) {
        if !self.letters.contains(&letter) {
            self.letters.push(letter);
        }
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.letters.contains(&letter)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

/// The three constraint sets produced by one round of feedback
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    pub greens: GreenConstraint,
    pub yellows: YellowConstraint,
    pub grays: GrayConstraint,
}

/// An overlap between constraint sets that the generator resolves mechanically
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conflict {
    /// The green letter at a position is also yellow-excluded there
    GreenAlsoYellow { position: Position, letter: Letter },
    /// A green letter is also listed as gray
    GreenAlsoGray { position: Position, letter: Letter },
    /// A yellow letter is also listed as gray
    YellowAlsoGray { position: Position, letter: Letter },
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GreenAlsoYellow { position, letter } => write!(
                f,
                "'{letter}' is green at position {position} but also marked yellow there"
            ),
            Self::GreenAlsoGray { position, letter } => write!(
                f,
                "'{letter}' is green at position {position} and also listed as gray"
            ),
            Self::YellowAlsoGray { position, letter } => write!(
                f,
                "'{letter}' is yellow at position {position} and also listed as gray"
            ),
        }
    }
}

impl Constraints {
    #[must_use]
    pub const fn new(
        greens: GreenConstraint,
        yellows: YellowConstraint,
        grays: GrayConstraint,
    ) -> Self {
        Self {
            greens,
            yellows,
            grays,
        }
    }

    /// True when no feedback letters were given at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.greens.is_empty() && self.yellows.is_empty() && self.grays.is_empty()
    }

    /// Report overlapping constraints
    ///
    /// Purely informational: generation applies the per-position rules regardless.
    #[must_use]
    pub fn conflicts(&self) -> Vec<Conflict> {
        let mut conflicts = Vec::new();

        for (position, letter) in self.greens.iter() {
            if self.yellows.is_excluded(position, letter) {
                conflicts.push(Conflict::GreenAlsoYellow { position, letter });
            }
            if self.grays.contains(letter) {
                conflicts.push(Conflict::GreenAlsoGray { position, letter });
            }
        }

        for (position, letter) in self.yellows.iter() {
            if self.grays.contains(letter) {
                conflicts.push(Conflict::YellowAlsoGray { position, letter });
            }
        }

        conflicts
    }
}

impl fmt::Display for GreenConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<String> = self.iter().map(|(p, l)| format!("{p}: {l}")).collect();
        write!(f, "{{{}}}", entries.join(", "))
    }
}

impl fmt::Display for YellowConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<String> = Position::all()
            .filter(|&p| !self.excluded_at(p).is_empty())
            .map(|p| {
                let letters: String = self.excluded_at(p).iter().map(|l| l.as_char()).collect();
                format!("{p}: {letters}")
            })
            .collect();
        write!(f, "{{{}}}", entries.join(", "))
    }
}

impl fmt::Display for GrayConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters: String = self.letters.iter().map(|l| l.as_char()).collect();
        write!(f, "[{letters}]")
    }
}
