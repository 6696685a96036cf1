//! Letter pool and per-position candidate sets
//!
//! Only letters mentioned in the feedback are ever tried. The pool is the
//! union of green, yellow and gray letters; each position then narrows it.

use crate::core::{GrayConstraint, GreenConstraint, Letter, Position, WORD_LEN, YellowConstraint};
use std::fmt;

/// Letters considered for any position, in first-mention order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterPool {
    letters: Vec<Letter>,
}

impl LetterPool {
    /// Greens (ascending position), then yellows (as typed), then grays; first
    /// mention wins
    ///
    /// # Examples
    /// ```
    /// use wordle_filter::generator::LetterPool;
    /// use wordle_filter::parser::parse;
    ///
    /// let c = parse("__a__", "b1", "cab").unwrap();
    /// let pool = LetterPool::new(&c.greens, &c.yellows, &c.grays);
    /// assert_eq!(pool.to_string(), "[abc]");
    /// ```
    #[must_use]
    pub fn new(greens: &GreenConstraint, yellows: &YellowConstraint, grays: &GrayConstraint) -> Self {
        let mut letters: Vec<Letter> = Vec::new();
        let mentioned = greens
            .iter()
            .map(|(_, letter)| letter)
            .chain(yellows.iter().map(|(_, letter)| letter))
            .chain(grays.letters().iter().copied());

        for letter in mentioned {
            if !letters.contains(&letter) {
                letters.push(letter);
            }
        }

        Self { letters }
    }

    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl fmt::Display for LetterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters: String = self.letters.iter().map(|l| l.as_char()).collect();
        write!(f, "[{letters}]")
    }
}

/// The allowed letters for each of the five positions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionSets {
    sets: [Vec<Letter>; WORD_LEN],
}

impl PositionSets {
    /// A green position allows exactly its green letter; any other position
    /// allows the pool minus the letters yellow-excluded there.
    #[must_use]
    pub fn new(greens: &GreenConstraint, yellows: &YellowConstraint, pool: &LetterPool) -> Self {
        let sets = std::array::from_fn(|index| {
            let position = Position::from_index(index);
            match greens.get(position) {
                Some(letter) => vec![letter],
                None => pool
                    .letters()
                    .iter()
                    .copied()
                    .filter(|&letter| !yellows.is_excluded(position, letter))
                    .collect(),
            }
        });

        Self { sets }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, position: Position) -> &[Letter] {
        &self.sets[position.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, &[Letter])> {
        self.sets
            .iter()
            .enumerate()
            .map(|(i, set)| (Position::from_index(i), set.as_slice()))
    }

    /// Number of 5-letter strings the sets can form
    #[must_use]
    pub fn search_space(&self) -> u64 {
        self.sets.iter().map(|set| set.len() as u64).product()
    }

    pub(crate) const fn sets(&self) -> &[Vec<Letter>; WORD_LEN] {
        &self.sets
    }
}

impl fmt::Display for PositionSets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<String> = self
            .iter()
            .map(|(position, set)| {
                let letters: String = set.iter().map(|l| l.as_char()).collect();
                format!("{position}: {letters}")
            })
            .collect();
        write!(f, "{{{}}}", entries.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    fn letters(text: &str) -> Vec<Letter> {
        text.chars().filter_map(Letter::new).collect()
    }

    fn pos(n: usize) -> Position {
        Position::new(n).unwrap()
    }

    fn build(green: &str, yellow: &str, gray: &str) -> (LetterPool, PositionSets) {
        let c = parse(green, yellow, gray).unwrap();
        let pool = LetterPool::new(&c.greens, &c.yellows, &c.grays);
        let sets = PositionSets::new(&c.greens, &c.yellows, &pool);
        (pool, sets)
    }

    #[test]
    fn empty_feedback_empty_pool() {
        let (pool, sets) = build("", "", "");
        assert!(pool.is_empty());
        assert_eq!(sets.search_space(), 0);
        for (_, set) in sets.iter() {
            assert!(set.is_empty());
        }
    }

    #[test]
    fn pool_order_and_dedup() {
        let (pool, _) = build("_e__a", "s2 e1", "tase");
        assert_eq!(pool.letters(), letters("east").as_slice());
        assert_eq!(pool.to_string(), "[east]");
    }

    #[test]
    fn green_only_pool_fills_every_position() {
        let (pool, sets) = build("__a__", "", "");
        assert_eq!(pool.letters(), letters("a").as_slice());
        for (_, set) in sets.iter() {
            assert_eq!(set, letters("a").as_slice());
        }
        assert_eq!(sets.search_space(), 1);
    }

    #[test]
    fn yellow_exclusion_is_per_position() {
        let (_, sets) = build("", "a3 b1", "cde");
        assert_eq!(sets.get(pos(1)), letters("acde").as_slice());
        assert_eq!(sets.get(pos(2)), letters("bacde").as_slice());
        assert_eq!(sets.get(pos(3)), letters("bcde").as_slice());
        assert_eq!(sets.get(pos(4)), letters("bacde").as_slice());
        assert_eq!(sets.get(pos(5)), letters("bacde").as_slice());
        assert_eq!(sets.search_space(), 4 * 5 * 4 * 5 * 5);
    }

    #[test]
    fn green_overrides_yellow_at_same_position() {
        // Contradictory input resolves to the green letter
        let (_, sets) = build("a____", "a1", "");
        assert_eq!(sets.get(pos(1)), letters("a").as_slice());
        assert!(sets.get(pos(2)).contains(&Letter::new('a').unwrap()));
    }

    #[test]
    fn yellow_and_gray_overlap_stays_in_pool() {
        let (pool, sets) = build("", "c2", "c");
        assert_eq!(pool.letters(), letters("c").as_slice());
        assert!(sets.get(pos(2)).is_empty());
        assert_eq!(sets.get(pos(1)), letters("c").as_slice());
        assert_eq!(sets.search_space(), 0);
    }

    #[test]
    fn display_sets() {
        let (_, sets) = build("s____", "a2", "at");
        assert_eq!(sets.to_string(), "{1: s, 2: st, 3: sat, 4: sat, 5: sat}");
    }
}
