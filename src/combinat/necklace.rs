//! Necklaces: cyclic sequences of beads considered up to rotation

use super::Multiset;
use crate::{Result, StructureError};
use std::cmp::Ordering;

/// A cyclic arrangement of beads, stored as its lexicographically least rotation
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Necklace<T: Ord + Clone> {
    beads: Vec<T>,
    /// Number of distinct rotations
    period: usize,
}

impl<T: Ord + Clone> Necklace<T> {
    /// Create the necklace containing the given cyclic sequence of beads
    pub fn new(beads: Vec<T>) -> Result<Self> {
        if beads.is_empty() {
            return Err(StructureError::EmptyNecklace);
        }
        Ok(Necklace::from_cycle(beads))
    }

    /// Necklace of a cycle known to be non-empty
    pub(crate) fn from_cycle(mut beads: Vec<T>) -> Self {
        debug_assert!(!beads.is_empty());
        let n = beads.len();
        let start = (0..n)
            .min_by(|&i, &j| {
                let left = beads[i..].iter().chain(&beads[..i]);
                let right = beads[j..].iter().chain(&beads[..j]);
                left.cmp(right)
            })
            .unwrap_or(0);
        beads.rotate_left(start);

        let period = (1..=n)
            .find(|&p| n % p == 0 && (0..n).all(|i| beads[i] == beads[(i + p) % n]))
            .unwrap_or(n);
        Necklace { beads, period }
    }

    /// The beads, starting from the least rotation
    pub fn beads(&self) -> &[T] {
        &self.beads
    }

    /// Number of beads
    pub fn len(&self) -> usize {
        self.beads.len()
    }

    /// Always false: necklaces have at least one bead
    pub fn is_empty(&self) -> bool {
        self.beads.is_empty()
    }

    /// Size of the rotation orbit of the bead sequence
    pub fn period(&self) -> usize {
        self.period
    }

    /// Number of rotations fixing the necklace: len / period
    pub fn degeneracy(&self) -> usize {
        self.beads.len() / self.period
    }

    /// The beads as a multiset
    pub fn content(&self) -> Multiset<T> {
        self.beads.iter().cloned().collect()
    }

    /// Every distinct rotation of the bead sequence
    pub fn rotations(&self) -> impl Iterator<Item = Vec<T>> + '_ {
        (0..self.period).map(move |i| {
            let mut beads = self.beads.clone();
            beads.rotate_left(i);
            beads
        })
    }
}

impl<T: Ord + Clone> IntoIterator for Necklace<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.beads.into_iter()
    }
}

/// Period of `word` if it is a necklace (its own least rotation), else None
fn necklace_period(word: &[usize]) -> Option<usize> {
    let mut p = 1;
    for i in 1..word.len() {
        match word[i].cmp(&word[i - p]) {
            Ordering::Less => return None,
            Ordering::Greater => p = i + 1,
            Ordering::Equal => {}
        }
    }
    (word.len() % p == 0).then_some(p)
}

/// Advance to the lexicographically next permutation; false at the last one
fn next_permutation(word: &mut [usize]) -> bool {
    let Some(i) = word.windows(2).rposition(|w| w[0] < w[1]) else {
        return false;
    };
    let Some(j) = word.iter().rposition(|&x| x > word[i]) else {
        return false;
    };
    word.swap(i, j);
    word[i + 1..].reverse();
    true
}

/// Lazy enumeration of every necklace with a fixed bead content
///
/// Walks the permutations of the content in lexicographic order and keeps
/// the prenecklaces whose period divides the length, which are exactly the
/// least rotations. Stops as soon as the leading bead changes.
#[derive(Clone, Debug)]
pub struct Necklaces<T: Ord + Clone> {
    distinct: Vec<T>,
    word: Vec<usize>,
    done: bool,
}

impl<T: Ord + Clone> Necklaces<T> {
    /// Necklaces whose beads are exactly `content`
    pub fn new(content: &Multiset<T>) -> Self {
        let word: Vec<usize> = content
            .iter()
            .enumerate()
            .flat_map(|(idx, (_, &count))| std::iter::repeat(idx).take(count))
            .collect();
        Necklaces {
            distinct: content.keys().cloned().collect(),
            done: word.is_empty(),
            word,
        }
    }
}

impl<T: Ord + Clone> Iterator for Necklaces<T> {
    type Item = Necklace<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let period = necklace_period(&self.word);
            let beads: Option<Vec<T>> = period.map(|_| {
                self.word
                    .iter()
                    .map(|&idx| self.distinct[idx].clone())
                    .collect()
            });
            self.done = !next_permutation(&mut self.word) || self.word[0] != 0;
            if let (Some(beads), Some(period)) = (beads, period) {
                return Some(Necklace { beads, period });
            }
        }
        None
    }
}
