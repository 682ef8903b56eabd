//! Multisets: finite maps from distinct elements to positive multiplicities

use super::counting::factorial;
use super::partitions::MultisetPartitions;
use num_bigint::BigUint;
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

/// An immutable multiset, stored as a sorted map of element counts
///
/// - Every stored count is at least one
/// - Two multisets are equal whenever they hold the same elements with the
///   same counts, whatever order they were built in
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Multiset<T: Ord> {
    counts: BTreeMap<T, usize>,
}

impl<T: Ord> Multiset<T> {
    /// The empty multiset
    pub fn new() -> Self {
        Multiset {
            counts: BTreeMap::new(),
        }
    }

    /// Build from `(element, count)` pairs; zero counts are dropped and
    /// repeated elements accumulate
    pub fn from_counts<I: IntoIterator<Item = (T, usize)>>(pairs: I) -> Self {
        let mut counts = BTreeMap::new();
        for (elem, count) in pairs {
            if count > 0 {
                *counts.entry(elem).or_insert(0) += count;
            }
        }
        Multiset { counts }
    }

    /// Total number of elements, counted with multiplicity
    pub fn len(&self) -> usize {
        self.counts.values().sum()
    }

    /// Whether the multiset has no elements
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct elements
    pub fn num_distinct(&self) -> usize {
        self.counts.len()
    }

    /// Multiplicity of an element (zero when absent)
    pub fn count(&self, elem: &T) -> usize {
        self.counts.get(elem).copied().unwrap_or(0)
    }

    /// Iterate over distinct elements with their counts, in ascending order
    pub fn iter(&self) -> btree_map::Iter<'_, T, usize> {
        self.counts.iter()
    }

    /// Iterate over distinct elements in ascending order
    pub fn keys(&self) -> btree_map::Keys<'_, T, usize> {
        self.counts.keys()
    }

    /// Iterate over every element, repeated by its multiplicity
    pub fn elements(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        self.counts
            .iter()
            .flat_map(|(elem, &count)| (0..count).map(move |_| elem))
    }

    /// Distinct elements and their counts as parallel vectors
    pub fn split(&self) -> (Vec<&T>, Vec<usize>) {
        self.counts.iter().map(|(elem, &count)| (elem, count)).unzip()
    }

    /// Number of rearrangements of a sequence of the elements that leave it
    /// unchanged: ∏ count!
    pub fn degeneracy(&self) -> BigUint {
        self.counts
            .values()
            .fold(BigUint::from(1u32), |acc, &count| acc * factorial(count))
    }

    /// Number of distinct orderings of the elements: len! / degeneracy
    pub fn arrangements(&self) -> BigUint {
        factorial(self.len()) / self.degeneracy()
    }

    /// Apply a function to every element, merging counts of equal images
    pub fn map<U: Ord, F: FnMut(&T) -> U>(&self, mut f: F) -> Multiset<U> {
        Multiset::from_counts(self.counts.iter().map(|(elem, &count)| (f(elem), count)))
    }
}

impl<T: Ord + Clone> Multiset<T> {
    /// Multiset sum: counts of both operands added together
    pub fn sum(&self, other: &Multiset<T>) -> Multiset<T> {
        Multiset::from_counts(
            self.counts
                .iter()
                .chain(other.counts.iter())
                .map(|(elem, &count)| (elem.clone(), count)),
        )
    }

    /// Every way of splitting the multiset into a multiset of non-empty parts
    pub fn partitions(&self) -> MultisetPartitions<T> {
        MultisetPartitions::new(self)
    }
}

impl<T: Ord> Default for Multiset<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for Multiset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Multiset::from_counts(iter.into_iter().map(|elem| (elem, 1)))
    }
}

impl<T: Ord> IntoIterator for Multiset<T> {
    type Item = (T, usize);
    type IntoIter = btree_map::IntoIter<T, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

impl<'a, T: Ord> IntoIterator for &'a Multiset<T> {
    type Item = (&'a T, &'a usize);
    type IntoIter = btree_map::Iter<'a, T, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}

impl<T: Ord + fmt::Debug> fmt::Debug for Multiset<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Multiset{{")?;
        for (i, (elem, count)) in self.counts.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", elem)?;
            if *count > 1 {
                write!(f, "^{}", count)?;
            }
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_multiset() {
        let m: Multiset<u8> = Multiset::new();
        assert!(m.is_empty());
        assert_eq!(m.len(), 0);
        assert_eq!(m.degeneracy(), BigUint::from(1u32));
        assert_eq!(m.arrangements(), BigUint::from(1u32));
    }

    #[test]
    fn test_insertion_order_irrelevant() {
        let a: Multiset<char> = "abracadabra".chars().collect();
        let b: Multiset<char> = "aaaaabbrrcd".chars().collect();
        assert_eq!(a, b);
        assert_eq!(a.count(&'a'), 5);
        assert_eq!(a.count(&'z'), 0);
        assert_eq!(a.num_distinct(), 5);
        assert_eq!(a.len(), 11);
    }

    #[test]
    fn test_zero_counts_dropped() {
        let m = Multiset::from_counts(vec![('a', 2), ('b', 0), ('a', 1)]);
        assert_eq!(m.num_distinct(), 1);
        assert_eq!(m.count(&'a'), 3);
    }

    #[test]
    fn test_degeneracy() {
        // 5! 2! 2!
        let m: Multiset<char> = "abracadabra".chars().collect();
        assert_eq!(m.degeneracy(), BigUint::from(480u32));
        // 11! / (5! 2! 2!)
        assert_eq!(m.arrangements(), BigUint::from(83160u32));

        let distinct: Multiset<u32> = (0..5).collect();
        assert_eq!(distinct.degeneracy(), BigUint::from(1u32));
        assert_eq!(distinct.arrangements(), BigUint::from(120u32));
    }

    #[test]
    fn test_split_and_elements() {
        let m: Multiset<u32> = vec![3, 1, 3, 2, 3].into_iter().collect();
        let (elems, counts) = m.split();
        assert_eq!(elems, vec![&1, &2, &3]);
        assert_eq!(counts, vec![1, 1, 3]);
        let all: Vec<u32> = m.elements().copied().collect();
        assert_eq!(all, vec![1, 2, 3, 3, 3]);
        let reversed: Vec<u32> = m.elements().rev().copied().collect();
        assert_eq!(reversed, vec![3, 3, 3, 2, 1]);
    }

    #[test]
    fn test_sum_and_map() {
        let a: Multiset<u32> = vec![1, 2].into_iter().collect();
        let b: Multiset<u32> = vec![2, 3].into_iter().collect();
        let s = a.sum(&b);
        assert_eq!(s.count(&2), 2);
        assert_eq!(s.len(), 4);

        let parity = s.map(|x| x % 2);
        assert_eq!(parity.count(&0), 2);
        assert_eq!(parity.count(&1), 2);
    }
}
