//! Unordered rooted trees as nested multisets of subtrees

use super::{DominantTree, OrderedTree};
use crate::combinat::Multiset;
use num_bigint::BigUint;
use std::cmp::Ordering;
use std::fmt;

/// An unlabelled, unordered rooted tree
///
/// Nothing distinguishes the nodes, so a tree is characterized entirely by
/// the multiset of subtrees hanging from its root. The empty multiset is a
/// lone root. Ownership rules out any tree containing itself.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct RootedTree {
    subtrees: Multiset<RootedTree>,
}

impl RootedTree {
    /// A lone root
    pub fn leaf() -> Self {
        RootedTree {
            subtrees: Multiset::new(),
        }
    }

    /// The tree whose root carries the given subtrees
    pub fn new(subtrees: Multiset<RootedTree>) -> Self {
        RootedTree { subtrees }
    }

    /// The unordered tree described by a level sequence
    pub fn from_levels(tree: &OrderedTree) -> Self {
        RootedTree {
            subtrees: tree.subtrees().map(|subtree| Self::from_levels(&subtree)).collect(),
        }
    }

    /// The subtrees attached to the root
    pub fn subtrees(&self) -> &Multiset<RootedTree> {
        &self.subtrees
    }

    /// Number of nodes, root included
    pub fn node_count(&self) -> usize {
        1 + self
            .subtrees
            .iter()
            .map(|(tree, &mult)| tree.node_count() * mult)
            .sum::<usize>()
    }

    /// Distance from the root to the deepest node
    pub fn height(&self) -> usize {
        self.subtrees
            .keys()
            .map(|tree| 1 + tree.height())
            .max()
            .unwrap_or(0)
    }

    /// #(nodes)! / #(labellings): product of the subtree multiset's
    /// degeneracy and the degeneracies of every subtree
    pub fn degeneracy(&self) -> BigUint {
        self.subtrees
            .iter()
            .fold(self.subtrees.degeneracy(), |deg, (tree, &mult)| {
                deg * num_traits::pow(tree.degeneracy(), mult)
            })
    }

    /// Level sequence with subtrees in descending order, which is the
    /// dominant one
    pub fn level_sequence(&self, root_level: usize) -> Vec<usize> {
        let mut levels = vec![root_level];
        self.extend_levels(root_level + 1, &mut levels);
        levels
    }

    fn extend_levels(&self, level: usize, levels: &mut Vec<usize>) {
        for subtree in self.subtrees.elements().rev() {
            levels.push(level);
            subtree.extend_levels(level + 1, levels);
        }
    }

    /// Dominant ordering of the tree, rooted at level 0
    pub fn ordered_form(&self) -> DominantTree {
        DominantTree::preordered(self.level_sequence(0))
    }
}

impl From<&DominantTree> for RootedTree {
    fn from(tree: &DominantTree) -> Self {
        RootedTree::from_levels(tree.as_ordered())
    }
}

impl From<&RootedTree> for DominantTree {
    fn from(tree: &RootedTree) -> Self {
        tree.ordered_form()
    }
}

/// Trees compare by their dominant level sequences, so descending iteration
/// over a multiset of subtrees yields them in dominant order
impl Ord for RootedTree {
    fn cmp(&self, other: &Self) -> Ordering {
        self.level_sequence(0).cmp(&other.level_sequence(0))
    }
}

impl PartialOrd for RootedTree {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Writes the tree as nested braces, with exponents for repeated subtrees
impl fmt::Display for RootedTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (subtree, &mult)) in self.subtrees.iter().rev().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", subtree)?;
            if mult > 1 {
                write!(f, "^{}", mult)?;
            }
        }
        write!(f, "}}")
    }
}

impl fmt::Debug for RootedTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RootedTree({})", self)
    }
}
