//! Forest: an unordered collection of dominant trees

use super::DominantTree;
use crate::combinat::{Multiset, MultisetPartitions};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A forest is a multiset of rooted trees, so the order of trees is irrelevant
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "Vec<DominantTree>", into = "Vec<DominantTree>")]
pub struct Forest {
    trees: Multiset<DominantTree>,
}

impl Forest {
    /// The empty forest
    pub fn empty() -> Self {
        Forest {
            trees: Multiset::new(),
        }
    }

    /// A forest with a single tree
    pub fn single(tree: DominantTree) -> Self {
        std::iter::once(tree).collect()
    }

    /// Check if forest is empty
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    /// Number of trees, counted with multiplicity
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    /// The trees as a multiset
    pub fn trees(&self) -> &Multiset<DominantTree> {
        &self.trees
    }

    /// Total number of nodes across all trees
    pub fn node_count(&self) -> usize {
        self.trees.elements().map(DominantTree::len).sum()
    }

    /// Disjoint union of two forests
    pub fn union(&self, other: &Forest) -> Forest {
        Forest {
            trees: self.trees.sum(&other.trees),
        }
    }

    /// Iterate over every tree, repeated by multiplicity, in ascending order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &DominantTree> + '_ {
        self.trees.elements()
    }

    /// Number of node relabellings that fix the forest
    pub fn degeneracy(&self) -> BigUint {
        self.trees
            .iter()
            .fold(self.trees.degeneracy(), |deg, (tree, &mult)| {
                deg * num_traits::pow(tree.degeneracy(), mult)
            })
    }

    /// Ways of grouping the trees into non-empty sub-forests
    pub fn partitions(&self) -> MultisetPartitions<DominantTree> {
        self.trees.partitions()
    }

    /// Unwrap into the multiset of trees
    pub fn into_trees(self) -> Multiset<DominantTree> {
        self.trees
    }
}

impl Default for Forest {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Multiset<DominantTree>> for Forest {
    fn from(trees: Multiset<DominantTree>) -> Self {
        Forest { trees }
    }
}

impl From<Vec<DominantTree>> for Forest {
    fn from(trees: Vec<DominantTree>) -> Self {
        trees.into_iter().collect()
    }
}

impl From<Forest> for Vec<DominantTree> {
    fn from(forest: Forest) -> Self {
        forest.iter().rev().cloned().collect()
    }
}

impl FromIterator<DominantTree> for Forest {
    fn from_iter<I: IntoIterator<Item = DominantTree>>(iter: I) -> Self {
        Forest {
            trees: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Forest {
    type Item = (DominantTree, usize);
    type IntoIter = std::collections::btree_map::IntoIter<DominantTree, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.trees.into_iter()
    }
}

impl fmt::Debug for Forest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.trees.is_empty() {
            write!(f, "∅")
        } else {
            write!(f, "Forest[")?;
            for (i, tree) in self.iter().rev().enumerate() {
                if i > 0 {
                    write!(f, " × ")?;
                }
                write!(f, "{:?}", tree.levels())?;
            }
            write!(f, "]")
        }
    }
}
