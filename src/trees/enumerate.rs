//! Exhaustive generation of unlabelled rooted trees and forests

use super::{DominantTree, Forest};
use crate::combinat::counting::{divisors, multichoose};
use crate::combinat::Multiset;
use crate::config::EnumerationConfig;
use crate::{Result, StructureError};
use itertools::{Either, Itertools};
use log::{debug, trace};
use num_bigint::BigUint;

/// The unlabelled rooted trees on a fixed number of nodes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeEnumerator {
    node_count: usize,
    root_height: usize,
}

impl TreeEnumerator {
    /// Trees on `node_count` nodes, rooted at level 0
    pub fn new(node_count: usize) -> Result<Self> {
        Self::with_config(node_count, &EnumerationConfig::default())
    }

    /// Trees on `node_count` nodes, rooted at the configured level
    pub fn with_config(node_count: usize, config: &EnumerationConfig) -> Result<Self> {
        if node_count == 0 {
            return Err(StructureError::InvalidDomainSize(0));
        }
        Ok(TreeEnumerator {
            node_count,
            root_height: config.root_height,
        })
    }

    /// Move the roots of the enumerated trees to `root_height`
    pub fn with_root_height(mut self, root_height: usize) -> Self {
        self.root_height = root_height;
        self
    }

    /// Number of nodes in each tree
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Generate the dominant trees, from the path to the star
    pub fn iter(&self) -> DominantTrees {
        debug!("enumerating rooted trees on {} nodes", self.node_count);
        DominantTrees {
            levels: (self.root_height..self.root_height + self.node_count).collect(),
            started: false,
            done: false,
        }
    }

    /// Number of rooted trees on n nodes, from the recurrence
    /// (n-1) T(n) = Σ_{i<n} (Σ_{d|i} d T(d)) T(n-i)
    ///
    /// See Finch, "Otter's Tree Enumeration Constants", Mathematical
    /// Constants 5.6 (2003).
    pub fn cardinality(&self) -> BigUint {
        tree_counts(self.node_count).swap_remove(self.node_count)
    }
}

impl IntoIterator for &TreeEnumerator {
    type Item = DominantTree;
    type IntoIter = DominantTrees;

    fn into_iter(self) -> DominantTrees {
        self.iter()
    }
}

/// Tree counts T(0..=n), with T(0) = 0
fn tree_counts(n: usize) -> Vec<BigUint> {
    let mut counts = vec![BigUint::default(); n + 1];
    if n >= 1 {
        counts[1] = BigUint::from(1u32);
    }
    // weights[i] = Σ_{d|i} d T(d)
    let mut weights = vec![BigUint::default(); n + 1];
    for m in 2..=n {
        let i = m - 1;
        weights[i] = divisors(i)
            .into_iter()
            .map(|d| &counts[d] * d)
            .sum();
        let total: BigUint = (1..m).map(|i| &weights[i] * &counts[m - i]).sum();
        counts[m] = total / (m - 1);
    }
    counts
}

/// Iterator over dominant trees by the constant-time successor of
/// T. Beyer and S. M. Hedetniemi, "Constant time generation of rooted
/// trees", SIAM J. Comput. 9(4), 1980
#[derive(Clone, Debug)]
pub struct DominantTrees {
    levels: Vec<usize>,
    started: bool,
    done: bool,
}

impl DominantTrees {
    /// Overwrite `levels` with the next dominant tree in lexicographic order
    fn advance(&mut self) -> bool {
        let levels = &mut self.levels;
        let n = levels.len();
        if n <= 2 || levels[1] == levels[2] {
            return false;
        }
        let mut p = n - 1;
        while levels[p] == levels[1] {
            p -= 1;
        }
        let mut q = p - 1;
        while levels[q] >= levels[p] {
            q -= 1;
        }
        let shift = p - q;
        for i in p..n {
            levels[i] = levels[i - shift];
        }
        true
    }
}

impl Iterator for DominantTrees {
    type Item = DominantTree;

    fn next(&mut self) -> Option<DominantTree> {
        if self.done {
            return None;
        }
        if self.started {
            if !self.advance() {
                debug!("finished rooted trees on {} nodes", self.levels.len());
                self.done = true;
                return None;
            }
        } else {
            self.started = true;
        }
        trace!("tree {:?}", self.levels);
        Some(DominantTree::preordered(self.levels.clone()))
    }
}

/// Collections of rooted trees with n nodes in total
///
/// A tree on n + 1 nodes is the same thing as a forest on n nodes grafted
/// onto a new root, so the forests come from chopping those trees.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForestEnumerator {
    trees: TreeEnumerator,
}

impl ForestEnumerator {
    /// Forests on `node_count` nodes, with roots at level 0
    pub fn new(node_count: usize) -> Self {
        Self::with_config(node_count, &EnumerationConfig::default())
    }

    /// Forests on `node_count` nodes, with roots at the configured level
    pub fn with_config(node_count: usize, config: &EnumerationConfig) -> Self {
        ForestEnumerator {
            trees: TreeEnumerator {
                node_count: node_count + 1,
                root_height: config.root_height,
            },
        }
    }

    /// Number of nodes in each forest
    pub fn node_count(&self) -> usize {
        self.trees.node_count - 1
    }

    /// Generate every forest exactly once
    pub fn iter(&self) -> impl Iterator<Item = Forest> {
        self.trees.iter().map(|tree| Forest::from(tree.chop()))
    }

    /// Number of forests, equal to the number of trees with one more node
    pub fn cardinality(&self) -> BigUint {
        self.trees.cardinality()
    }
}

/// Forests whose tree sizes are given by an integer partition
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartitionForests {
    partition: Multiset<usize>,
    root_height: usize,
}

impl PartitionForests {
    /// Forests with one tree of size y per part y of `partition`
    pub fn new(partition: Multiset<usize>) -> Result<Self> {
        Self::with_config(partition, &EnumerationConfig::default())
    }

    /// As [`PartitionForests::new`], with roots at the configured level
    pub fn with_config(partition: Multiset<usize>, config: &EnumerationConfig) -> Result<Self> {
        if partition.count(&0) > 0 {
            return Err(StructureError::InvalidDomainSize(0));
        }
        Ok(PartitionForests {
            partition,
            root_height: config.root_height,
        })
    }

    /// The tree sizes
    pub fn partition(&self) -> &Multiset<usize> {
        &self.partition
    }

    /// Generate every such forest exactly once
    pub fn iter(&self) -> impl Iterator<Item = Forest> {
        if self.partition.is_empty() {
            return Either::Left(std::iter::once(Forest::empty()));
        }
        let groups: Vec<_> = self
            .partition
            .iter()
            .map(|(&size, &mult)| {
                TreeEnumerator {
                    node_count: size,
                    root_height: self.root_height,
                }
                .iter()
                .combinations_with_replacement(mult)
            })
            .collect();
        Either::Right(
            groups
                .into_iter()
                .multi_cartesian_product()
                .map(|choice| choice.into_iter().flatten().collect::<Forest>()),
        )
    }

    /// ∏ over distinct sizes y with multiplicity r of C(T(y) + r - 1, r)
    pub fn cardinality(&self) -> BigUint {
        let largest = self.partition.keys().next_back().copied().unwrap_or(0);
        let counts = tree_counts(largest);
        self.partition
            .iter()
            .fold(BigUint::from(1u32), |acc, (&size, &mult)| {
                acc * multichoose(&counts[size], mult)
            })
    }
}
