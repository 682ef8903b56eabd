//! Enumeration of every endofunction structure on n nodes

use super::EndofunctionStructure;
use crate::combinat::{Multiset, Necklaces};
use crate::config::EnumerationConfig;
use crate::trees::{DominantTree, ForestEnumerator};
use itertools::Itertools;
use log::{debug, info};
use std::fmt;

/// The conjugacy classes of self-maps of an n-element set
///
/// Every structure is a forest whose trees have been grouped into cycles, so
/// the structures are generated by taking each forest on n nodes, each way of
/// splitting its trees into groups, and each way of arranging every group
/// into a cycle. Groups that occur several times receive a multiset of
/// arrangements, which keeps every structure unique.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndofunctionStructures {
    node_count: usize,
    progress_interval: Option<usize>,
}

impl EndofunctionStructures {
    /// Structures on `node_count` nodes; there are none on zero nodes
    pub fn new(node_count: usize) -> Self {
        Self::with_config(node_count, &EnumerationConfig::default())
    }

    /// Structures on `node_count` nodes, with progress logging as configured
    pub fn with_config(node_count: usize, config: &EnumerationConfig) -> Self {
        EndofunctionStructures {
            node_count,
            progress_interval: config.progress_interval,
        }
    }

    /// Size of the underlying set
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Generate every structure exactly once
    pub fn iter(&self) -> Structures {
        let n = self.node_count;
        debug!("enumerating endofunction structures on {} nodes", n);
        let inner: Box<dyn Iterator<Item = EndofunctionStructure>> = if n == 0 {
            Box::new(std::iter::empty())
        } else {
            Box::new(
                ForestEnumerator::new(n)
                    .iter()
                    .flat_map(|forest| forest.partitions())
                    .flat_map(grouped_structures),
            )
        };
        Structures {
            inner,
            node_count: n,
            produced: 0,
            progress_interval: self.progress_interval,
            finished: false,
        }
    }
}

impl IntoIterator for &EndofunctionStructures {
    type Item = EndofunctionStructure;
    type IntoIter = Structures;

    fn into_iter(self) -> Structures {
        self.iter()
    }
}

/// Every structure whose cycles hold exactly the given groups of trees
fn grouped_structures(
    groups: Vec<Multiset<DominantTree>>,
) -> impl Iterator<Item = EndofunctionStructure> {
    let groups: Multiset<Multiset<DominantTree>> = groups.into_iter().collect();
    groups
        .iter()
        .map(|(group, &mult)| Necklaces::new(group).combinations_with_replacement(mult))
        .collect::<Vec<_>>()
        .into_iter()
        .multi_cartesian_product()
        .map(|bundle| bundle.into_iter().flatten().collect::<EndofunctionStructure>())
}

/// Iterator returned by [`EndofunctionStructures::iter`]
pub struct Structures {
    inner: Box<dyn Iterator<Item = EndofunctionStructure>>,
    node_count: usize,
    produced: usize,
    progress_interval: Option<usize>,
    finished: bool,
}

impl Iterator for Structures {
    type Item = EndofunctionStructure;

    fn next(&mut self) -> Option<EndofunctionStructure> {
        match self.inner.next() {
            Some(structure) => {
                self.produced += 1;
                if let Some(interval) = self.progress_interval {
                    if self.produced % interval == 0 {
                        info!(
                            "{} endofunction structures on {} nodes so far",
                            self.produced, self.node_count
                        );
                    }
                }
                Some(structure)
            }
            None => {
                if !self.finished {
                    self.finished = true;
                    debug!(
                        "enumerated {} endofunction structures on {} nodes",
                        self.produced, self.node_count
                    );
                }
                None
            }
        }
    }
}

impl fmt::Debug for Structures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Structures")
            .field("node_count", &self.node_count)
            .field("produced", &self.produced)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinat::counting::power;
    use num_bigint::BigUint;
    use std::collections::BTreeSet;
    use test_log::test;

    // OEIS A001372, from n = 1
    const STRUCTURE_COUNTS: [usize; 12] = [1, 3, 7, 19, 47, 130, 343, 951, 2615, 7318, 20491, 57903];

    fn total_multiplicity(n: usize) -> BigUint {
        EndofunctionStructures::new(n).iter().map(|s| s.multiplicity()).sum()
    }

    #[test]
    fn test_no_structures_on_empty_set() {
        assert_eq!(EndofunctionStructures::new(0).iter().count(), 0);
    }

    #[test]
    fn test_three_nodes() {
        let structures: Vec<EndofunctionStructure> = EndofunctionStructures::new(3).iter().collect();
        assert_eq!(structures.len(), 7);
        let multiplicities: Vec<BigUint> = structures.iter().map(|s| s.multiplicity()).collect();
        assert_eq!(multiplicities.iter().sum::<BigUint>(), BigUint::from(27u32));
        assert!(structures.iter().all(|s| s.node_count() == 3));
    }

    #[test]
    fn test_structure_counts() {
        for (i, &expected) in STRUCTURE_COUNTS.iter().enumerate() {
            let n = i + 1;
            let structures: Vec<EndofunctionStructure> =
                EndofunctionStructures::new(n).iter().collect();
            assert_eq!(structures.len(), expected, "n = {}", n);
            let unique: BTreeSet<&EndofunctionStructure> = structures.iter().collect();
            assert_eq!(unique.len(), expected);
        }
    }

    #[test]
    fn test_multiplicities_sum_to_all_functions() {
        for n in 1..=12 {
            assert_eq!(total_multiplicity(n), power(n, n), "n = {}", n);
        }
    }

    #[test]
    fn test_progress_logging_does_not_change_output() {
        let config = EnumerationConfig::new().with_progress_interval(10);
        let logged: Vec<_> = EndofunctionStructures::with_config(5, &config).iter().collect();
        let plain: Vec<_> = EndofunctionStructures::new(5).iter().collect();
        assert_eq!(logged, plain);
    }
}
