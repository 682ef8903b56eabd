//! Canonical endofunction structures and their multiplicities

use crate::combinat::counting::factorial;
use crate::combinat::{Multiset, Necklace};
use crate::functions::{attached_tree, Endofunction};
use crate::trees::DominantTree;
use crate::Result;
use num_bigint::BigUint;
use std::fmt;

/// The shape of an endofunction with its labels forgotten
///
/// Every cycle of the function becomes a necklace whose beads are the trees
/// hanging from the cycle's nodes, taken in cycle order and rooted at level
/// 0. Two functions are conjugate exactly when their structures are equal.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct EndofunctionStructure {
    cycles: Multiset<Necklace<DominantTree>>,
}

impl EndofunctionStructure {
    /// The structure of the function on the empty set
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a structure from cycles of trees; the trees are moved to root
    /// level 0 and each cycle must hold at least one tree
    pub fn from_cycles<I>(cycles: I) -> Result<Self>
    where
        I: IntoIterator<Item = Vec<DominantTree>>,
    {
        let necklaces = cycles
            .into_iter()
            .map(|cycle| Necklace::new(cycle.iter().map(|tree| tree.rebased(0)).collect()))
            .collect::<Result<Vec<_>>>()?;
        Ok(necklaces.into_iter().collect())
    }

    /// The structure of a labelled function
    pub fn from_func(f: &Endofunction) -> Self {
        let ancestors = f.acyclic_ancestors();
        f.cycles()
            .into_iter()
            .map(|cycle| {
                let beads = cycle.iter().map(|&node| attached_tree(&ancestors, node)).collect();
                Necklace::from_cycle(beads)
            })
            .collect()
    }

    /// The cycles, as necklaces of trees
    pub fn cycles(&self) -> &Multiset<Necklace<DominantTree>> {
        &self.cycles
    }

    /// Number of cycles
    pub fn cycle_count(&self) -> usize {
        self.cycles.len()
    }

    /// Every tree of every cycle
    pub fn trees(&self) -> impl Iterator<Item = &DominantTree> + '_ {
        self.cycles.elements().flat_map(|necklace| necklace.beads())
    }

    /// Size of the underlying set
    pub fn node_count(&self) -> usize {
        self.trees().map(DominantTree::len).sum()
    }

    /// Number of labelled endofunctions with this structure:
    /// n! divided by the symmetries of the multiset of cycles, of each
    /// cycle under rotation and of each tree
    pub fn multiplicity(&self) -> BigUint {
        let mut degeneracy = self.cycles.degeneracy();
        for necklace in self.cycles.elements() {
            degeneracy *= necklace.degeneracy();
            for tree in necklace.beads() {
                degeneracy *= tree.degeneracy();
            }
        }
        factorial(self.node_count()) / degeneracy
    }

    /// A labelled representative: the trees are numbered consecutively in
    /// preorder, and the root of each tree is sent to the root of the next
    /// tree in its cycle
    pub fn to_func(&self) -> Endofunction {
        Endofunction::from_valid(cycles_to_func(
            self.cycles.elements().map(|necklace| necklace.beads()),
        ))
    }

    /// Image sizes of the iterates of any function with this structure
    pub fn imagepath(&self) -> Vec<usize> {
        self.to_func().imagepath()
    }
}

/// Lay out cycles of trees as one labelled function
fn cycles_to_func<'a, I>(cycles: I) -> Vec<usize>
where
    I: IntoIterator<Item = &'a [DominantTree]>,
{
    let mut func = Vec::new();
    for cycle in cycles {
        let cycle_start = func.len();
        let mut roots = Vec::with_capacity(cycle.len());
        for tree in cycle {
            let tree_start = func.len();
            roots.push(tree_start);
            func.extend(tree.labelled_func().into_iter().map(|node| node + tree_start));
        }
        for (i, &root) in roots.iter().enumerate() {
            func[root] = roots.get(i + 1).copied().unwrap_or(cycle_start);
        }
    }
    func
}

impl FromIterator<Necklace<DominantTree>> for EndofunctionStructure {
    fn from_iter<I: IntoIterator<Item = Necklace<DominantTree>>>(iter: I) -> Self {
        EndofunctionStructure {
            cycles: iter.into_iter().collect(),
        }
    }
}

impl From<&Endofunction> for EndofunctionStructure {
    fn from(f: &Endofunction) -> Self {
        EndofunctionStructure::from_func(f)
    }
}

impl fmt::Debug for EndofunctionStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EndofunctionStructure{}", self)
    }
}

/// Lists each cycle as its trees' level sequences
impl fmt::Display for EndofunctionStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (necklace, &mult)) in self.cycles.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "(")?;
            for (j, tree) in necklace.beads().iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:?}", tree.levels())?;
            }
            write!(f, ")")?;
            if mult > 1 {
                write!(f, "^{}", mult)?;
            }
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinat::counting::power;
    use crate::functions::TransformationMonoid;
    use crate::structures::EndofunctionStructures;
    use crate::utils::{randconj, randfunc};
    use crate::EnumerationConfig;
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    fn tree(levels: &[usize]) -> DominantTree {
        DominantTree::new(levels.to_vec()).unwrap()
    }

    #[test]
    fn test_cycles_to_func_layout() {
        let cycles = [
            vec![tree(&[1, 2, 3]), tree(&[1, 2, 2])],
            vec![tree(&[1, 2])],
            vec![tree(&[1, 2, 2]), tree(&[1]), tree(&[1, 2, 2])],
        ];
        let func = cycles_to_func(cycles.iter().map(Vec::as_slice));
        assert_eq!(func, vec![3, 0, 1, 0, 3, 3, 6, 6, 11, 8, 8, 12, 8, 12, 12]);
    }

    #[test]
    fn test_empty_structure() {
        let empty = EndofunctionStructure::empty();
        assert_eq!(empty.node_count(), 0);
        assert_eq!(empty.multiplicity(), BigUint::from(1u32));
        assert!(empty.to_func().is_empty());
        assert_eq!(EndofunctionStructure::from_func(&Endofunction::identity(0)), empty);
    }

    #[test]
    fn test_from_cycles() {
        let s = EndofunctionStructure::from_cycles(vec![
            vec![tree(&[1, 2]), tree(&[0])],
            vec![tree(&[0])],
        ])
        .unwrap();
        assert_eq!(s.node_count(), 4);
        assert_eq!(s.cycle_count(), 2);
        assert!(s.trees().all(|t| t.root_level() == 0));
        assert!(EndofunctionStructure::from_cycles(vec![vec![]]).is_err());

        // rotating a cycle gives the same structure
        let rotated = EndofunctionStructure::from_cycles(vec![
            vec![tree(&[0]), tree(&[0, 1])],
            vec![tree(&[0])],
        ])
        .unwrap();
        assert_eq!(rotated, s);
    }

    #[test]
    fn test_multiplicity() {
        // one 3-cycle: two labellings
        let cycle = EndofunctionStructure::from_cycles(vec![vec![tree(&[0]); 3]]).unwrap();
        assert_eq!(cycle.multiplicity(), BigUint::from(2u32));

        // the identity on three points
        let identity = EndofunctionStructure::from_func(&Endofunction::identity(3));
        assert_eq!(identity.multiplicity(), BigUint::from(1u32));

        // constant functions on four points
        let constant = EndofunctionStructure::from_func(&Endofunction::new(vec![0; 4]).unwrap());
        assert_eq!(constant.multiplicity(), BigUint::from(4u32));
    }

    #[test]
    fn test_func_roundtrip() {
        for n in 1..=6 {
            for s in EndofunctionStructures::new(n).iter() {
                let f = s.to_func();
                assert_eq!(f.len(), n);
                assert_eq!(EndofunctionStructure::from_func(&f), s);
            }
        }
    }

    #[test]
    fn test_multiplicity_counts_labelled_functions() {
        for n in 1..=5 {
            let mut counts: BTreeMap<EndofunctionStructure, usize> = BTreeMap::new();
            for f in TransformationMonoid::new(n).unwrap().iter() {
                *counts.entry(EndofunctionStructure::from_func(&f)).or_insert(0) += 1;
            }
            let enumerated: Vec<EndofunctionStructure> =
                EndofunctionStructures::new(n).iter().collect();
            assert_eq!(enumerated.len(), counts.len());
            for s in enumerated {
                assert_eq!(s.multiplicity(), BigUint::from(counts[&s]), "{}", s);
            }
            let total: usize = counts.values().sum();
            assert_eq!(BigUint::from(total), power(n, n));
        }
    }

    #[test]
    fn test_from_func_of_long_path() {
        let n = 100_000;
        let f = Endofunction::new((0..n).map(|x: usize| x.saturating_sub(1)).collect()).unwrap();
        let s = EndofunctionStructure::from_func(&f);
        assert_eq!(s.cycle_count(), 1);
        assert_eq!(s.node_count(), n);
        assert_eq!(s.trees().next().map(DominantTree::height), Some(n - 1));
    }

    #[test]
    fn test_display() {
        let s = EndofunctionStructure::from_cycles(vec![vec![tree(&[0])], vec![tree(&[0])]]).unwrap();
        assert_eq!(s.to_string(), "{([0])^2}");
    }

    proptest! {
        #[test]
        fn prop_structure_is_conjugation_invariant(seed in any::<u64>(), n in 1usize..25) {
            let mut rng = EnumerationConfig::new().with_seed(seed).rng();
            let f = randfunc(n, &mut rng);
            let g = randconj(&f, &mut rng);
            let s = EndofunctionStructure::from_func(&f);
            prop_assert_eq!(EndofunctionStructure::from_func(&g), s.clone());
            prop_assert_eq!(s.node_count(), n);
            prop_assert_eq!(s.cycle_count(), f.cycles().len());
            prop_assert_eq!(s.imagepath(), f.imagepath());
        }
    }
}
