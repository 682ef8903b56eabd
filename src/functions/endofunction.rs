//! Endofunctions on {0, ..., n-1} and their cycle/tree decomposition

use crate::trees::{DominantTree, OrderedTree};
use crate::{Result, StructureError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::ops::Index;

/// A function from {0, ..., n-1} into itself, stored as its table of values
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Endofunction {
    map: Vec<usize>,
}

/// Visit state of a node during cycle detection
#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    Unseen,
    OnPath,
    Done,
}

impl Endofunction {
    /// Create an endofunction with `map[x]` the image of x
    pub fn new(map: Vec<usize>) -> Result<Self> {
        let size = map.len();
        if let Some((index, &value)) = map.iter().enumerate().find(|&(_, &y)| y >= size) {
            return Err(StructureError::OutOfDomain { index, value, size });
        }
        Ok(Endofunction { map })
    }

    /// Wrap a table already known to stay inside its domain
    pub(crate) fn from_valid(map: Vec<usize>) -> Self {
        Endofunction { map }
    }

    /// The identity on n elements
    pub fn identity(n: usize) -> Self {
        Endofunction {
            map: (0..n).collect(),
        }
    }

    /// Size of the domain
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the domain is empty
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The table of values
    pub fn as_slice(&self) -> &[usize] {
        &self.map
    }

    /// The set of values taken
    pub fn image(&self) -> BTreeSet<usize> {
        self.map.iter().copied().collect()
    }

    /// `preimage()[y]` lists every x with f(x) = y, in increasing order
    pub fn preimage(&self) -> Vec<Vec<usize>> {
        let mut preimage = vec![Vec::new(); self.len()];
        for (x, &y) in self.map.iter().enumerate() {
            preimage[y].push(x);
        }
        preimage
    }

    /// `f.compose(&g)` is x ↦ f(g(x))
    pub fn compose(&self, other: &Endofunction) -> Result<Endofunction> {
        if self.len() != other.len() {
            return Err(StructureError::IncompatibleDomains {
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(self.after(other))
    }

    fn after(&self, other: &Endofunction) -> Endofunction {
        Endofunction {
            map: other.map.iter().map(|&y| self.map[y]).collect(),
        }
    }

    /// The k-th iterate f∘f∘…∘f, by repeated squaring
    pub fn iterate(&self, mut k: usize) -> Endofunction {
        let mut result = Endofunction::identity(self.len());
        let mut square = self.clone();
        while k > 0 {
            if k & 1 == 1 {
                result = square.after(&result);
            }
            k >>= 1;
            if k > 0 {
                square = square.after(&square);
            }
        }
        result
    }

    /// Image sizes of the iterates f, f², …, f^(n-1)
    ///
    /// Always has at least one entry. The last entry is the number of cyclic
    /// nodes.
    pub fn imagepath(&self) -> Vec<usize> {
        let steps = self.len().saturating_sub(1).max(1);
        let mut image: Vec<usize> = self.image().into_iter().collect();
        let mut path = Vec::with_capacity(steps);
        path.push(image.len());
        while path.len() < steps {
            let next: BTreeSet<usize> = image.iter().map(|&x| self.map[x]).collect();
            if next.len() == image.len() {
                // f permutes its current image, so the sizes are fixed from here on
                path.resize(steps, next.len());
                break;
            }
            image = next.into_iter().collect();
            path.push(image.len());
        }
        path
    }

    /// The cycles of f, each listed so that f sends every entry to the next
    ///
    /// Every node is visited once.
    pub fn cycles(&self) -> Vec<Vec<usize>> {
        let mut visit = vec![Visit::Unseen; self.len()];
        let mut cycles = Vec::new();
        let mut path = Vec::new();
        for start in 0..self.len() {
            let mut x = start;
            while visit[x] == Visit::Unseen {
                visit[x] = Visit::OnPath;
                path.push(x);
                x = self.map[x];
            }
            if visit[x] == Visit::OnPath {
                if let Some(entry) = path.iter().position(|&y| y == x) {
                    cycles.push(path[entry..].to_vec());
                }
            }
            for &y in &path {
                visit[y] = Visit::Done;
            }
            path.clear();
        }
        cycles
    }

    /// Nodes lying on a cycle
    pub fn limitset(&self) -> BTreeSet<usize> {
        self.cycles().into_iter().flatten().collect()
    }

    /// `acyclic_ancestors()[y]`: the non-cyclic nodes mapped to y
    pub fn acyclic_ancestors(&self) -> Vec<Vec<usize>> {
        let limitset = self.limitset();
        let mut ancestors = self.preimage();
        for preimage in &mut ancestors {
            preimage.retain(|x| !limitset.contains(x));
        }
        ancestors
    }

    /// Dominant tree, rooted at level 0, of the non-cyclic nodes whose
    /// iteration passes through `node`
    pub fn attached_tree(&self, node: usize) -> DominantTree {
        attached_tree(&self.acyclic_ancestors(), node)
    }

    /// The rooted tree of a function with a single fixed point as its only cycle
    pub fn tree_form(&self) -> Result<DominantTree> {
        match self.cycles().as_slice() {
            [cycle] if cycle.len() == 1 => Ok(self.attached_tree(cycle[0])),
            _ => Err(StructureError::NotATree),
        }
    }
}

/// Tree hanging from `node`, given each node's acyclic preimage
pub(crate) fn attached_tree(ancestors: &[Vec<usize>], node: usize) -> DominantTree {
    let mut levels = Vec::new();
    let mut stack = vec![(node, 0)];
    while let Some((node, level)) = stack.pop() {
        levels.push(level);
        stack.extend(ancestors[node].iter().rev().map(|&child| (child, level + 1)));
    }
    OrderedTree::from_valid(levels).canonical()
}

impl Index<usize> for Endofunction {
    type Output = usize;

    fn index(&self, x: usize) -> &usize {
        &self.map[x]
    }
}

impl TryFrom<Vec<usize>> for Endofunction {
    type Error = StructureError;

    fn try_from(map: Vec<usize>) -> Result<Self> {
        Endofunction::new(map)
    }
}

impl From<Endofunction> for Vec<usize> {
    fn from(f: Endofunction) -> Self {
        f.map
    }
}

impl fmt::Debug for Endofunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Endofunction{:?}", self.map)
    }
}

impl fmt::Display for Endofunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (x, y) in self.map.iter().enumerate() {
            if x > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}→{}", x, y)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn func(map: &[usize]) -> Endofunction {
        Endofunction::new(map.to_vec()).unwrap()
    }

    const CYCLE_TEST_FUNCS: [&[usize]; 3] = [
        &[1, 0],
        &[9, 5, 7, 6, 2, 0, 9, 5, 7, 6, 2],
        &[7, 2, 2, 3, 4, 3, 9, 2, 2, 10, 10, 11, 12, 5],
    ];

    #[test]
    fn test_out_of_domain() {
        assert_eq!(
            Endofunction::new(vec![0, 3, 1]),
            Err(StructureError::OutOfDomain {
                index: 1,
                value: 3,
                size: 3
            })
        );
        assert!(Endofunction::new(vec![]).is_ok());
    }

    #[test]
    fn test_image_and_preimage() {
        let f = func(&[1, 1, 3, 1]);
        assert_eq!(f.image(), BTreeSet::from([1, 3]));
        assert_eq!(f.preimage(), vec![vec![], vec![0, 1, 3], vec![], vec![2]]);
    }

    #[test]
    fn test_compose_and_iterate() {
        let f = func(&[1, 2, 0, 0]);
        let g = func(&[3, 3, 3, 3]);
        assert_eq!(f.compose(&g).unwrap(), func(&[0, 0, 0, 0]));
        assert_eq!(g.compose(&f).unwrap(), g);
        assert_eq!(
            f.compose(&func(&[0])),
            Err(StructureError::IncompatibleDomains { left: 4, right: 1 })
        );

        assert_eq!(f.iterate(0), Endofunction::identity(4));
        assert_eq!(f.iterate(1), f);
        assert_eq!(f.iterate(3), func(&[0, 1, 2, 2]));
        let mut repeated = Endofunction::identity(4);
        for k in 0..10 {
            assert_eq!(f.iterate(k), repeated);
            repeated = f.compose(&repeated).unwrap();
        }
    }

    #[test]
    fn test_imagepath_small() {
        assert_eq!(func(&[0]).imagepath(), vec![1]);
        assert_eq!(func(&[0, 0]).imagepath(), vec![1]);
        assert_eq!(func(&[1, 1]).imagepath(), vec![1]);
        assert_eq!(func(&[0, 1]).imagepath(), vec![2]);
        assert_eq!(func(&[1, 0]).imagepath(), vec![2]);
    }

    #[test]
    fn test_imagepath_families() {
        for n in [2, 3, 5, 15] {
            // 0 <- 1 <- 2 <- ... <- n-1, with 0 fixed
            let mut tower = vec![0];
            tower.extend(0..n - 1);
            assert_eq!(func(&tower).imagepath(), (1..n).rev().collect::<Vec<_>>());

            let mut cycle = vec![n - 1];
            cycle.extend(0..n - 1);
            assert_eq!(func(&cycle).imagepath(), vec![n; n - 1]);

            let identity = Endofunction::identity(n);
            assert_eq!(identity.imagepath(), vec![n; n - 1]);

            assert_eq!(func(&vec![0; n]).imagepath(), vec![1; n - 1]);
        }
    }

    #[test]
    fn test_cycles_follow_the_function() {
        for map in CYCLE_TEST_FUNCS {
            let f = func(map);
            for cycle in f.cycles() {
                for (i, &x) in cycle.iter().enumerate() {
                    assert_eq!(f[x], cycle[(i + 1) % cycle.len()]);
                }
            }
        }
    }

    #[test]
    fn test_cycles_unique_and_complete() {
        for map in CYCLE_TEST_FUNCS {
            let f = func(map);
            let cycles = f.cycles();
            let nodes: Vec<usize> = cycles.iter().flatten().copied().collect();
            let unique: BTreeSet<usize> = nodes.iter().copied().collect();
            assert_eq!(unique.len(), nodes.len());
            assert_eq!(f.imagepath().last().copied(), Some(nodes.len()));
        }
    }

    #[test]
    fn test_acyclic_ancestors_not_cyclic() {
        for map in CYCLE_TEST_FUNCS {
            let f = func(map);
            let limitset = f.limitset();
            for (y, ancestors) in f.acyclic_ancestors().iter().enumerate() {
                for x in ancestors {
                    assert_eq!(f[*x], y);
                    assert!(!limitset.contains(x));
                }
            }
        }
    }

    #[test]
    fn test_tree_form() {
        let tree = DominantTree::new(vec![1, 2, 3, 4, 4, 4, 3, 4, 4, 2, 3, 3, 2, 3]).unwrap();
        let f = tree.to_endofunction();
        assert_eq!(f.as_slice(), &[0, 0, 1, 2, 2, 2, 1, 6, 6, 0, 9, 9, 0, 12]);
        assert_eq!(f.tree_form().unwrap(), tree.rebased(0));

        assert_eq!(func(&[1, 0]).tree_form(), Err(StructureError::NotATree));
        assert_eq!(func(&[0, 1]).tree_form(), Err(StructureError::NotATree));
    }

    #[test]
    fn test_attached_tree() {
        // 3 -> 1 -> 0 <- 2, 0 -> 4 -> 0
        let f = func(&[4, 0, 0, 1, 0]);
        assert_eq!(f.attached_tree(0).levels(), &[0, 1, 2, 1]);
        assert_eq!(f.attached_tree(4).levels(), &[0]);
    }

    #[test]
    fn test_attached_tree_of_long_path() {
        let n = 100_000;
        let f = Endofunction::new((0..n).map(|x: usize| x.saturating_sub(1)).collect()).unwrap();
        let levels: Vec<usize> = (0..n).collect();
        assert_eq!(f.tree_form().unwrap().levels(), &levels[..]);
    }

    #[test]
    fn test_display() {
        assert_eq!(func(&[1, 0]).to_string(), "{0→1, 1→0}");
        assert_eq!(format!("{:?}", func(&[1, 0])), "Endofunction[1, 0]");
    }

    fn arbitrary_function() -> impl Strategy<Value = Endofunction> {
        (1usize..40)
            .prop_flat_map(|n| prop::collection::vec(0..n, n))
            .prop_map(|map| Endofunction::new(map).unwrap())
    }

    proptest! {
        #[test]
        fn prop_cycles_partition_the_limitset(f in arbitrary_function()) {
            let cycles = f.cycles();
            let total: usize = cycles.iter().map(Vec::len).sum();
            prop_assert_eq!(total, f.limitset().len());
            prop_assert_eq!(f.imagepath().last().copied(), Some(total));
            for cycle in &cycles {
                prop_assert_eq!(f.iterate(cycle.len())[cycle[0]], cycle[0]);
            }
        }

        #[test]
        fn prop_attached_trees_cover_domain(f in arbitrary_function()) {
            let nodes: usize = f.limitset().iter().map(|&x| f.attached_tree(x).len()).sum();
            prop_assert_eq!(nodes, f.len());
        }
    }
}
