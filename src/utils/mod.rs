//! Random sampling of functions and trees

use crate::functions::{Endofunction, SymmetricFunction};
use crate::trees::DominantTree;
use crate::{Result, StructureError};
use rand::seq::SliceRandom;
use rand::Rng;

/// A uniformly random endofunction on n elements
pub fn randfunc<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Endofunction {
    Endofunction::from_valid((0..n).map(|_| rng.gen_range(0..n)).collect())
}

/// A uniformly random permutation of n elements
pub fn randperm<R: Rng + ?Sized>(n: usize, rng: &mut R) -> SymmetricFunction {
    let mut map: Vec<usize> = (0..n).collect();
    map.shuffle(rng);
    SymmetricFunction::from_valid(map)
}

/// A random relabelling of `f`
pub fn randconj<R: Rng + ?Sized>(f: &Endofunction, rng: &mut R) -> Endofunction {
    randperm(f.len(), rng).relabel(f)
}

/// A random rooted tree of given size, rooted at level 0
///
/// Nodes are attached one by one to a uniformly chosen earlier node, so the
/// shapes are not uniformly distributed.
pub fn random_tree<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<DominantTree> {
    if size == 0 {
        return Err(StructureError::InvalidDomainSize(0));
    }
    let mut parents = vec![0; size];
    for (node, parent) in parents.iter_mut().enumerate().skip(1) {
        *parent = rng.gen_range(0..node);
    }
    Endofunction::from_valid(parents).tree_form()
}
