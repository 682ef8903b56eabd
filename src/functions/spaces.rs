//! Exhaustive enumeration of function spaces

use super::{Endofunction, Mapping, SymmetricFunction};
use crate::combinat::counting::{factorial, power};
use crate::{Result, StructureError};
use itertools::Itertools;
use num_bigint::BigUint;

fn checked_size(n: usize) -> Result<usize> {
    if n == 0 {
        return Err(StructureError::InvalidDomainSize(0));
    }
    Ok(n)
}

/// Every function from {0, ..., n-1} to {0, ..., m-1}
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mappings {
    domain: usize,
    codomain: usize,
}

impl Mappings {
    /// Mappings between sets of sizes `domain` and `codomain`
    pub fn new(domain: usize, codomain: usize) -> Result<Self> {
        Ok(Mappings {
            domain: checked_size(domain)?,
            codomain: checked_size(codomain)?,
        })
    }

    /// Generate the mappings in lexicographic order of their tables
    pub fn iter(&self) -> impl Iterator<Item = Mapping> {
        let codomain = self.codomain;
        (0..self.domain)
            .map(move |_| 0..codomain)
            .multi_cartesian_product()
            .map(move |map| Mapping::from_valid(map, codomain))
    }

    /// m^n
    pub fn cardinality(&self) -> BigUint {
        power(self.codomain, self.domain)
    }
}

/// Every endofunction on n elements
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransformationMonoid {
    n: usize,
}

impl TransformationMonoid {
    /// The n^n self-maps of an n-element set
    pub fn new(n: usize) -> Result<Self> {
        Ok(TransformationMonoid { n: checked_size(n)? })
    }

    /// Generate the endofunctions in lexicographic order of their tables
    pub fn iter(&self) -> impl Iterator<Item = Endofunction> {
        let n = self.n;
        (0..n)
            .map(move |_| 0..n)
            .multi_cartesian_product()
            .map(Endofunction::from_valid)
    }

    /// n^n
    pub fn cardinality(&self) -> BigUint {
        power(self.n, self.n)
    }
}

/// Every permutation of n elements
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SymmetricGroup {
    n: usize,
}

impl SymmetricGroup {
    /// The n! permutations of an n-element set
    pub fn new(n: usize) -> Result<Self> {
        Ok(SymmetricGroup { n: checked_size(n)? })
    }

    /// Generate the permutations in lexicographic order
    pub fn iter(&self) -> impl Iterator<Item = SymmetricFunction> {
        (0..self.n)
            .permutations(self.n)
            .map(SymmetricFunction::from_valid)
    }

    /// n!
    pub fn cardinality(&self) -> BigUint {
        factorial(self.n)
    }
}
