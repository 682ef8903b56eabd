//! General functions between finite sets of integers

use super::{Endofunction, SymmetricFunction};
use crate::{Result, StructureError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A function from {0, ..., n-1} to {0, ..., m-1}
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mapping {
    map: Vec<usize>,
    codomain: usize,
}

/// The most specific kind of function a mapping turns out to be
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FunctionKind {
    /// Domain and codomain differ in size
    General(Mapping),
    /// Maps a set into itself
    Endo(Endofunction),
    /// Maps a set onto itself bijectively
    Symmetric(SymmetricFunction),
}

impl Mapping {
    /// Create a mapping into a codomain of size `codomain`
    pub fn new(map: Vec<usize>, codomain: usize) -> Result<Self> {
        if let Some((index, &value)) = map.iter().enumerate().find(|&(_, &y)| y >= codomain) {
            return Err(StructureError::OutOfDomain {
                index,
                value,
                size: codomain,
            });
        }
        Ok(Mapping { map, codomain })
    }

    pub(crate) fn from_valid(map: Vec<usize>, codomain: usize) -> Self {
        Mapping { map, codomain }
    }

    /// Size of the domain
    pub fn domain_size(&self) -> usize {
        self.map.len()
    }

    /// Size of the codomain
    pub fn codomain_size(&self) -> usize {
        self.codomain
    }

    /// The table of values
    pub fn as_slice(&self) -> &[usize] {
        &self.map
    }

    /// The set of values taken
    pub fn image(&self) -> BTreeSet<usize> {
        self.map.iter().copied().collect()
    }

    /// `f.compose(&g)` is x ↦ f(g(x)); g's codomain must be f's domain
    pub fn compose(&self, other: &Mapping) -> Result<Mapping> {
        if other.codomain != self.domain_size() {
            return Err(StructureError::IncompatibleDomains {
                left: self.domain_size(),
                right: other.codomain,
            });
        }
        Ok(Mapping {
            map: other.map.iter().map(|&y| self.map[y]).collect(),
            codomain: self.codomain,
        })
    }

    /// Narrow the mapping to the strongest function type it satisfies
    pub fn classify(self) -> FunctionKind {
        if self.codomain != self.map.len() {
            return FunctionKind::General(self);
        }
        let func = Endofunction::from_valid(self.map);
        match SymmetricFunction::try_from(func.clone()) {
            Ok(perm) => FunctionKind::Symmetric(perm),
            Err(_) => FunctionKind::Endo(func),
        }
    }
}

impl From<Endofunction> for Mapping {
    fn from(f: Endofunction) -> Self {
        Mapping {
            codomain: f.len(),
            map: f.into(),
        }
    }
}

impl From<SymmetricFunction> for Mapping {
    fn from(s: SymmetricFunction) -> Self {
        Mapping::from(s.into_endofunction())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_codomain() {
        assert_eq!(
            Mapping::new(vec![0, 2], 2),
            Err(StructureError::OutOfDomain {
                index: 1,
                value: 2,
                size: 2
            })
        );
    }

    #[test]
    fn test_classify() {
        let general = Mapping::new(vec![0, 1, 1], 2).unwrap();
        assert!(matches!(general.classify(), FunctionKind::General(_)));

        let endo = Mapping::new(vec![0, 0, 1], 3).unwrap();
        assert_eq!(
            endo.classify(),
            FunctionKind::Endo(Endofunction::new(vec![0, 0, 1]).unwrap())
        );

        let perm = Mapping::new(vec![2, 0, 1], 3).unwrap();
        assert_eq!(
            perm.classify(),
            FunctionKind::Symmetric(SymmetricFunction::new(vec![2, 0, 1]).unwrap())
        );
    }

    #[test]
    fn test_compose() {
        // {0,1,2} -> {0,1} -> {0,1,2,3}
        let g = Mapping::new(vec![1, 0, 1], 2).unwrap();
        let f = Mapping::new(vec![3, 2], 4).unwrap();
        let fg = f.compose(&g).unwrap();
        assert_eq!(fg.as_slice(), &[2, 3, 2]);
        assert_eq!(fg.codomain_size(), 4);
        assert_eq!(fg.image(), BTreeSet::from([2, 3]));
        assert!(g.compose(&f).is_err());
    }

    #[test]
    fn test_from_functions() {
        let f = Endofunction::new(vec![1, 1]).unwrap();
        let m = Mapping::from(f.clone());
        assert_eq!(m.classify(), FunctionKind::Endo(f));
    }
}
