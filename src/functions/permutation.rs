//! Permutations: invertible endofunctions

use super::Endofunction;
use crate::{Result, StructureError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A bijection of {0, ..., n-1} onto itself
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct SymmetricFunction {
    func: Endofunction,
}

impl SymmetricFunction {
    /// Create a permutation from its table of values
    pub fn new(map: Vec<usize>) -> Result<Self> {
        SymmetricFunction::try_from(Endofunction::new(map)?)
    }

    /// Wrap a table already known to be a bijection
    pub(crate) fn from_valid(map: Vec<usize>) -> Self {
        SymmetricFunction {
            func: Endofunction::from_valid(map),
        }
    }

    /// The identity permutation on n elements
    pub fn identity(n: usize) -> Self {
        SymmetricFunction {
            func: Endofunction::identity(n),
        }
    }

    /// Size of the domain
    pub fn len(&self) -> usize {
        self.func.len()
    }

    /// Whether the domain is empty
    pub fn is_empty(&self) -> bool {
        self.func.is_empty()
    }

    /// The permutation viewed as an endofunction
    pub fn as_endofunction(&self) -> &Endofunction {
        &self.func
    }

    /// Unwrap into the underlying endofunction
    pub fn into_endofunction(self) -> Endofunction {
        self.func
    }

    /// The inverse permutation
    pub fn inverse(&self) -> SymmetricFunction {
        let mut inverse = vec![0; self.len()];
        for (x, &y) in self.func.as_slice().iter().enumerate() {
            inverse[y] = x;
        }
        SymmetricFunction {
            func: Endofunction::from_valid(inverse),
        }
    }

    /// `s.compose(&t)` is x ↦ s(t(x))
    pub fn compose(&self, other: &SymmetricFunction) -> Result<SymmetricFunction> {
        Ok(SymmetricFunction {
            func: self.func.compose(&other.func)?,
        })
    }

    /// Integer power; negative exponents iterate the inverse
    pub fn pow(&self, exponent: i64) -> SymmetricFunction {
        let k = exponent.unsigned_abs() as usize;
        let func = if exponent >= 0 {
            self.func.iterate(k)
        } else {
            self.inverse().func.iterate(k)
        };
        SymmetricFunction { func }
    }

    /// Relabel `f` by this permutation: the result g satisfies
    /// g(s(x)) = s(f(x)), that is g = s ∘ f ∘ s⁻¹
    pub fn conj(&self, f: &Endofunction) -> Result<Endofunction> {
        if self.len() != f.len() {
            return Err(StructureError::IncompatibleDomains {
                left: self.len(),
                right: f.len(),
            });
        }
        Ok(self.relabel(f))
    }

    /// Conjugate a function on the same domain
    pub(crate) fn relabel(&self, f: &Endofunction) -> Endofunction {
        let s = self.func.as_slice();
        let mut conjugate = vec![0; f.len()];
        for (x, &y) in f.as_slice().iter().enumerate() {
            conjugate[s[x]] = s[y];
        }
        Endofunction::from_valid(conjugate)
    }
}

impl TryFrom<Endofunction> for SymmetricFunction {
    type Error = StructureError;

    fn try_from(func: Endofunction) -> Result<Self> {
        let image = func.image().len();
        if image != func.len() {
            return Err(StructureError::NotInvertible {
                image,
                domain: func.len(),
            });
        }
        Ok(SymmetricFunction { func })
    }
}

impl TryFrom<Vec<usize>> for SymmetricFunction {
    type Error = StructureError;

    fn try_from(map: Vec<usize>) -> Result<Self> {
        SymmetricFunction::new(map)
    }
}

impl From<SymmetricFunction> for Vec<usize> {
    fn from(s: SymmetricFunction) -> Self {
        s.func.into()
    }
}

impl From<SymmetricFunction> for Endofunction {
    fn from(s: SymmetricFunction) -> Self {
        s.func
    }
}

impl fmt::Debug for SymmetricFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymmetricFunction{:?}", self.func.as_slice())
    }
}

impl fmt::Display for SymmetricFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.func, f)
    }
}
