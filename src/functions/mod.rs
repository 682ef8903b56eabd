//! Labelled functions on finite sets of integers

mod endofunction;
mod mapping;
mod permutation;
pub mod spaces;

pub(crate) use endofunction::attached_tree;
pub use endofunction::Endofunction;
pub use mapping::{FunctionKind, Mapping};
pub use permutation::SymmetricFunction;
pub use spaces::{Mappings, SymmetricGroup, TransformationMonoid};
