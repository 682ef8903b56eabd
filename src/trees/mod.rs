//! Rooted trees: level sequences, canonical forms and enumeration

mod enumerate;
mod forest;
mod level_sequence;
mod rooted;

pub use enumerate::{DominantTrees, ForestEnumerator, PartitionForests, TreeEnumerator};
pub use forest::Forest;
pub use level_sequence::{DominantTree, OrderedTree};
pub use rooted::RootedTree;
