//! Combinatorial building blocks: multisets, necklaces, partitions and counts

mod multiset;
mod necklace;
mod partitions;
pub mod counting;

pub use multiset::Multiset;
pub use necklace::{Necklace, Necklaces};
pub use partitions::{IntegerPartitions, MultisetPartitions};
