//! # endostruct: unlabelled trees and endofunction structures
//!
//! This library enumerates, without duplication, every unlabelled rooted tree
//! on n nodes and every endofunction structure on n elements: the classes of
//! self-maps of an n-element set under relabelling (conjugation by a
//! permutation). For each structure it computes the exact number of labelled
//! endofunctions collapsing onto it.
//!
//! ## Features
//!
//! - **Combinatorics**: multisets, necklaces, multiset and integer partitions
//! - **Trees**: level sequences, dominant (canonical) forms, constant-time
//!   tree successors, automorphism counting
//! - **Functions**: labelled endofunctions, permutations, cycle decomposition
//! - **Structures**: canonical endofunction structures and their multiplicities
//!
//! ```
//! use endostruct::prelude::*;
//!
//! let total: num_bigint::BigUint = EndofunctionStructures::new(3)
//!     .iter()
//!     .map(|s| s.multiplicity())
//!     .sum();
//! assert_eq!(total, 27u32.into());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Multisets, necklaces, partitions and exact counting helpers
pub mod combinat;

/// Level sequences, rooted trees, forests and their enumerators
pub mod trees;

/// Labelled functions on finite sets
pub mod functions;

/// Canonical endofunction structures
pub mod structures;

/// Enumeration settings
pub mod config;

/// Random sampling helpers
pub mod utils;

// Re-export commonly used types
pub use combinat::{Multiset, Necklace, Necklaces};
pub use config::EnumerationConfig;
pub use functions::{Endofunction, FunctionKind, Mapping, SymmetricFunction};
pub use structures::{EndofunctionStructure, EndofunctionStructures};
pub use trees::{DominantTree, Forest, ForestEnumerator, OrderedTree, RootedTree, TreeEnumerator};

/// Error types for the library
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructureError {
    /// A domain, tree or partition of unusable size
    #[error("Invalid domain size: {0}")]
    InvalidDomainSize(usize),

    /// Level sequence that does not describe a single rooted tree
    #[error("Malformed level sequence: {0}")]
    MalformedLevelSequence(String),

    /// Function value outside of its domain
    #[error("Value {value} at index {index} lies outside a domain of size {size}")]
    OutOfDomain {
        /// Offending argument
        index: usize,
        /// Its image
        value: usize,
        /// Domain size
        size: usize,
    },

    /// Non-bijective data given where a permutation is required
    #[error("Function is not invertible: image has {image} of {domain} elements")]
    NotInvertible {
        /// Image size
        image: usize,
        /// Domain size
        domain: usize,
    },

    /// Tree form requested for a function with other than one fixed point cycle
    #[error("Function structure is not a rooted tree")]
    NotATree,

    /// Operation combining functions on domains of different sizes
    #[error("Incompatible domains of sizes {left} and {right}")]
    IncompatibleDomains {
        /// Size of the left operand's domain
        left: usize,
        /// Size of the right operand's domain
        right: usize,
    },

    /// Necklace without beads
    #[error("Necklace must contain at least one bead")]
    EmptyNecklace,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, StructureError>;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        combinat::{Multiset, Necklace, Necklaces},
        config::EnumerationConfig,
        functions::{Endofunction, FunctionKind, Mapping, SymmetricFunction},
        structures::{EndofunctionStructure, EndofunctionStructures},
        trees::{
            DominantTree, Forest, ForestEnumerator, OrderedTree, PartitionForests, RootedTree,
            TreeEnumerator,
        },
        Result, StructureError,
    };
}
