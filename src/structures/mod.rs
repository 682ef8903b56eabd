//! Endofunction structures: labelled functions up to relabelling

mod enumerate;
pub mod image_paths;
mod structure;

pub use enumerate::{EndofunctionStructures, Structures};
pub use image_paths::{first_image_distribution, imagepath_distribution, imagepath_distribution_brute};
pub use structure::EndofunctionStructure;
