//! Distributions of image sizes over every endofunction on n elements

use super::EndofunctionStructures;
use crate::combinat::counting::{factorial, stirling2};
use crate::functions::TransformationMonoid;
use crate::{Result, StructureError};
use ndarray::Array2;
use num_bigint::BigUint;

fn empty_distribution(n: usize) -> Result<Array2<BigUint>> {
    if n == 0 {
        return Err(StructureError::InvalidDomainSize(0));
    }
    let iterates = n.saturating_sub(1).max(1);
    Ok(Array2::from_elem((n, iterates), BigUint::default()))
}

/// Entry (k-1, i) counts the endofunctions on n elements whose (i+1)-th
/// iterate has an image of size k
///
/// Each structure contributes its image path weighted by its multiplicity.
pub fn imagepath_distribution(n: usize) -> Result<Array2<BigUint>> {
    let mut distribution = empty_distribution(n)?;
    for structure in EndofunctionStructures::new(n).iter() {
        let multiplicity = structure.multiplicity();
        for (i, size) in structure.imagepath().into_iter().enumerate() {
            distribution[[size - 1, i]] += &multiplicity;
        }
    }
    Ok(distribution)
}

/// [`imagepath_distribution`] computed by walking all n^n functions
pub fn imagepath_distribution_brute(n: usize) -> Result<Array2<BigUint>> {
    let mut distribution = empty_distribution(n)?;
    for f in TransformationMonoid::new(n)?.iter() {
        for (i, size) in f.imagepath().into_iter().enumerate() {
            distribution[[size - 1, i]] += 1u32;
        }
    }
    Ok(distribution)
}

/// Number of endofunctions on n elements with image size k, for k = 1..=n:
/// choose the partition of the domain into k fibres and inject it into the
/// codomain, S(n, k) n! / (n - k)!
pub fn first_image_distribution(n: usize) -> Vec<BigUint> {
    let total = factorial(n);
    (1..=n)
        .map(|k| stirling2(n, k) * (&total / factorial(n - k)))
        .collect()
}
