//! Fitness traits
//!
//! This module defines the fitness evaluation trait.

use crate::error::FitnessError;
use crate::genome::Chromosome;

/// Fitness evaluation trait
///
/// Defines how to score a chromosome. Implementations must be pure: the same
/// chromosome always yields the same value, and evaluation has no side
/// effects.
pub trait Fitness {
    /// Short name used in reports
    fn name(&self) -> &'static str;

    /// Minimum chromosome length this fitness function can read
    fn required_length(&self) -> usize {
        1
    }

    /// Evaluate fitness (higher = better)
    fn evaluate(&self, chromosome: &Chromosome) -> Result<f64, FitnessError>;

    /// Evaluate a slice of chromosomes in order
    ///
    /// On failure returns the index of the offending member with the error.
    fn evaluate_all(&self, chromosomes: &[Chromosome]) -> Result<Vec<f64>, (usize, FitnessError)> {
        chromosomes
            .iter()
            .enumerate()
            .map(|(i, c)| self.evaluate(c).map_err(|e| (i, e)))
            .collect()
    }
}

impl<F: Fitness + ?Sized> Fitness for &F {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn required_length(&self) -> usize {
        (**self).required_length()
    }

    fn evaluate(&self, chromosome: &Chromosome) -> Result<f64, FitnessError> {
        (**self).evaluate(chromosome)
    }
}
