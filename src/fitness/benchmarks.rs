//! Benchmark fitness functions
//!
//! A simple bit-string problem with a known optimum, used to check the solver
//! independently of the flight model.

use crate::error::FitnessError;
use crate::fitness::traits::Fitness;
use crate::genome::Chromosome;

/// OneMax function
///
/// Counts the number of 1s in the chromosome. Optimum when all bits are 1.
#[derive(Clone, Debug)]
pub struct OneMax {
    length: usize,
}

impl OneMax {
    /// Create a new OneMax function
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Fitness for OneMax {
    fn name(&self) -> &'static str {
        "onemax"
    }

    fn required_length(&self) -> usize {
        self.length
    }

    fn evaluate(&self, chromosome: &Chromosome) -> Result<f64, FitnessError> {
        Ok(chromosome.bits()[..self.length.min(chromosome.len())]
            .iter()
            .filter(|&&b| b)
            .count() as f64)
    }
}
