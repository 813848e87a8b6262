//! Mutation operators
//!
//! Per-gene bit-flip mutation.

use rand::Rng;

use crate::genome::Chromosome;
use crate::operators::traits::MutationOperator;

/// Bit-flip mutation
///
/// Each gene is flipped independently with probability `mutation_rate`.
#[derive(Clone, Debug)]
pub struct BitFlipMutation {
    mutation_rate: f64,
}

impl BitFlipMutation {
    /// Create a new bit-flip mutation
    pub fn new(mutation_rate: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&mutation_rate),
            "Probability must be in [0, 1]"
        );
        Self { mutation_rate }
    }
}

impl MutationOperator for BitFlipMutation {
    fn mutate<R: Rng>(&self, chromosome: &Chromosome, rng: &mut R) -> Chromosome {
        chromosome
            .bits()
            .iter()
            .map(|&gene| {
                if rng.gen::<f64>() < self.mutation_rate {
                    !gene
                } else {
                    gene
                }
            })
            .collect::<Vec<_>>()
            .into()
    }

    fn mutation_probability(&self) -> f64 {
        self.mutation_rate
    }
}
