//! Operator traits
//!
//! This module defines the core operator traits for the genetic algorithm.
//! Every stochastic operator receives the random source explicitly.

use rand::Rng;

use crate::error::OperatorError;
use crate::genome::Chromosome;
use crate::population::Population;

/// Selection operator trait
///
/// Turns a scored population into a breeding pool.
pub trait SelectionOperator {
    /// Draw `count` indices into `fitness`, with replacement
    fn select_indices<R: Rng>(
        &self,
        fitness: &[f64],
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<usize>, OperatorError>;

    /// Build a breeding pool with one draw per population member
    fn select_pool<R: Rng>(
        &self,
        population: &Population,
        fitness: &[f64],
        rng: &mut R,
    ) -> Result<Vec<Chromosome>, OperatorError> {
        if population.len() != fitness.len() {
            return Err(OperatorError::SelectionFailed(format!(
                "{} fitness values for {} chromosomes",
                fitness.len(),
                population.len()
            )));
        }
        let indices = self.select_indices(fitness, population.len(), rng)?;
        Ok(indices.into_iter().map(|i| population[i].clone()).collect())
    }
}

/// Crossover operator trait
///
/// Combines genetic material from two parents into two offspring.
pub trait CrossoverOperator {
    /// Apply crossover to two parents and produce two offspring
    fn crossover<R: Rng>(
        &self,
        parent1: &Chromosome,
        parent2: &Chromosome,
        rng: &mut R,
    ) -> Result<(Chromosome, Chromosome), OperatorError>;

    /// The configured crossing probability
    fn crossover_probability(&self) -> f64;
}

/// Mutation operator trait
///
/// Produces a perturbed copy of a chromosome.
pub trait MutationOperator {
    /// Return a mutated copy of `chromosome`
    fn mutate<R: Rng>(&self, chromosome: &Chromosome, rng: &mut R) -> Chromosome;

    /// Get the mutation probability per gene
    fn mutation_probability(&self) -> f64;
}
