//! Population type
//!
//! This module provides the Population container type.

use rand::Rng;

use crate::error::{FitnessError, GenomeError};
use crate::fitness::traits::Fitness;
use crate::genome::Chromosome;

/// An ordered generation of chromosomes
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Population {
    chromosomes: Vec<Chromosome>,
}

impl Population {
    /// Create an empty population
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a population with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            chromosomes: Vec::with_capacity(capacity),
        }
    }

    /// Create a population from a vector of chromosomes
    pub fn from_chromosomes(chromosomes: Vec<Chromosome>) -> Self {
        Self { chromosomes }
    }

    /// Create a random population
    ///
    /// Every bit of every chromosome is an independent fair coin flip.
    pub fn random<R: Rng>(size: usize, genome_size: usize, rng: &mut R) -> Self {
        let chromosomes = (0..size)
            .map(|_| Chromosome::random(genome_size, rng))
            .collect();
        Self { chromosomes }
    }

    /// Get the population size
    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    /// Check if the population is empty
    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    /// Get a chromosome by index
    pub fn get(&self, index: usize) -> Option<&Chromosome> {
        self.chromosomes.get(index)
    }

    /// Add a chromosome to the population
    pub fn push(&mut self, chromosome: Chromosome) {
        self.chromosomes.push(chromosome);
    }

    /// Get an iterator over the chromosomes
    pub fn iter(&self) -> impl Iterator<Item = &Chromosome> {
        self.chromosomes.iter()
    }

    /// Check that every chromosome has exactly `genome_size` bits
    pub fn check_genome_size(&self, genome_size: usize) -> Result<(), GenomeError> {
        match self.iter().find(|c| c.len() != genome_size) {
            Some(c) => Err(GenomeError::DimensionMismatch {
                expected: genome_size,
                actual: c.len(),
            }),
            None => Ok(()),
        }
    }

    /// Evaluate all chromosomes in population order
    pub fn evaluate<Fit: Fitness>(&self, fitness: &Fit) -> Result<Vec<f64>, (usize, FitnessError)> {
        fitness.evaluate_all(&self.chromosomes)
    }

    /// Get the best chromosome for the given fitness vector
    ///
    /// Ties go to the earliest index.
    pub fn best<'a>(&'a self, fitness: &[f64]) -> Option<(&'a Chromosome, f64)> {
        let (index, value) = best_index(fitness)?;
        self.chromosomes.get(index).map(|c| (c, value))
    }
}

/// Index and value of the first maximum
pub fn best_index(values: &[f64]) -> Option<(usize, f64)> {
    let mut iter = values.iter().copied().enumerate();
    let first = iter.next()?;
    Some(iter.fold(first, |best, (i, v)| if v > best.1 { (i, v) } else { best }))
}

/// Arithmetic mean, `None` for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

impl std::ops::Index<usize> for Population {
    type Output = Chromosome;

    fn index(&self, index: usize) -> &Self::Output {
        &self.chromosomes[index]
    }
}

impl From<Vec<Chromosome>> for Population {
    fn from(chromosomes: Vec<Chromosome>) -> Self {
        Self { chromosomes }
    }
}

impl FromIterator<Chromosome> for Population {
    fn from_iter<I: IntoIterator<Item = Chromosome>>(iter: I) -> Self {
        Self {
            chromosomes: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Population {
    type Item = Chromosome;
    type IntoIter = std::vec::IntoIter<Chromosome>;

    fn into_iter(self) -> Self::IntoIter {
        self.chromosomes.into_iter()
    }
}
