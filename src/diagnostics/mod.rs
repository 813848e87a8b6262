//! Diagnostics and statistics
//!
//! This module provides convergence history and run results.

use serde::{Deserialize, Serialize};

use crate::genome::Chromosome;

/// Statistics for a single generation
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Generation number (zero based)
    pub generation: usize,
    /// Best fitness seen in any generation up to and including this one
    pub best_fitness: f64,
    /// Mean fitness of this generation's population
    pub mean_fitness: f64,
    /// Number of chromosomes evaluated in this generation
    pub population_size: usize,
}

/// Append-only convergence history
///
/// Keeps best-so-far and mean fitness as two parallel sequences.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FitnessHistory {
    best: Vec<f64>,
    mean: Vec<f64>,
}

impl FitnessHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a generation's statistics
    pub fn record(&mut self, stats: &GenerationStats) {
        self.best.push(stats.best_fitness);
        self.mean.push(stats.mean_fitness);
    }

    /// Number of generations recorded
    pub fn len(&self) -> usize {
        self.best.len()
    }

    /// Whether nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }

    /// Best-so-far fitness per generation
    pub fn best(&self) -> &[f64] {
        &self.best
    }

    /// Mean fitness per generation
    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    /// Split into `(best, mean)` sequences
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.best, self.mean)
    }
}

/// Result of an evolution run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EvolutionResult {
    /// The best chromosome found across all generations
    pub best_chromosome: Chromosome,
    /// Its fitness
    pub best_fitness: f64,
    /// Best-so-far fitness after each generation
    pub best_fitness_history: Vec<f64>,
    /// Mean population fitness of each generation
    pub mean_fitness_history: Vec<f64>,
    /// Per-generation statistics
    pub generations: Vec<GenerationStats>,
}

impl EvolutionResult {
    /// Number of generations run
    pub fn num_generations(&self) -> usize {
        self.best_fitness_history.len()
    }

    /// Generation in which the final best fitness first appeared
    pub fn generation_of_best(&self) -> Option<usize> {
        self.best_fitness_history
            .iter()
            .position(|&f| f == self.best_fitness)
    }

    /// Get a summary of the evolution run
    pub fn summary(&self) -> String {
        let first_mean = self.mean_fitness_history.first().copied().unwrap_or(f64::NAN);
        let last_mean = self.mean_fitness_history.last().copied().unwrap_or(f64::NAN);

        format!(
            "Evolution Summary:\n\
             - Generations: {}\n\
             - Best fitness: {:.6}\n\
             - Best found in generation: {}\n\
             - Mean fitness: {:.6} -> {:.6}",
            self.num_generations(),
            self.best_fitness,
            self.generation_of_best()
                .map(|g| g.to_string())
                .unwrap_or_else(|| "n/a".to_string()),
            first_mean,
            last_mean,
        )
    }
}

pub mod prelude {
    pub use super::{EvolutionResult, FitnessHistory, GenerationStats};
}
