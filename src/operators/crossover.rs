//! Crossover operators
//!
//! Single-point crossover over thrust schedules.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::OperatorError;
use crate::genome::Chromosome;
use crate::operators::traits::CrossoverOperator;

/// Which side of the crossing probability triggers recombination
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossoverPolarity {
    /// Recombine when the uniform draw is greater than the probability
    ///
    /// A probability of 1 never recombines and 0 almost always does.
    #[default]
    DrawExceeds,
    /// Recombine when the uniform draw is below the probability
    DrawBelow,
}

impl CrossoverPolarity {
    /// Config name of the polarity
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DrawExceeds => "draw_exceeds",
            Self::DrawBelow => "draw_below",
        }
    }
}

/// Single-point crossover
///
/// Picks a cut point in `[1, len - 1]` and swaps the parents' tails.
#[derive(Clone, Debug)]
pub struct SinglePointCrossover {
    crossing_probability: f64,
    polarity: CrossoverPolarity,
}

impl SinglePointCrossover {
    /// Create a new single-point crossover
    pub fn new(crossing_probability: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&crossing_probability),
            "Probability must be in [0, 1]"
        );
        Self {
            crossing_probability,
            polarity: CrossoverPolarity::default(),
        }
    }

    /// Set the recombination polarity
    pub fn with_polarity(mut self, polarity: CrossoverPolarity) -> Self {
        self.polarity = polarity;
        self
    }

    fn recombines(&self, draw: f64) -> bool {
        match self.polarity {
            CrossoverPolarity::DrawExceeds => draw > self.crossing_probability,
            CrossoverPolarity::DrawBelow => draw < self.crossing_probability,
        }
    }
}

impl CrossoverOperator for SinglePointCrossover {
    fn crossover<R: Rng>(
        &self,
        parent1: &Chromosome,
        parent2: &Chromosome,
        rng: &mut R,
    ) -> Result<(Chromosome, Chromosome), OperatorError> {
        if parent1.len() != parent2.len() {
            return Err(OperatorError::CrossoverFailed(format!(
                "parent lengths differ ({} vs {})",
                parent1.len(),
                parent2.len()
            )));
        }
        if parent1.len() < 2 {
            return Err(OperatorError::CrossoverFailed(format!(
                "need at least 2 genes for a cut point, got {}",
                parent1.len()
            )));
        }

        // the cut point is drawn before the recombination decision
        let point = rng.gen_range(1..parent1.len());
        let draw: f64 = rng.gen();

        if self.recombines(draw) {
            parent1
                .splice(parent2, point)
                .map_err(|e| OperatorError::CrossoverFailed(e.to_string()))
        } else {
            Ok((parent1.clone(), parent2.clone()))
        }
    }

    fn crossover_probability(&self) -> f64 {
        self.crossing_probability
    }
}
