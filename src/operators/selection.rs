//! Selection operators
//!
//! Fitness-proportional (roulette wheel) selection.

use rand::Rng;
use rand_distr::{Distribution, WeightedIndex};
use serde::{Deserialize, Serialize};

use crate::error::OperatorError;
use crate::operators::traits::SelectionOperator;

/// How the roulette wheel treats negative fitness values
///
/// A crash penalty can push fitness below zero, at which point
/// `f / sum(f)` stops being a probability.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativeFitnessPolicy {
    /// Shift every value by `-min` when the minimum is negative
    ///
    /// The worst member then gets weight zero. A population whose members
    /// all share one negative score is drawn from uniformly.
    #[default]
    Shift,
    /// Use `f / sum(f)` as is and walk the cumulative sum
    ///
    /// Draws that never find a candidate are skipped, so the pool can come
    /// out smaller than the population.
    Literal,
}

impl NegativeFitnessPolicy {
    /// Config name of the policy
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Shift => "shift",
            Self::Literal => "literal",
        }
    }
}

/// Roulette wheel selection (fitness proportionate)
///
/// Selection probability is proportional to fitness. Each draw takes a
/// uniform value and picks the first candidate, in population order, whose
/// cumulative probability exceeds it.
#[derive(Clone, Debug, Default)]
pub struct RouletteSelection {
    policy: NegativeFitnessPolicy,
}

impl RouletteSelection {
    /// Create a new roulette selection with the default policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with an explicit negative-fitness policy
    pub fn with_policy(policy: NegativeFitnessPolicy) -> Self {
        Self { policy }
    }

    fn select_shifted<R: Rng>(
        &self,
        fitness: &[f64],
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<usize>, OperatorError> {
        let min = fitness.iter().copied().fold(f64::INFINITY, f64::min);
        let weights: Vec<f64> = if min < 0.0 {
            let shifted: Vec<f64> = fitness.iter().map(|f| f - min).collect();
            if shifted.iter().all(|&w| w == 0.0) {
                // every member sits on the same negative score
                vec![1.0; fitness.len()]
            } else {
                shifted
            }
        } else {
            fitness.to_vec()
        };

        let total: f64 = weights.iter().sum();
        if total == 0.0 || !total.is_finite() {
            return Err(OperatorError::DegenerateFitness { total });
        }

        let dist = WeightedIndex::new(&weights)
            .map_err(|e| OperatorError::SelectionFailed(e.to_string()))?;
        Ok((0..count).map(|_| dist.sample(rng)).collect())
    }

    fn select_literal<R: Rng>(
        &self,
        fitness: &[f64],
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<usize>, OperatorError> {
        let total: f64 = fitness.iter().sum();
        if total == 0.0 || !total.is_finite() {
            return Err(OperatorError::DegenerateFitness { total });
        }

        let probabilities: Vec<f64> = fitness.iter().map(|f| f / total).collect();
        let mut selected = Vec::with_capacity(count);
        for _ in 0..count {
            let r: f64 = rng.gen();
            let mut cumulative = 0.0;
            for (j, p) in probabilities.iter().enumerate() {
                cumulative += p;
                if cumulative > r {
                    selected.push(j);
                    break;
                }
            }
        }

        if selected.is_empty() && count > 0 {
            return Err(OperatorError::SelectionFailed(
                "no draw reached a candidate on the roulette wheel".to_string(),
            ));
        }
        Ok(selected)
    }
}

impl SelectionOperator for RouletteSelection {
    fn select_indices<R: Rng>(
        &self,
        fitness: &[f64],
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<usize>, OperatorError> {
        if fitness.is_empty() {
            return Err(OperatorError::SelectionFailed(
                "population cannot be empty".to_string(),
            ));
        }

        match self.policy {
            NegativeFitnessPolicy::Shift => self.select_shifted(fitness, count, rng),
            NegativeFitnessPolicy::Literal => self.select_literal(fitness, count, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::Chromosome;
    use crate::population::Population;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn both_policies() -> [RouletteSelection; 2] {
        [
            RouletteSelection::with_policy(NegativeFitnessPolicy::Shift),
            RouletteSelection::with_policy(NegativeFitnessPolicy::Literal),
        ]
    }

    #[test]
    fn test_selects_valid_indices() {
        let mut rng = StdRng::seed_from_u64(11);
        let fitness: Vec<f64> = (1..=10).map(|i| i as f64).collect();

        for selection in both_policies() {
            let indices = selection.select_indices(&fitness, 100, &mut rng).unwrap();
            assert_eq!(indices.len(), 100);
            assert!(indices.iter().all(|&i| i < fitness.len()));
        }
    }

    #[test]
    fn test_dominant_candidate_wins_most_draws() {
        let mut rng = StdRng::seed_from_u64(5);
        let fitness = [1.0, 1.0, 1000.0, 1.0];
        let trials = 2000;

        for selection in both_policies() {
            let indices = selection.select_indices(&fitness, trials, &mut rng).unwrap();
            let hits = indices.iter().filter(|&&i| i == 2).count();
            // expected share is 1000 / 1003
            assert!(
                hits as f64 / trials as f64 > 0.98,
                "dominant candidate picked {hits} times out of {trials}"
            );
        }
    }

    #[test]
    fn test_zero_weight_never_selected() {
        let mut rng = StdRng::seed_from_u64(9);
        let fitness = [0.0, 3.0, 0.0];

        for selection in both_policies() {
            let indices = selection.select_indices(&fitness, 500, &mut rng).unwrap();
            assert!(indices.iter().all(|&i| i == 1));
        }
    }

    #[test]
    fn test_zero_total_is_degenerate() {
        let mut rng = StdRng::seed_from_u64(0);
        for selection in both_policies() {
            let err = selection
                .select_indices(&[0.0, 0.0, 0.0], 3, &mut rng)
                .unwrap_err();
            assert!(matches!(err, OperatorError::DegenerateFitness { .. }));
        }
    }

    #[test]
    fn test_literal_zero_sum_with_mixed_signs_is_degenerate() {
        let mut rng = StdRng::seed_from_u64(0);
        let selection = RouletteSelection::with_policy(NegativeFitnessPolicy::Literal);
        let err = selection.select_indices(&[-2.0, 2.0], 2, &mut rng).unwrap_err();
        assert_eq!(err, OperatorError::DegenerateFitness { total: 0.0 });
    }

    #[test]
    fn test_shift_handles_negative_fitness() {
        let mut rng = StdRng::seed_from_u64(2);
        let selection = RouletteSelection::new();
        // shifted weights are [0, 5, 9]
        let fitness = [-10.0, -5.0, -1.0];

        let indices = selection.select_indices(&fitness, 300, &mut rng).unwrap();
        assert_eq!(indices.len(), 300);
        assert!(indices.iter().all(|&i| i == 1 || i == 2));
    }

    #[test]
    fn test_shift_equal_negative_is_uniform() {
        let mut rng = StdRng::seed_from_u64(2);
        let indices = RouletteSelection::new()
            .select_indices(&[-1500.0, -1500.0], 1000, &mut rng)
            .unwrap();
        let first = indices.iter().filter(|&&i| i == 0).count();
        assert!(first > 400 && first < 600, "got {first}");
    }

    #[test]
    fn test_literal_all_negative_still_proportional() {
        let mut rng = StdRng::seed_from_u64(4);
        let selection = RouletteSelection::with_policy(NegativeFitnessPolicy::Literal);
        // -1 / -4 and -3 / -4 are ordinary probabilities
        let indices = selection
            .select_indices(&[-1.0, -3.0], 1000, &mut rng)
            .unwrap();
        assert_eq!(indices.len(), 1000);
        let first = indices.iter().filter(|&&i| i == 0).count();
        assert!(first > 150 && first < 350, "got {first}");
    }

    #[test]
    fn test_literal_mixed_signs() {
        let mut rng = StdRng::seed_from_u64(8);
        let selection = RouletteSelection::with_policy(NegativeFitnessPolicy::Literal);

        // probabilities [-2, 3]: the running sum is -2 then 1
        let indices = selection.select_indices(&[-2.0, 3.0], 200, &mut rng).unwrap();
        assert_eq!(indices.len(), 200);
        assert!(indices.iter().all(|&i| i == 1));

        // probabilities [2, -1]: the running sum 2 catches every draw
        let indices = selection.select_indices(&[1.0, -0.5], 50, &mut rng).unwrap();
        assert!(indices.iter().all(|&i| i == 0));
    }

    #[test]
    fn test_empty_population_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = RouletteSelection::new()
            .select_indices(&[], 1, &mut rng)
            .unwrap_err();
        assert!(matches!(err, OperatorError::SelectionFailed(_)));
    }

    #[test]
    fn test_pool_has_population_size() {
        let mut rng = StdRng::seed_from_u64(12);
        let population = Population::random(7, 10, &mut rng);
        let fitness = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];

        let pool = RouletteSelection::new()
            .select_pool(&population, &fitness, &mut rng)
            .unwrap();
        assert_eq!(pool.len(), 7);
        assert!(pool.iter().all(|c| population.iter().any(|p| p == c)));
        assert!(pool.iter().all(|c: &Chromosome| c.len() == 10));
    }

    #[test]
    fn test_seeded_selection_reproducible() {
        let fitness = [3.0, 1.0, 4.0, 1.0, 5.0];
        let a = RouletteSelection::new()
            .select_indices(&fitness, 20, &mut StdRng::seed_from_u64(99))
            .unwrap();
        let b = RouletteSelection::new()
            .select_indices(&fitness, 20, &mut StdRng::seed_from_u64(99))
            .unwrap();
        assert_eq!(a, b);
    }
}
