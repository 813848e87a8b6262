//! Generational genetic algorithm
//!
//! This module implements the evolutionary search over thrust schedules:
//! evaluate, record, select, breed, mutate, replace, for a fixed number of
//! generations.
//!
//! The breeding loop keeps drawing parent pairs while the offspring count is
//! below `population_size - 1`, and every pair adds two children. An even
//! population size therefore breeds `population_size` children and an odd one
//! breeds `population_size - 1`; see [`offspring_count`].

use std::path::Path;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::algorithms::traits::{Solver, SolverParameters};
use crate::diagnostics::{EvolutionResult, FitnessHistory, GenerationStats};
use crate::error::{EvoResult, EvolutionError, OperatorError};
use crate::fitness::flight::FlightSimulation;
use crate::fitness::traits::Fitness;
use crate::genome::Chromosome;
use crate::operators::crossover::{CrossoverPolarity, SinglePointCrossover};
use crate::operators::mutation::BitFlipMutation;
use crate::operators::selection::{NegativeFitnessPolicy, RouletteSelection};
use crate::operators::traits::{CrossoverOperator, MutationOperator, SelectionOperator};
use crate::population::population::{best_index, mean};
use crate::population::Population;

/// Configuration for the genetic solver
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneticConfig {
    /// Population size
    pub population_size: usize,
    /// Chromosome length
    pub genome_size: usize,
    /// Per-gene flip probability
    pub mutation_rate: f64,
    /// Number of generations to run
    pub num_generations: usize,
    /// Crossing probability, interpreted through `crossover_polarity`
    pub crossing_probability: f64,
    /// Carry the best-ever chromosome unchanged into every new population
    pub elitism: bool,
    /// How the roulette wheel treats negative fitness
    pub negative_fitness: NegativeFitnessPolicy,
    /// Which side of the crossing probability recombines
    pub crossover_polarity: CrossoverPolarity,
    /// Random seed (`None` draws one from the OS)
    pub seed: Option<u64>,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            genome_size: 100,
            mutation_rate: 0.01,
            num_generations: 200,
            crossing_probability: 0.3,
            elitism: false,
            negative_fitness: NegativeFitnessPolicy::default(),
            crossover_polarity: CrossoverPolarity::default(),
            seed: None,
        }
    }
}

impl GeneticConfig {
    /// Parse a configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> EvoResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| EvolutionError::Configuration(format!("invalid config JSON: {e}")))
    }

    /// Load a JSON configuration file
    pub fn from_path(path: impl AsRef<Path>) -> EvoResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            EvolutionError::Configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json(&json)
    }

    /// Check every hyperparameter
    ///
    /// `required_length` is the shortest chromosome the fitness function can
    /// read.
    pub fn validate(&self, required_length: usize) -> EvoResult<()> {
        let invalid = |msg: String| Err(EvolutionError::Configuration(msg));

        if self.population_size <= 1 {
            return invalid(format!(
                "population_size must be greater than 1, got {}",
                self.population_size
            ));
        }
        if self.genome_size < 2 {
            return invalid(format!(
                "genome_size must be at least 2, got {}",
                self.genome_size
            ));
        }
        if self.genome_size < required_length {
            return invalid(format!(
                "genome_size {} is shorter than the {} genes the fitness function reads",
                self.genome_size, required_length
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return invalid(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            ));
        }
        if self.num_generations < 1 {
            return invalid("num_generations must be at least 1".to_string());
        }
        if !(0.0..=1.0).contains(&self.crossing_probability) {
            return invalid(format!(
                "crossing_probability must be in [0, 1], got {}",
                self.crossing_probability
            ));
        }
        Ok(())
    }
}

/// Number of children one breeding round produces
///
/// The smallest even number that is at least `population_size - 1`.
pub fn offspring_count(population_size: usize) -> usize {
    let target = population_size.saturating_sub(1);
    target + target % 2
}

/// Builder for GeneticSolver
pub struct GeneticSolverBuilder<Fit = FlightSimulation> {
    config: GeneticConfig,
    fitness: Fit,
}

impl GeneticSolverBuilder<FlightSimulation> {
    /// Create a new builder with default configuration and the flight fitness
    pub fn new() -> Self {
        Self {
            config: GeneticConfig::default(),
            fitness: FlightSimulation::default(),
        }
    }
}

impl Default for GeneticSolverBuilder<FlightSimulation> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Fit: Fitness> GeneticSolverBuilder<Fit> {
    /// Replace the whole configuration
    pub fn config(mut self, config: GeneticConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the population size
    pub fn population_size(mut self, size: usize) -> Self {
        self.config.population_size = size;
        self
    }

    /// Set the chromosome length
    pub fn genome_size(mut self, size: usize) -> Self {
        self.config.genome_size = size;
        self
    }

    /// Set the per-gene mutation rate
    pub fn mutation_rate(mut self, rate: f64) -> Self {
        self.config.mutation_rate = rate;
        self
    }

    /// Set the number of generations
    pub fn num_generations(mut self, generations: usize) -> Self {
        self.config.num_generations = generations;
        self
    }

    /// Set the crossing probability
    pub fn crossing_probability(mut self, probability: f64) -> Self {
        self.config.crossing_probability = probability;
        self
    }

    /// Enable or disable elitism
    pub fn elitism(mut self, enabled: bool) -> Self {
        self.config.elitism = enabled;
        self
    }

    /// Set the negative-fitness policy of the roulette wheel
    pub fn negative_fitness(mut self, policy: NegativeFitnessPolicy) -> Self {
        self.config.negative_fitness = policy;
        self
    }

    /// Set the crossover polarity
    pub fn crossover_polarity(mut self, polarity: CrossoverPolarity) -> Self {
        self.config.crossover_polarity = polarity;
        self
    }

    /// Set the random seed used by [`GeneticSolver::solve_seeded`]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Set the fitness function
    pub fn fitness<NewFit: Fitness>(self, fitness: NewFit) -> GeneticSolverBuilder<NewFit> {
        GeneticSolverBuilder {
            config: self.config,
            fitness,
        }
    }

    /// Build the GeneticSolver instance
    pub fn build(self) -> EvoResult<GeneticSolver<Fit>> {
        self.config.validate(self.fitness.required_length())?;

        let selection = RouletteSelection::with_policy(self.config.negative_fitness);
        let crossover = SinglePointCrossover::new(self.config.crossing_probability)
            .with_polarity(self.config.crossover_polarity);
        let mutation = BitFlipMutation::new(self.config.mutation_rate);

        Ok(GeneticSolver {
            config: self.config,
            fitness: self.fitness,
            selection,
            crossover,
            mutation,
        })
    }
}

/// Generational genetic algorithm over thrust schedules
pub struct GeneticSolver<Fit = FlightSimulation> {
    config: GeneticConfig,
    fitness: Fit,
    selection: RouletteSelection,
    crossover: SinglePointCrossover,
    mutation: BitFlipMutation,
}

impl GeneticSolver<FlightSimulation> {
    /// Create a builder for GeneticSolver
    pub fn builder() -> GeneticSolverBuilder<FlightSimulation> {
        GeneticSolverBuilder::new()
    }
}

impl<Fit: Fitness> GeneticSolver<Fit> {
    /// The validated configuration
    pub fn config(&self) -> &GeneticConfig {
        &self.config
    }

    /// The fitness function
    pub fn fitness(&self) -> &Fit {
        &self.fitness
    }

    /// Begin a run, evaluating nothing yet
    ///
    /// A supplied population must have `population_size` members of
    /// `genome_size` genes each.
    pub fn start<R: Rng>(
        &self,
        initial_population: Option<Population>,
        rng: &mut R,
    ) -> EvoResult<EvolutionRun<'_, Fit>> {
        let population = match initial_population {
            Some(population) => {
                self.check_initial(&population)?;
                population
            }
            None => Population::random(self.config.population_size, self.config.genome_size, rng),
        };

        info!(
            fitness = self.fitness.name(),
            population_size = self.config.population_size,
            genome_size = self.config.genome_size,
            num_generations = self.config.num_generations,
            elitism = self.config.elitism,
            "starting genetic search"
        );

        Ok(EvolutionRun {
            solver: self,
            population,
            generation: 0,
            best_chromosome: None,
            best_fitness: f64::NEG_INFINITY,
            history: FitnessHistory::new(),
            stats: Vec::new(),
        })
    }

    /// Solve with an RNG seeded from the configured seed
    pub fn solve_seeded(&self, initial_population: Option<Population>) -> EvoResult<EvolutionResult> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.solve(initial_population, &mut rng)
    }

    fn check_initial(&self, population: &Population) -> EvoResult<()> {
        if population.is_empty() {
            return Err(EvolutionError::EmptyPopulation);
        }
        if population.len() != self.config.population_size {
            return Err(EvolutionError::Configuration(format!(
                "initial population has {} members, expected {}",
                population.len(),
                self.config.population_size
            )));
        }
        population.check_genome_size(self.config.genome_size)?;
        Ok(())
    }

    /// Draw parent pairs from the pool and cross them until the offspring
    /// count reaches `population_size - 1`
    fn breed<R: Rng>(&self, pool: &[Chromosome], rng: &mut R) -> Result<Vec<Chromosome>, OperatorError> {
        let target = self.config.population_size - 1;
        let mut offspring = Vec::with_capacity(offspring_count(self.config.population_size));

        while offspring.len() < target {
            let parent1 = pool.choose(rng).ok_or_else(empty_pool)?;
            let parent2 = pool.choose(rng).ok_or_else(empty_pool)?;
            let (child1, child2) = self.crossover.crossover(parent1, parent2, rng)?;
            offspring.push(child1);
            offspring.push(child2);
        }

        Ok(offspring)
    }
}

fn empty_pool() -> OperatorError {
    OperatorError::SelectionFailed("breeding pool is empty".to_string())
}

impl<Fit: Fitness> Solver for GeneticSolver<Fit> {
    fn parameters(&self) -> SolverParameters {
        let c = &self.config;
        let mut params = SolverParameters::new();
        params.insert("population_size", c.population_size.into());
        params.insert("genome_size", c.genome_size.into());
        params.insert("mutation_rate", c.mutation_rate.into());
        params.insert("num_generations", c.num_generations.into());
        params.insert("crossing_probability", c.crossing_probability.into());
        params.insert("elitism", c.elitism.into());
        params.insert("negative_fitness", c.negative_fitness.as_str().into());
        params.insert("crossover_polarity", c.crossover_polarity.as_str().into());
        params.insert("fitness", self.fitness.name().into());
        params
    }

    fn solve<R: Rng>(
        &self,
        initial_population: Option<Population>,
        rng: &mut R,
    ) -> EvoResult<EvolutionResult> {
        let mut run = self.start(initial_population, rng)?;
        while run.step(rng)?.is_some() {}
        run.finish()
    }
}

/// An in-progress evolution
///
/// Each [`step`](Self::step) runs one full generation. After
/// `num_generations` steps the run is done and further steps do nothing.
pub struct EvolutionRun<'a, Fit> {
    solver: &'a GeneticSolver<Fit>,
    population: Population,
    generation: usize,
    best_chromosome: Option<Chromosome>,
    best_fitness: f64,
    history: FitnessHistory,
    stats: Vec<GenerationStats>,
}

impl<'a, Fit: Fitness> EvolutionRun<'a, Fit> {
    /// The population the next step will evaluate
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Number of generations completed
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Whether all generations have run
    pub fn is_done(&self) -> bool {
        self.generation >= self.solver.config.num_generations
    }

    /// Best chromosome and fitness so far
    pub fn best(&self) -> Option<(&Chromosome, f64)> {
        self.best_chromosome.as_ref().map(|c| (c, self.best_fitness))
    }

    /// Convergence history so far
    pub fn history(&self) -> &FitnessHistory {
        &self.history
    }

    /// Run one generation
    ///
    /// Returns `None` once the run is done. A failed step leaves the run
    /// exactly as it was.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> EvoResult<Option<GenerationStats>> {
        if self.is_done() {
            return Ok(None);
        }
        let generation = self.generation;
        let solver = self.solver;

        let fitness = self
            .population
            .evaluate(&solver.fitness)
            .map_err(|(member, e)| EvolutionError::from_fitness(generation, member, e))?;

        let mean_fitness = mean(&fitness).ok_or(EvolutionError::EmptyPopulation)?;
        let (index, generation_best) =
            best_index(&fitness).ok_or(EvolutionError::EmptyPopulation)?;

        let improved = generation_best > self.best_fitness;
        let (best_fitness, best_chromosome) = if improved {
            (generation_best, Some(&self.population[index]))
        } else {
            (self.best_fitness, self.best_chromosome.as_ref())
        };

        let stats = GenerationStats {
            generation,
            best_fitness,
            mean_fitness,
            population_size: self.population.len(),
        };

        let pool = solver
            .selection
            .select_pool(&self.population, &fitness, rng)
            .map_err(|e| EvolutionError::from_operator(generation, e))?;

        let offspring = solver
            .breed(&pool, rng)
            .map_err(|e| EvolutionError::from_operator(generation, e))?;

        let mut next: Population = offspring
            .iter()
            .map(|child| solver.mutation.mutate(child, rng))
            .collect();

        if solver.config.elitism {
            if let Some(best) = best_chromosome {
                next.push(best.clone());
            }
        }

        // nothing below can fail
        if improved {
            trace!(generation, fitness = generation_best, "new best schedule");
            self.best_fitness = generation_best;
            self.best_chromosome = Some(self.population[index].clone());
        }
        self.history.record(&stats);
        self.stats.push(stats);

        debug!(
            generation,
            best = stats.best_fitness,
            mean = stats.mean_fitness,
            evaluated = stats.population_size,
            next = next.len(),
            "generation complete"
        );

        self.population = next;
        self.generation += 1;
        Ok(Some(stats))
    }

    /// Finish the run and collect the result
    ///
    /// Fails with [`EvolutionError::EmptyPopulation`] when no generation
    /// produced a best chromosome.
    pub fn finish(self) -> EvoResult<EvolutionResult> {
        let best_chromosome = self.best_chromosome.ok_or(EvolutionError::EmptyPopulation)?;
        let (best_fitness_history, mean_fitness_history) = self.history.into_parts();

        info!(
            best_fitness = self.best_fitness,
            generations = self.generation,
            "genetic search finished"
        );

        Ok(EvolutionResult {
            best_chromosome,
            best_fitness: self.best_fitness,
            best_fitness_history,
            mean_fitness_history,
            generations: self.stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::benchmarks::OneMax;

    fn onemax_solver(population_size: usize) -> GeneticSolver<OneMax> {
        GeneticSolver::builder()
            .population_size(population_size)
            .genome_size(20)
            .num_generations(5)
            .fitness(OneMax::new(20))
            .build()
            .unwrap()
    }

    #[test]
    fn test_default_builder() {
        let solver = GeneticSolver::builder().build().unwrap();
        assert_eq!(solver.config(), &GeneticConfig::default());
        assert_eq!(solver.fitness().name(), "flight");
    }

    #[test]
    fn test_invalid_configurations() {
        let cases = [
            GeneticSolver::builder().population_size(1).build(),
            GeneticSolver::builder().population_size(0).build(),
            GeneticSolver::builder().genome_size(99).build(),
            GeneticSolver::builder().mutation_rate(1.5).build(),
            GeneticSolver::builder().mutation_rate(f64::NAN).build(),
            GeneticSolver::builder().num_generations(0).build(),
            GeneticSolver::builder().crossing_probability(-0.1).build(),
        ];
        for case in cases {
            assert!(matches!(case, Err(EvolutionError::Configuration(_))));
        }
    }

    #[test]
    fn test_genome_size_checked_against_fitness() {
        let err = GeneticSolver::builder()
            .genome_size(50)
            .build()
            .err()
            .unwrap();
        assert!(err.to_string().contains("100 genes"));

        assert!(GeneticSolver::builder()
            .genome_size(50)
            .fitness(OneMax::new(50))
            .build()
            .is_ok());
    }

    #[test]
    fn test_offspring_count() {
        assert_eq!(offspring_count(2), 2);
        assert_eq!(offspring_count(3), 2);
        assert_eq!(offspring_count(10), 10);
        assert_eq!(offspring_count(11), 10);
        assert_eq!(offspring_count(100), 100);
    }

    #[test]
    fn test_even_population_keeps_size() {
        let mut rng = StdRng::seed_from_u64(1);
        let solver = onemax_solver(10);
        let mut run = solver.start(None, &mut rng).unwrap();

        while let Some(stats) = run.step(&mut rng).unwrap() {
            assert_eq!(stats.population_size, 10);
            assert_eq!(run.population().len(), 10);
        }
    }

    #[test]
    fn test_odd_population_loses_one() {
        let mut rng = StdRng::seed_from_u64(2);
        let solver = onemax_solver(11);
        let mut run = solver.start(None, &mut rng).unwrap();
        assert_eq!(run.population().len(), 11);

        let first = run.step(&mut rng).unwrap().unwrap();
        assert_eq!(first.population_size, 11);
        assert_eq!(run.population().len(), 10);

        // later generations breed from the smaller population but still
        // target population_size - 1
        let second = run.step(&mut rng).unwrap().unwrap();
        assert_eq!(second.population_size, 10);
        assert_eq!(run.population().len(), 10);
    }

    #[test]
    fn test_elitism_appends_best_unchanged() {
        let mut rng = StdRng::seed_from_u64(3);
        let solver = GeneticSolver::builder()
            .population_size(10)
            .genome_size(20)
            .num_generations(3)
            .mutation_rate(0.5)
            .elitism(true)
            .fitness(OneMax::new(20))
            .build()
            .unwrap();
        let mut run = solver.start(None, &mut rng).unwrap();

        run.step(&mut rng).unwrap();
        let (best, _) = run.best().unwrap();
        let best = best.clone();
        assert_eq!(run.population().len(), 11);
        assert_eq!(run.population().get(10), Some(&best));
    }

    #[test]
    fn test_elitism_odd_population_restores_size() {
        let mut rng = StdRng::seed_from_u64(4);
        let solver = GeneticSolver::builder()
            .population_size(11)
            .genome_size(20)
            .num_generations(2)
            .elitism(true)
            .fitness(OneMax::new(20))
            .build()
            .unwrap();
        let mut run = solver.start(None, &mut rng).unwrap();
        run.step(&mut rng).unwrap();
        assert_eq!(run.population().len(), 11);
    }

    #[test]
    fn test_without_elitism_no_extra_member() {
        let mut rng = StdRng::seed_from_u64(4);
        let solver = onemax_solver(10);
        let mut run = solver.start(None, &mut rng).unwrap();
        run.step(&mut rng).unwrap();
        assert_eq!(run.population().len(), 10);
    }

    #[test]
    fn test_histories_and_monotone_best() {
        let mut rng = StdRng::seed_from_u64(5);
        let solver = GeneticSolver::builder()
            .population_size(20)
            .genome_size(20)
            .num_generations(30)
            .fitness(OneMax::new(20))
            .build()
            .unwrap();
        let result = solver.solve(None, &mut rng).unwrap();

        assert_eq!(result.best_fitness_history.len(), 30);
        assert_eq!(result.mean_fitness_history.len(), 30);
        assert_eq!(result.generations.len(), 30);
        for pair in result.best_fitness_history.windows(2) {
            assert!(pair[1] >= pair[0]);
        }
        assert_eq!(result.best_fitness, *result.best_fitness_history.last().unwrap());
        assert_eq!(
            OneMax::new(20).evaluate(&result.best_chromosome).unwrap(),
            result.best_fitness
        );
    }

    #[test]
    fn test_step_after_done() {
        let mut rng = StdRng::seed_from_u64(6);
        let solver = onemax_solver(4);
        let mut run = solver.start(None, &mut rng).unwrap();
        for _ in 0..5 {
            assert!(run.step(&mut rng).unwrap().is_some());
        }
        assert!(run.is_done());
        assert!(run.step(&mut rng).unwrap().is_none());
        assert_eq!(run.history().len(), 5);
        assert_eq!(run.generation(), 5);
    }

    #[test]
    fn test_failed_step_leaves_run_unchanged() {
        let mut rng = StdRng::seed_from_u64(10);
        let solver = onemax_solver(4);
        let zeros: Population = (0..4).map(|_| Chromosome::zeros(20)).collect();
        let mut run = solver.start(Some(zeros.clone()), &mut rng).unwrap();

        for _ in 0..2 {
            assert!(matches!(
                run.step(&mut rng),
                Err(EvolutionError::SelectionDegenerate { generation: 0, .. })
            ));
            assert_eq!(run.generation(), 0);
            assert_eq!(run.history().len(), run.generation());
            assert!(run.best().is_none());
            assert_eq!(run.population(), &zeros);
        }
    }

    #[test]
    fn test_huge_generation_count_does_not_preallocate() {
        let mut rng = StdRng::seed_from_u64(11);
        let solver = GeneticSolver::builder()
            .population_size(4)
            .genome_size(20)
            .num_generations(usize::MAX)
            .fitness(OneMax::new(20))
            .build()
            .unwrap();
        let mut run = solver.start(None, &mut rng).unwrap();
        assert!(run.step(&mut rng).unwrap().is_some());
        assert!(!run.is_done());
        assert_eq!(run.history().len(), 1);
    }

    #[test]
    fn test_finish_before_any_step() {
        let mut rng = StdRng::seed_from_u64(6);
        let solver = onemax_solver(4);
        let run = solver.start(None, &mut rng).unwrap();
        assert!(matches!(run.finish(), Err(EvolutionError::EmptyPopulation)));
    }

    #[test]
    fn test_seeded_runs_reproduce() {
        let solver = GeneticSolver::builder()
            .population_size(10)
            .genome_size(20)
            .num_generations(5)
            .seed(42)
            .fitness(OneMax::new(20))
            .build()
            .unwrap();
        let a = solver.solve_seeded(None).unwrap();
        let b = solver.solve_seeded(None).unwrap();
        assert_eq!(a.best_chromosome, b.best_chromosome);
        assert_eq!(a.best_fitness_history, b.best_fitness_history);
        assert_eq!(a.mean_fitness_history, b.mean_fitness_history);
    }

    #[test]
    fn test_initial_population_validated() {
        let mut rng = StdRng::seed_from_u64(7);
        let solver = onemax_solver(4);

        let too_small = Population::random(3, 20, &mut rng);
        assert!(matches!(
            solver.solve(Some(too_small), &mut rng),
            Err(EvolutionError::Configuration(_))
        ));

        let wrong_length = Population::random(4, 19, &mut rng);
        assert!(matches!(
            solver.solve(Some(wrong_length), &mut rng),
            Err(EvolutionError::Genome(_))
        ));

        assert!(matches!(
            solver.solve(Some(Population::new()), &mut rng),
            Err(EvolutionError::EmptyPopulation)
        ));
    }

    #[test]
    fn test_all_zero_population_is_degenerate() {
        let mut rng = StdRng::seed_from_u64(8);
        let solver = onemax_solver(4);
        let zeros: Population = (0..4).map(|_| Chromosome::zeros(20)).collect();

        let err = solver.solve(Some(zeros), &mut rng).unwrap_err();
        assert!(matches!(
            err,
            EvolutionError::SelectionDegenerate { generation: 0, .. }
        ));
    }

    #[test]
    fn test_nontermination_reports_member() {
        let mut rng = StdRng::seed_from_u64(9);
        let solver = GeneticSolver::builder()
            .population_size(4)
            .num_generations(1)
            .fitness(FlightSimulation::new().with_max_steps(5))
            .build()
            .unwrap();
        let population: Population = vec![
            Chromosome::zeros(100),
            Chromosome::ones(100),
            Chromosome::ones(100),
            Chromosome::zeros(100),
        ]
        .into();

        let err = solver.solve(Some(population), &mut rng).unwrap_err();
        assert!(matches!(
            err,
            EvolutionError::SimulationNontermination {
                generation: 0,
                member: 1,
                steps: 5
            }
        ));
    }

    #[test]
    fn test_parameters_reported() {
        let solver = GeneticSolver::builder().build().unwrap();
        let params = solver.parameters();
        assert_eq!(params["population_size"].to_string(), "100");
        assert_eq!(params["genome_size"].to_string(), "100");
        assert_eq!(params["mutation_rate"].to_string(), "0.01");
        assert_eq!(params["num_generations"].to_string(), "200");
        assert_eq!(params["crossing_probability"].to_string(), "0.3");
        assert_eq!(params["elitism"].to_string(), "false");
        assert_eq!(params["negative_fitness"].to_string(), "shift");
        assert_eq!(params["crossover_polarity"].to_string(), "draw_exceeds");
        assert_eq!(params["fitness"].to_string(), "flight");
    }

    #[test]
    fn test_config_from_json() {
        let config = GeneticConfig::from_json(r#"{"population_size": 20, "elitism": true}"#)
            .unwrap();
        assert_eq!(config.population_size, 20);
        assert!(config.elitism);
        assert_eq!(config.genome_size, 100);

        let config = GeneticConfig::from_json(
            r#"{"negative_fitness": "literal", "crossover_polarity": "draw_below", "seed": 3}"#,
        )
        .unwrap();
        assert_eq!(config.negative_fitness, NegativeFitnessPolicy::Literal);
        assert_eq!(config.crossover_polarity, CrossoverPolarity::DrawBelow);
        assert_eq!(config.seed, Some(3));

        assert!(GeneticConfig::from_json("{ not json").is_err());
    }

    #[test]
    fn test_config_from_missing_path() {
        let err = GeneticConfig::from_path("/nonexistent/thrust-evo.json").unwrap_err();
        assert!(matches!(err, EvolutionError::Configuration(_)));
    }
}
