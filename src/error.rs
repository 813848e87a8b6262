//! Error types for thrust-evo
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Error type for chromosome construction and manipulation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GenomeError {
    /// Two chromosomes (or a chromosome and a configuration) disagree on length
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A textual schedule contained something other than `0` or `1`
    #[error("Invalid bit {found:?} at position {position}")]
    InvalidBit { position: usize, found: char },
}

/// Error type for fitness evaluation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FitnessError {
    /// The thrust schedule does not cover the control horizon
    #[error("Schedule too short: horizon needs {required} steps, got {actual}")]
    ScheduleTooShort { required: usize, actual: usize },

    /// The flight never returned to the ground within the step bound
    #[error(
        "Simulation did not terminate after {steps} steps (height {height:.3}, velocity {velocity:.3})"
    )]
    Nontermination {
        steps: usize,
        height: f64,
        velocity: f64,
    },
}

/// Error type for operator failures
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OperatorError {
    /// Crossover operation failed
    #[error("Crossover failed: {0}")]
    CrossoverFailed(String),

    /// Selection operation failed
    #[error("Selection failed: {0}")]
    SelectionFailed(String),

    /// Fitness values cannot be turned into selection probabilities
    #[error("Degenerate fitness distribution (total fitness {total})")]
    DegenerateFitness { total: f64 },
}

/// Top-level error type for evolution runs
#[derive(Debug, Error)]
pub enum EvolutionError {
    /// Genome error
    #[error("Genome error: {0}")]
    Genome(#[from] GenomeError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Total fitness of a generation summed to zero
    #[error("Selection degenerate at generation {generation}: total fitness {total}")]
    SelectionDegenerate { generation: usize, total: f64 },

    /// A member's flight exceeded the simulation step bound
    #[error(
        "Simulation did not terminate at generation {generation}, member {member} (after {steps} steps)"
    )]
    SimulationNontermination {
        generation: usize,
        member: usize,
        steps: usize,
    },

    /// Any other fitness evaluation failure
    #[error("Fitness evaluation failed at generation {generation}, member {member}: {source}")]
    FitnessEvaluation {
        generation: usize,
        member: usize,
        #[source]
        source: FitnessError,
    },

    /// Operator failure during breeding
    #[error("Operator error at generation {generation}: {source}")]
    Operator {
        generation: usize,
        #[source]
        source: OperatorError,
    },

    /// Empty population
    #[error("Empty population")]
    EmptyPopulation,
}

impl EvolutionError {
    /// Attach generation and member context to a fitness failure
    pub fn from_fitness(generation: usize, member: usize, source: FitnessError) -> Self {
        match source {
            FitnessError::Nontermination { steps, .. } => Self::SimulationNontermination {
                generation,
                member,
                steps,
            },
            source => Self::FitnessEvaluation {
                generation,
                member,
                source,
            },
        }
    }

    /// Attach generation context to an operator failure
    pub fn from_operator(generation: usize, source: OperatorError) -> Self {
        match source {
            OperatorError::DegenerateFitness { total } => {
                Self::SelectionDegenerate { generation, total }
            }
            source => Self::Operator { generation, source },
        }
    }
}

/// Result type alias for evolution operations
pub type EvoResult<T> = Result<T, EvolutionError>;
