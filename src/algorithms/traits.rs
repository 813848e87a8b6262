//! Solver interface
//!
//! Any search strategy reports its hyperparameters and solves from an
//! optional starting population.

use std::collections::BTreeMap;
use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::diagnostics::EvolutionResult;
use crate::error::EvolutionError;
use crate::population::Population;

/// A single reported hyperparameter value
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Integer(usize),
    Real(f64),
    Flag(bool),
    Text(String),
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::Real(v) => write!(f, "{v}"),
            Self::Flag(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

impl From<usize> for ParameterValue {
    fn from(v: usize) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for ParameterValue {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for ParameterValue {
    fn from(v: bool) -> Self {
        Self::Flag(v)
    }
}

impl From<&str> for ParameterValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

/// Hyperparameters by name, in a stable order
pub type SolverParameters = BTreeMap<&'static str, ParameterValue>;

/// A search strategy
pub trait Solver {
    /// Hyperparameters for reporting
    fn parameters(&self) -> SolverParameters;

    /// Run the search
    ///
    /// Starts from `initial_population` when given, otherwise from a random
    /// one drawn from `rng`.
    fn solve<R: Rng>(
        &self,
        initial_population: Option<Population>,
        rng: &mut R,
    ) -> Result<EvolutionResult, EvolutionError>;
}
