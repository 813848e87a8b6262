//! # thrust-evo
//!
//! Genetic search for drone thrust schedules.
//!
//! A schedule is a binary chromosome: gene `t` switches the drone's thrust on
//! or off for simulation step `t`. Each schedule is flown through a vertical
//! flight simulation and scored on the peak height it reaches, with a penalty
//! for landing too fast. A generational genetic algorithm (roulette selection,
//! single-point crossover, bit-flip mutation) evolves a population of
//! schedules toward higher scores.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use thrust_evo::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//!
//! let result = GeneticSolver::builder()
//!     .population_size(100)
//!     .num_generations(200)
//!     .mutation_rate(0.01)
//!     .crossing_probability(0.3)
//!     .build()?
//!     .solve(None, &mut rng)?;
//!
//! println!("{}", result.summary());
//! ```

pub mod algorithms;
pub mod diagnostics;
pub mod error;
pub mod fitness;
pub mod genome;
pub mod operators;
pub mod population;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithms::prelude::*;
    pub use crate::diagnostics::prelude::*;
    pub use crate::error::*;
    pub use crate::fitness::prelude::*;
    pub use crate::genome::prelude::*;
    pub use crate::operators::prelude::*;
    pub use crate::population::prelude::*;
}
