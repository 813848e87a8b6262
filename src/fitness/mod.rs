//! Fitness evaluation
//!
//! This module provides the fitness abstraction, the drone flight simulation
//! and a bit-string benchmark.

pub mod benchmarks;
pub mod flight;
pub mod traits;

pub mod prelude {
    pub use super::benchmarks::*;
    pub use super::flight::*;
    pub use super::traits::*;
}
