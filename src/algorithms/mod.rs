//! Evolutionary algorithms
//!
//! This module provides the solver interface and the generational genetic
//! algorithm.

pub mod genetic;
pub mod traits;

pub mod prelude {
    pub use super::genetic::*;
    pub use super::traits::*;
}
