//! Genome representation
//!
//! This module provides the binary thrust-schedule chromosome.

pub mod chromosome;

pub use chromosome::Chromosome;

pub mod prelude {
    pub use super::chromosome::*;
}
