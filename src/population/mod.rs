//! Population management
//!
//! This module provides the Population type and helpers over fitness vectors.

#[allow(clippy::module_inception)]
pub mod population;

pub use population::Population;

pub mod prelude {
    pub use super::population::*;
}
