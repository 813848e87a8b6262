//! Thrust schedule chromosome
//!
//! A fixed-length bit string where bit `t` switches the engine on for
//! simulation step `t`.

use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GenomeError;

/// Fixed-length binary thrust schedule
///
/// Operators never modify a chromosome in place; every operation that
/// changes bits returns a new value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Chromosome {
    bits: Vec<bool>,
}

impl Chromosome {
    /// Create a chromosome from the given bits
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Create an all-zeros chromosome (engine never fires)
    pub fn zeros(length: usize) -> Self {
        Self {
            bits: vec![false; length],
        }
    }

    /// Create an all-ones chromosome (engine fires on every step)
    pub fn ones(length: usize) -> Self {
        Self {
            bits: vec![true; length],
        }
    }

    /// Create a chromosome whose first `on` steps fire and the rest are off
    pub fn leading_ones(on: usize, length: usize) -> Self {
        Self {
            bits: (0..length).map(|i| i < on).collect(),
        }
    }

    /// Draw every bit independently and uniformly from {0, 1}
    pub fn random<R: Rng>(length: usize, rng: &mut R) -> Self {
        Self {
            bits: (0..length).map(|_| rng.gen()).collect(),
        }
    }

    /// Build from numeric genes, accepting only 0 and 1
    pub fn from_genes(genes: &[u8]) -> Result<Self, GenomeError> {
        genes
            .iter()
            .enumerate()
            .map(|(position, gene)| match gene {
                0 => Ok(false),
                1 => Ok(true),
                other => Err(GenomeError::InvalidBit {
                    position,
                    found: char::from(b'0'.saturating_add(*other)),
                }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    /// Get the length of the chromosome
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Check if the chromosome is empty
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Borrow the raw bits
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Get a specific bit
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    /// Whether the engine fires at step `t`; steps past the end are off
    pub fn is_thrust_on(&self, t: usize) -> bool {
        self.get(t).unwrap_or(false)
    }

    /// Copy with a single bit flipped
    pub fn flipped(&self, index: usize) -> Self {
        let mut bits = self.bits.clone();
        if let Some(bit) = bits.get_mut(index) {
            *bit = !*bit;
        }
        Self { bits }
    }

    /// Get the complement (all bits flipped)
    pub fn complement(&self) -> Self {
        Self {
            bits: self.bits.iter().map(|b| !b).collect(),
        }
    }

    /// Number of steps with the engine on
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Number of steps with the engine off
    pub fn count_zeros(&self) -> usize {
        self.len() - self.count_ones()
    }

    /// Hamming distance to another chromosome
    pub fn hamming_distance(&self, other: &Self) -> usize {
        self.bits
            .iter()
            .zip(other.bits.iter())
            .filter(|(a, b)| a != b)
            .count()
    }

    /// Exchange tails at `point`
    ///
    /// Returns `(self[..point] + other[point..], other[..point] + self[point..])`.
    pub fn splice(&self, other: &Self, point: usize) -> Result<(Self, Self), GenomeError> {
        if self.len() != other.len() {
            return Err(GenomeError::DimensionMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }
        if point > self.len() {
            return Err(GenomeError::DimensionMismatch {
                expected: self.len(),
                actual: point,
            });
        }

        let head_a = &self.bits[..point];
        let head_b = &other.bits[..point];
        let tail_a = &self.bits[point..];
        let tail_b = &other.bits[point..];

        Ok((
            Self {
                bits: head_a.iter().chain(tail_b).copied().collect(),
            },
            Self {
                bits: head_b.iter().chain(tail_a).copied().collect(),
            },
        ))
    }
}

impl std::ops::Index<usize> for Chromosome {
    type Output = bool;

    fn index(&self, index: usize) -> &Self::Output {
        &self.bits[index]
    }
}

impl From<Vec<bool>> for Chromosome {
    fn from(bits: Vec<bool>) -> Self {
        Self { bits }
    }
}

impl From<Chromosome> for Vec<bool> {
    fn from(chromosome: Chromosome) -> Self {
        chromosome.bits
    }
}

impl<const N: usize> From<[bool; N]> for Chromosome {
    fn from(arr: [bool; N]) -> Self {
        Self { bits: arr.to_vec() }
    }
}

impl<'a> IntoIterator for &'a Chromosome {
    type Item = &'a bool;
    type IntoIter = std::slice::Iter<'a, bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.bits.iter()
    }
}

impl std::fmt::Display for Chromosome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for bit in &self.bits {
            write!(f, "{}", if *bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl FromStr for Chromosome {
    type Err = GenomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .chars()
            .enumerate()
            .map(|(position, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                found => Err(GenomeError::InvalidBit { position, found }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }
}
