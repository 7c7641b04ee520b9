//! RNG module - random shape selection
//!
//! Shapes are drawn uniformly from the seven catalog entries. The engine only sees
//! the [`RandomSource`] trait, so tests and replays can inject a fixed sequence.
//!
//! Provides a simple LCG for deterministic, seedable play.

use crate::types::ShapeKind;

/// Source of random integers for the engine
pub trait RandomSource {
    /// Generate a value in `[0, max)`. `max` is never zero.
    fn next_range(&mut self, max: u32) -> u32;
}

/// Choose a catalog shape uniformly.
pub fn pick_shape<R: RandomSource + ?Sized>(rng: &mut R) -> ShapeKind {
    let index = rng.next_range(ShapeKind::ALL.len() as u32) as usize;
    ShapeKind::ALL[index % ShapeKind::ALL.len()]
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Current RNG state (a new `SimpleRng` from it continues the same sequence)
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_range(&mut self, max: u32) -> u32 {
        // Low LCG bits have short periods; take the high half.
        (self.next_u32() >> 16) % max.max(1)
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// # Examples
///
/// ```
/// use blockfall_core::{pick_shape, SequenceRng};
/// use blockfall_types::ShapeKind;
///
/// let mut rng = SequenceRng::of_kinds(&[ShapeKind::O, ShapeKind::T]);
/// assert_eq!(pick_shape(&mut rng), ShapeKind::O);
/// assert_eq!(pick_shape(&mut rng), ShapeKind::T);
/// assert_eq!(pick_shape(&mut rng), ShapeKind::O);
/// ```
#[derive(Debug, Clone)]
pub struct SequenceRng {
    values: Vec<u32>,
    index: usize,
}

impl SequenceRng {
    /// An empty list behaves like `[0]`.
    pub fn new(values: Vec<u32>) -> Self {
        let values = if values.is_empty() { vec![0] } else { values };
        Self { values, index: 0 }
    }

    /// Replay shape kinds by catalog index.
    pub fn of_kinds(kinds: &[ShapeKind]) -> Self {
        Self::new(kinds.iter().map(|k| k.index() as u32).collect())
    }

    /// Number of values handed out so far
    pub fn draws(&self) -> usize {
        self.index
    }
}

impl RandomSource for SequenceRng {
    fn next_range(&mut self, max: u32) -> u32 {
        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        value % max.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_next_range_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_pick_shape_reaches_every_kind() {
        let mut rng = SimpleRng::new(42);
        let mut seen = [false; 7];
        for _ in 0..500 {
            seen[pick_shape(&mut rng).index()] = true;
        }
        assert!(seen.iter().all(|&s| s), "missing kinds: {:?}", seen);
    }

    #[test]
    fn test_sequence_rng_cycles() {
        let mut rng = SequenceRng::new(vec![3, 9]);
        assert_eq!(rng.next_range(7), 3);
        assert_eq!(rng.next_range(7), 2);
        assert_eq!(rng.next_range(7), 3);
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn test_sequence_rng_empty_defaults_to_zero() {
        let mut rng = SequenceRng::new(Vec::new());
        assert_eq!(pick_shape(&mut rng), ShapeKind::I);
    }
}
