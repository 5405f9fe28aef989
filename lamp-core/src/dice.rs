//! Random draws for the level mini-games.

use rand::rngs::ThreadRng;
use rand::Rng;
use std::ops::RangeInclusive;

/// A source of uniform random numbers.
pub trait Dice {
    /// Draw a value uniformly from `range`.
    fn roll(&mut self, range: RangeInclusive<u32>) -> u32;

    /// True with probability 1 in `sides`.
    fn one_in(&mut self, sides: u32) -> bool {
        self.roll(1..=sides) == 1
    }
}

/// Dice backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngDice<R = ThreadRng> {
    rng: R,
}

impl RngDice {
    /// Dice on the thread-local generator. Not seeded, not reproducible.
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for RngDice {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RngDice<R> {
    /// Dice on a specific generator (useful for testing).
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Dice for RngDice<R> {
    fn roll(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.rng.gen_range(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_roll_range() {
        let mut dice = RngDice::new();
        for _ in 0..1000 {
            let value = dice.roll(100..=998);
            assert!((100..=998).contains(&value));
        }
    }

    #[test]
    fn test_single_value_range() {
        let mut dice = RngDice::with_rng(StdRng::seed_from_u64(7));
        for _ in 0..10 {
            assert_eq!(dice.roll(5..=5), 5);
        }
    }

    #[test]
    fn test_one_in_one_always_hits() {
        let mut dice = RngDice::new();
        assert!((0..100).all(|_| dice.one_in(1)));
    }

    #[test]
    fn test_one_in_three_hits_sometimes() {
        let mut dice = RngDice::with_rng(StdRng::seed_from_u64(42));
        let hits = (0..3000).filter(|_| dice.one_in(3)).count();
        assert!(hits > 800 && hits < 1200, "got {hits} hits out of 3000");
    }
}
