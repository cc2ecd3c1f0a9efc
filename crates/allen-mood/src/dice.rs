//! Random source for the probabilistic gates.
//!
//! Two moods roll before looking at the player's approach: Neutral rolls
//! for an artifact, Angry rolls for the ray gun. The machine takes the
//! source as a [`MoodDice`] so tests can force either branch.

use std::collections::VecDeque;

use rand::Rng;
use rand::rngs::StdRng;

/// Die size for the artifact roll in the Neutral mood (1 in 50).
pub const ARTIFACT_SIDES: u32 = 50;

/// Die size for the ray gun roll in the Angry mood (1 in 10).
pub const RAY_GUN_SIDES: u32 = 10;

/// A source of uniform rolls.
pub trait MoodDice {
    /// Roll a value uniformly in `0..sides`. A zero-sided roll yields 0.
    fn roll_below(&mut self, sides: u32) -> u32;
}

impl MoodDice for StdRng {
    fn roll_below(&mut self, sides: u32) -> u32 {
        if sides == 0 {
            return 0;
        }
        self.random_range(0..sides)
    }
}

/// Dice that replay a fixed script of values.
///
/// Each queued value is used once, reduced modulo the die size. Once the
/// script runs out, every roll returns the fallback.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    script: VecDeque<u32>,
    fallback: u32,
}

impl ScriptedDice {
    /// Replay `values` in order, then keep returning `fallback`.
    pub fn new(values: impl IntoIterator<Item = u32>, fallback: u32) -> Self {
        Self {
            script: values.into_iter().collect(),
            fallback,
        }
    }

    /// Always roll `value`.
    pub fn always(value: u32) -> Self {
        Self::new([], value)
    }

    /// Dice that never fire a gate: every roll is 1.
    pub fn never_trigger() -> Self {
        Self::always(1)
    }

    /// Dice that always fire a gate: every roll is 0.
    pub fn always_trigger() -> Self {
        Self::always(0)
    }

    /// Number of scripted values not yet used.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl MoodDice for ScriptedDice {
    fn roll_below(&mut self, sides: u32) -> u32 {
        if sides == 0 {
            return 0;
        }
        let value = self.script.pop_front().unwrap_or(self.fallback);
        value % sides
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn std_rng_rolls_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            assert!(rng.roll_below(ARTIFACT_SIDES) < ARTIFACT_SIDES);
            assert!(rng.roll_below(RAY_GUN_SIDES) < RAY_GUN_SIDES);
        }
    }

    #[test]
    fn std_rng_hits_zero_eventually() {
        let mut rng = StdRng::seed_from_u64(0);
        let hits = (0..1000)
            .filter(|_| rng.roll_below(RAY_GUN_SIDES) == 0)
            .count();
        assert!(hits > 0, "a 1-in-10 roll never came up in 1000 tries");
    }

    #[test]
    fn zero_sides_rolls_zero() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(rng.roll_below(0), 0);
        assert_eq!(ScriptedDice::always(5).roll_below(0), 0);
    }

    #[test]
    fn scripted_replays_then_falls_back() {
        let mut dice = ScriptedDice::new([0, 3], 1);
        assert_eq!(dice.remaining(), 2);
        assert_eq!(dice.roll_below(10), 0);
        assert_eq!(dice.roll_below(10), 3);
        assert_eq!(dice.remaining(), 0);
        assert_eq!(dice.roll_below(10), 1);
        assert_eq!(dice.roll_below(10), 1);
    }

    #[test]
    fn scripted_wraps_to_die_size() {
        let mut dice = ScriptedDice::always(60);
        assert_eq!(dice.roll_below(ARTIFACT_SIDES), 10);
        assert_eq!(dice.roll_below(RAY_GUN_SIDES), 0);
    }
}
