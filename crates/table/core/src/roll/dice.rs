//! Dice rollers used to evaluate roll expressions and pick table rows.
//!
//! # Determinism
//!
//! [`SeededDice`] produces the same sequence for the same seed, which keeps
//! generated content reproducible in tests and replays.

use std::sync::atomic::{AtomicU64, Ordering};

/// Source of dice rolls.
///
/// Implementations hold their own state behind `&self` so a single roller can
/// be shared between threads.
pub trait Dice: Send + Sync {
    /// Generate the next random u32 value.
    fn next_u32(&self) -> u32;

    /// Roll a die with N sides (1-N inclusive). A zero-sided die rolls 0.
    fn roll_die(&self, sides: u32) -> u32 {
        if sides == 0 {
            return 0;
        }
        (self.next_u32() % sides) + 1
    }

    /// Roll a d100 (1-100 inclusive).
    fn roll_d100(&self) -> u32 {
        self.roll_die(100)
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let span = (i64::from(max) - i64::from(min) + 1) as u64;
        let offset = u64::from(self.next_u32()) % span;
        (i64::from(min) + offset as i64) as i32
    }
}

impl<D: Dice + ?Sized> Dice for &D {
    fn next_u32(&self) -> u32 {
        (**self).next_u32()
    }
}

/// PCG-XSH-RR generator with 64-bit state.
///
/// The state advances atomically, so concurrent callers each observe a
/// distinct step of the sequence.
#[derive(Debug)]
pub struct SeededDice {
    state: AtomicU64,
}

impl SeededDice {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Creates a roller whose sequence is fully determined by `seed`.
    pub const fn new(seed: u64) -> Self {
        Self {
            state: AtomicU64::new(seed),
        }
    }

    /// Creates a roller seeded from the system clock.
    pub fn from_entropy() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};

        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Self::new(nanos ^ 0x9e3779b97f4a7c15)
    }

    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl Dice for SeededDice {
    fn next_u32(&self) -> u32 {
        let previous = self
            .state
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |s| {
                Some(Self::pcg_step(s))
            })
            .unwrap_or_else(|s| s);
        Self::pcg_output(Self::pcg_step(previous))
    }
}

impl Default for SeededDice {
    fn default() -> Self {
        Self::from_entropy()
    }
}
