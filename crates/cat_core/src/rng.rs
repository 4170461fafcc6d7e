//! Random-integer sources used by resting and hunting.

use std::collections::VecDeque;
use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly drawn integers.
pub trait Dice {
    /// Draws an integer in `low..=high`.
    ///
    /// Callers pass `low <= high`. Implementations must not panic on
    /// reversed bounds.
    fn next_int(&mut self, low: i32, high: i32) -> i32;
}

/// Seeded generator so a session can be replayed from its seed.
pub struct SimulationRng {
    seed: u64,
    rng: StdRng,
}

impl SimulationRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn gen_range(&mut self, range: RangeInclusive<i32>) -> i32 {
        self.rng.gen_range(range)
    }
}

impl Dice for SimulationRng {
    fn next_int(&mut self, low: i32, high: i32) -> i32 {
        self.gen_range(low.min(high)..=low.max(high))
    }
}

/// Replays queued values in order, then keeps returning the last one.
///
/// Values are handed out as-is, even when they fall outside the requested
/// range. Every requested range is recorded so tests can check which draws
/// an operation made.
#[derive(Debug, Default, Clone)]
pub struct ScriptedDice {
    queue: VecDeque<i32>,
    last: Option<i32>,
    requests: Vec<(i32, i32)>,
}

impl ScriptedDice {
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        Self {
            queue: values.into_iter().collect(),
            last: None,
            requests: Vec::new(),
        }
    }

    /// Always returns `value`.
    pub fn fixed(value: i32) -> Self {
        Self::new([value])
    }

    pub fn requests(&self) -> &[(i32, i32)] {
        &self.requests
    }
}

impl Dice for ScriptedDice {
    fn next_int(&mut self, low: i32, high: i32) -> i32 {
        self.requests.push((low, high));
        if let Some(value) = self.queue.pop_front() {
            self.last = Some(value);
        }
        // empty script falls back to the low end
        self.last.unwrap_or(low)
    }
}
