//! Prey categories and the record of a hunting attempt.

use std::fmt;
use std::ops::RangeInclusive;

use serde::Serialize;

pub const BASE_SUCCESS: i32 = 50;
pub const MIN_SUCCESS: i32 = 5;
pub const SIZE_PENALTY: i32 = 10;
pub const TIRED_PENALTY: i32 = 10;
pub const STARVING_PENALTY: i32 = 10;
pub const ESCAPE_ENERGY_COST: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PreySize {
    Small,
    Medium,
    Large,
}

impl PreySize {
    /// Picks prey from the average of energy and inverse hunger.
    pub fn assess(energy: i32, hunger: i32) -> Self {
        let average = (energy + (100 - hunger)) / 2;
        if average >= 80 {
            PreySize::Large
        } else if average >= 50 {
            PreySize::Medium
        } else {
            PreySize::Small
        }
    }

    pub fn energy_gain(&self) -> RangeInclusive<i32> {
        match self {
            PreySize::Large => 20..=40,
            PreySize::Medium => 10..=30,
            PreySize::Small => 5..=20,
        }
    }

    pub fn hunger_relief(&self) -> RangeInclusive<i32> {
        match self {
            PreySize::Large => 30..=50,
            PreySize::Medium => 20..=40,
            PreySize::Small => 10..=30,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            PreySize::Small => "small",
            PreySize::Medium => "medium",
            PreySize::Large => "large",
        }
    }
}

impl fmt::Display for PreySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum HuntOutcome {
    Caught { energy_gain: i32, hunger_relief: i32 },
    Escaped { energy_cost: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HuntAttempt {
    pub prey: PreySize,
    pub success_score: i32,
    pub roll: i32,
    pub outcome: HuntOutcome,
}

/// Which branch of the hunt ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "hunt", rename_all = "snake_case")]
pub enum HuntReport {
    /// Starving and drained: the cat rested instead.
    Exhausted { rested: i32 },
    NotHungry,
    Attempted(HuntAttempt),
}

impl HuntReport {
    pub fn narrate(&self, name: &str) -> Vec<String> {
        match self {
            HuntReport::Exhausted { rested } => {
                vec![exhausted_line(name), rest_line(name, *rested)]
            }
            HuntReport::NotHungry => {
                vec![format!("{name} is not hungry and has no reason to hunt.")]
            }
            HuntReport::Attempted(attempt) => {
                let prey = attempt.prey;
                let mut lines = vec![format!("{name} is stalking {prey} prey...")];
                lines.push(match attempt.outcome {
                    HuntOutcome::Caught { .. } => {
                        format!("{name} caught the {prey} prey! \u{1f401}")
                    }
                    HuntOutcome::Escaped { .. } => {
                        format!("The {prey} prey got away from {name}.")
                    }
                });
                lines
            }
        }
    }
}

pub(crate) fn exhausted_line(name: &str) -> String {
    format!("{name} is too exhausted to hunt and needs to rest first.")
}

pub(crate) fn rest_line(name: &str, gained: i32) -> String {
    format!("{name} is resting to regain energy (+{gained}). \u{1f4a4}")
}
