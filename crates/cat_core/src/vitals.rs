//! Energy and hunger counters with the clamped feed/play/sleep transitions.

use serde::{Deserialize, Serialize};

use crate::error::{CatError, Result};

pub const MIN_LEVEL: i32 = 0;
pub const MAX_LEVEL: i32 = 100;
pub const DEFAULT_ENERGY: i32 = MAX_LEVEL;
pub const DEFAULT_HUNGER: i32 = MIN_LEVEL;

/// At or below this energy playing drains energy 1.5x faster.
pub const TIRED_ENERGY: i32 = 30;
/// At or above this hunger playing builds hunger 1.2x faster.
pub const RAVENOUS_HUNGER: i32 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vitals {
    energy: i32,
    hunger: i32,
}

/// Rate penalties that applied during a play session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayEffects {
    pub tired: bool,
    pub ravenous: bool,
}

impl PlayEffects {
    pub fn narrate(&self, name: &str) -> Vec<String> {
        let mut lines = Vec::new();
        if self.tired {
            lines.push(format!(
                "{name} is too tired to play, energy is depleting faster! 😿"
            ));
        }
        if self.ravenous {
            lines.push(format!("{name} is playing but is very hungry! 🙀"));
        }
        lines
    }
}

impl Vitals {
    /// Builds vitals, clamping both counters into range.
    pub fn new(energy: i32, hunger: i32) -> Self {
        Self {
            energy: clamp_level(energy),
            hunger: clamp_level(hunger),
        }
    }

    pub fn energy(&self) -> i32 {
        self.energy
    }

    pub fn hunger(&self) -> i32 {
        self.hunger
    }

    pub fn feed(&mut self, amount: i32) -> Result<()> {
        check_level("food amount", amount)?;
        self.hunger = clamp_level(self.hunger - amount);
        self.energy = clamp_level(self.energy + amount);
        Ok(())
    }

    /// Both penalties are decided from the state before the session starts.
    pub fn play(&mut self, duration: i32) -> Result<PlayEffects> {
        check_level("play time", duration)?;
        let effects = PlayEffects {
            tired: self.energy <= TIRED_ENERGY,
            ravenous: self.hunger >= RAVENOUS_HUNGER,
        };

        let drain = if effects.tired {
            duration * 3 / 2
        } else {
            duration
        };
        let appetite = if effects.ravenous {
            duration * 6 / 5
        } else {
            duration
        };

        self.energy = clamp_level(self.energy - drain);
        self.hunger = clamp_level(self.hunger + appetite);
        Ok(effects)
    }

    pub fn sleep(&mut self, duration: i32) -> Result<()> {
        if self.energy >= MAX_LEVEL {
            return Err(CatError::InvalidState(format!(
                "too energetic to sleep now (energy {})",
                self.energy
            )));
        }
        check_level("sleep time", duration)?;
        self.energy = clamp_level(self.energy + duration);
        Ok(())
    }

    /// Unclamped adjustment used by resting and hunting.
    pub(crate) fn shift_energy(&mut self, delta: i32) {
        self.energy += delta;
    }

    /// Unclamped adjustment used by hunting.
    pub(crate) fn shift_hunger(&mut self, delta: i32) {
        self.hunger += delta;
    }
}

impl Default for Vitals {
    fn default() -> Self {
        Self::new(DEFAULT_ENERGY, DEFAULT_HUNGER)
    }
}

/// Clamps both ends, so a level pushed out of range by resting or hunting
/// is pulled back into [0, 100] by the next feed, play or sleep.
fn clamp_level(value: i32) -> i32 {
    value.clamp(MIN_LEVEL, MAX_LEVEL)
}

fn check_level(param: &'static str, value: i32) -> Result<()> {
    if (MIN_LEVEL..=MAX_LEVEL).contains(&value) {
        Ok(())
    } else {
        Err(CatError::InvalidArgument {
            param,
            value,
            min: MIN_LEVEL,
            max: MAX_LEVEL,
        })
    }
}
