//! The shared cat record and the operations every variant supports.

use tracing::{debug, info};

use crate::error::Result;
use crate::vitals::{PlayEffects, Vitals};
use crate::voice::{Vocalization, Voice};

/// Attributes shared by every kind of cat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cat {
    name: String,
    age: u32,
    color: String,
    vitals: Vitals,
}

impl Cat {
    /// A rested, fed cat (energy 100, hunger 0).
    pub fn new(name: impl Into<String>, age: u32, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            color: color.into(),
            vitals: Vitals::default(),
        }
    }

    /// Replaces the starting levels, clamped into range.
    pub fn with_vitals(mut self, energy: i32, hunger: i32) -> Self {
        self.vitals = Vitals::new(energy, hunger);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn energy(&self) -> i32 {
        self.vitals.energy()
    }

    pub fn hunger(&self) -> i32 {
        self.vitals.hunger()
    }

    pub fn vitals(&self) -> Vitals {
        self.vitals
    }

    pub(crate) fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }

    pub(crate) fn log_levels(&self, action: &'static str) {
        debug!(
            target: "cat",
            name = %self.name,
            action,
            energy = self.energy(),
            hunger = self.hunger(),
            "levels updated"
        );
    }
}

/// Behavior common to all cats. Variants override [`Feline::voice`].
pub trait Feline {
    fn cat(&self) -> &Cat;

    fn cat_mut(&mut self) -> &mut Cat;

    fn voice(&self) -> Voice {
        Voice::Meow
    }

    fn vocalize(&self) -> Vocalization {
        let sound = Vocalization::new(self.voice(), self.cat().hunger());
        info!(target: "cat", name = %self.cat().name(), "{sound}");
        sound
    }

    fn feed(&mut self, amount: i32) -> Result<()> {
        let cat = self.cat_mut();
        cat.vitals_mut().feed(amount)?;
        cat.log_levels("feed");
        Ok(())
    }

    fn play(&mut self, duration: i32) -> Result<PlayEffects> {
        let cat = self.cat_mut();
        let effects = cat.vitals_mut().play(duration)?;
        for line in effects.narrate(cat.name()) {
            info!(target: "cat", "{line}");
        }
        cat.log_levels("play");
        Ok(effects)
    }

    fn sleep(&mut self, duration: i32) -> Result<()> {
        let cat = self.cat_mut();
        cat.vitals_mut().sleep(duration)?;
        cat.log_levels("sleep");
        Ok(())
    }
}

impl Feline for Cat {
    fn cat(&self) -> &Cat {
        self
    }

    fn cat_mut(&mut self) -> &mut Cat {
        self
    }
}
