//! Virtual cat simulation: bounded energy/hunger counters, play/feed/sleep
//! transitions, and a randomized hunt for wild cats.

pub mod cat;
pub mod config;
pub mod domestic;
pub mod error;
pub mod hunt;
pub mod report;
pub mod rng;
pub mod session;
#[cfg(test)]
mod test_support;
pub mod vitals;
pub mod voice;
pub mod wild;

pub use cat::{Cat, Feline};
pub use config::{CatProfile, SessionConfig, SimulationParams, DEFAULT_SEED};
pub use domestic::DomesticCat;
pub use error::{CatError, Result};
pub use hunt::{HuntAttempt, HuntOutcome, HuntReport, PreySize};
pub use report::{PetSnapshot, SessionReport};
pub use rng::{Dice, ScriptedDice, SimulationRng};
pub use session::{parse_actions, Action, Pet, PetKind, Session};
pub use vitals::{PlayEffects, Vitals};
pub use voice::{Mood, Vocalization, Voice};
pub use wild::WildCat;
