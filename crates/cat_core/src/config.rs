use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::cat::Cat;
use crate::error::Result;
use crate::session::{Action, Pet, PetKind};

pub const DEFAULT_SEED: u64 = 42;
pub const SEED_ENV: &str = "CAT_SIM_SEED";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationParams {
    pub seed: u64,
}

impl SimulationParams {
    pub fn from_env() -> Self {
        let seed = std::env::var(SEED_ENV)
            .ok()
            .and_then(|val| val.parse().ok())
            .unwrap_or(DEFAULT_SEED);
        Self { seed }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self { seed }
    }
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self::from_seed(DEFAULT_SEED)
    }
}

/// A scripted session loaded from TOML.
#[derive(Debug, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub actions: Vec<String>,
    pub cat: CatProfile,
}

impl SessionConfig {
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Self::parse(&data)
    }

    pub fn parse(data: &str) -> Result<Self> {
        let cfg: SessionConfig = toml::from_str(data)?;
        Ok(cfg)
    }

    /// The configured seed, falling back to the environment.
    pub fn params(&self) -> SimulationParams {
        self.seed
            .map(SimulationParams::from_seed)
            .unwrap_or_else(SimulationParams::from_env)
    }

    pub fn parsed_actions(&self) -> Result<Vec<Action>> {
        self.actions.iter().map(|raw| raw.parse()).collect()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatProfile {
    pub name: String,
    #[serde(default)]
    pub age: u32,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub kind: PetKind,
    #[serde(default)]
    pub energy: Option<i32>,
    #[serde(default)]
    pub hunger: Option<i32>,
}

impl CatProfile {
    pub fn build(&self) -> Pet {
        let cat = Cat::new(self.name.clone(), self.age, self.color.clone());
        let energy = self.energy.unwrap_or(cat.energy());
        let hunger = self.hunger.unwrap_or(cat.hunger());
        Pet::new(self.kind, cat.with_vitals(energy, hunger))
    }
}

fn default_color() -> String {
    "Tabby".to_string()
}
