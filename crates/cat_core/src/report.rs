use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::cat::Cat;
use crate::session::PetKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetSnapshot {
    pub name: String,
    pub age: u32,
    pub color: String,
    pub kind: PetKind,
    pub energy: i32,
    pub hunger: i32,
}

impl PetSnapshot {
    pub fn of(kind: PetKind, cat: &Cat) -> Self {
        Self {
            name: cat.name().to_string(),
            age: cat.age(),
            color: cat.color().to_string(),
            kind,
            energy: cat.energy(),
            hunger: cat.hunger(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    pub id: String,
    pub timestamp: String,
    pub seed: u64,
    pub transcript: Vec<String>,
    pub final_state: PetSnapshot,
}

impl SessionReport {
    pub fn new(
        id: impl Into<String>,
        seed: u64,
        transcript: Vec<String>,
        final_state: PetSnapshot,
    ) -> Self {
        Self {
            id: id.into(),
            timestamp: Utc::now().to_rfc3339(),
            seed,
            transcript,
            final_state,
        }
    }

    pub fn errors(&self) -> usize {
        self.transcript
            .iter()
            .filter(|line| line.starts_with("error: "))
            .count()
    }
}
