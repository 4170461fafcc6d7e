//! Textual actions applied to a pet one at a time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::cat::{Cat, Feline};
use crate::domestic::DomesticCat;
use crate::error::{CatError, Result};
use crate::hunt::rest_line;
use crate::report::PetSnapshot;
use crate::rng::{Dice, SimulationRng};
use crate::wild::WildCat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetKind {
    #[default]
    House,
    Domestic,
    Wild,
}

impl PetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PetKind::House => "house",
            PetKind::Domestic => "domestic",
            PetKind::Wild => "wild",
        }
    }
}

impl FromStr for PetKind {
    type Err = CatError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "house" => Ok(PetKind::House),
            "domestic" => Ok(PetKind::Domestic),
            "wild" => Ok(PetKind::Wild),
            other => Err(CatError::UnknownKind(other.to_string())),
        }
    }
}

impl fmt::Display for PetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pet {
    House(Cat),
    Domestic(DomesticCat),
    Wild(WildCat),
}

impl Pet {
    pub fn new(kind: PetKind, cat: Cat) -> Self {
        match kind {
            PetKind::House => Pet::House(cat),
            PetKind::Domestic => Pet::Domestic(DomesticCat::new(cat)),
            PetKind::Wild => Pet::Wild(WildCat::new(cat)),
        }
    }

    pub fn kind(&self) -> PetKind {
        match self {
            Pet::House(_) => PetKind::House,
            Pet::Domestic(_) => PetKind::Domestic,
            Pet::Wild(_) => PetKind::Wild,
        }
    }

    pub fn feline(&self) -> &dyn Feline {
        match self {
            Pet::House(cat) => cat,
            Pet::Domestic(cat) => cat,
            Pet::Wild(cat) => cat,
        }
    }

    pub fn feline_mut(&mut self) -> &mut dyn Feline {
        match self {
            Pet::House(cat) => cat,
            Pet::Domestic(cat) => cat,
            Pet::Wild(cat) => cat,
        }
    }

    pub fn snapshot(&self) -> PetSnapshot {
        PetSnapshot::of(self.kind(), self.feline().cat())
    }

    fn unsupported(&self, action: &'static str) -> CatError {
        CatError::Unsupported {
            action,
            kind: self.kind().as_str(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Vocalize,
    Feed(i32),
    Play(i32),
    Sleep(i32),
    Affection,
    Rest,
    Hunt,
    Status,
}

impl FromStr for Action {
    type Err = CatError;

    /// Parses `verb [amount]`, e.g. `feed 30` or `hunt`.
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split_whitespace();
        let verb = parts
            .next()
            .ok_or_else(|| CatError::UnknownAction("empty action".into()))?
            .to_ascii_lowercase();
        let amount = parts.next();
        if parts.next().is_some() {
            return Err(CatError::UnknownAction(format!("too many arguments in `{s}`")));
        }

        let needs_amount = |amount: Option<&str>| -> Result<i32> {
            let raw = amount
                .ok_or_else(|| CatError::UnknownAction(format!("`{verb}` needs an amount")))?;
            raw.parse()
                .map_err(|_| CatError::UnknownAction(format!("`{raw}` is not a number")))
        };

        let action = match verb.as_str() {
            "feed" | "eat" => Action::Feed(needs_amount(amount)?),
            "play" => Action::Play(needs_amount(amount)?),
            "sleep" => Action::Sleep(needs_amount(amount)?),
            "meow" | "vocalize" | "growl" => Action::Vocalize,
            "affection" => Action::Affection,
            "rest" => Action::Rest,
            "hunt" => Action::Hunt,
            "status" => Action::Status,
            _ => return Err(CatError::UnknownAction(s.trim().to_string())),
        };
        let takes_amount = matches!(action, Action::Feed(_) | Action::Play(_) | Action::Sleep(_));
        if amount.is_some() && !takes_amount {
            return Err(CatError::UnknownAction(format!("`{verb}` takes no amount")));
        }
        Ok(action)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Vocalize => f.write_str("vocalize"),
            Action::Feed(n) => write!(f, "feed {n}"),
            Action::Play(n) => write!(f, "play {n}"),
            Action::Sleep(n) => write!(f, "sleep {n}"),
            Action::Affection => f.write_str("affection"),
            Action::Rest => f.write_str("rest"),
            Action::Hunt => f.write_str("hunt"),
            Action::Status => f.write_str("status"),
        }
    }
}

pub fn parse_actions<S: AsRef<str>>(raw: &[S]) -> Result<Vec<Action>> {
    raw.iter().map(|s| s.as_ref().parse()).collect()
}

/// A pet, its dice, and everything said so far.
pub struct Session<D: Dice = SimulationRng> {
    pet: Pet,
    dice: D,
    transcript: Vec<String>,
}

impl<D: Dice> Session<D> {
    pub fn new(pet: Pet, dice: D) -> Self {
        Self {
            pet,
            dice,
            transcript: Vec::new(),
        }
    }

    pub fn pet(&self) -> &Pet {
        &self.pet
    }

    pub fn dice(&self) -> &D {
        &self.dice
    }

    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Applies one action and appends its lines to the transcript.
    pub fn apply(&mut self, action: &Action) -> Result<Vec<String>> {
        info!(target: "cat.session", %action, kind = %self.pet.kind(), "applying action");
        let lines = self.perform(action)?;
        self.transcript.extend(lines.iter().cloned());
        Ok(lines)
    }

    /// Applies every action, recording failures and carrying on.
    pub fn run(&mut self, actions: &[Action]) {
        for action in actions {
            if let Err(err) = self.apply(action) {
                warn!(target: "cat.session", %action, error = %err, "action rejected");
                self.transcript.push(format!("error: {err}"));
            }
        }
    }

    pub fn into_parts(self) -> (Pet, Vec<String>) {
        (self.pet, self.transcript)
    }

    fn perform(&mut self, action: &Action) -> Result<Vec<String>> {
        let lines = match *action {
            Action::Vocalize => {
                let feline = self.pet.feline();
                vec![format!("{}: {}", feline.cat().name(), feline.vocalize())]
            }
            Action::Feed(amount) => {
                self.pet.feline_mut().feed(amount)?;
                let cat = self.pet.feline().cat();
                vec![format!(
                    "{} ate {amount} (energy {}, hunger {}).",
                    cat.name(),
                    cat.energy(),
                    cat.hunger()
                )]
            }
            Action::Play(duration) => {
                let effects = self.pet.feline_mut().play(duration)?;
                let cat = self.pet.feline().cat();
                let mut lines = effects.narrate(cat.name());
                lines.push(format!(
                    "{} played for {duration} minutes (energy {}, hunger {}).",
                    cat.name(),
                    cat.energy(),
                    cat.hunger()
                ));
                lines
            }
            Action::Sleep(duration) => {
                self.pet.feline_mut().sleep(duration)?;
                let cat = self.pet.feline().cat();
                vec![format!(
                    "{} slept for {duration} minutes (energy {}).",
                    cat.name(),
                    cat.energy()
                )]
            }
            Action::Affection => match &self.pet {
                Pet::Domestic(cat) => vec![cat.ask_for_affection()],
                other => return Err(other.unsupported("ask for affection")),
            },
            Action::Rest => match &mut self.pet {
                Pet::Wild(cat) => {
                    let gained = cat.rest(&mut self.dice);
                    vec![rest_line(cat.cat().name(), gained)]
                }
                other => return Err(other.unsupported("rest")),
            },
            Action::Hunt => match &mut self.pet {
                Pet::Wild(cat) => {
                    let report = cat.hunt(&mut self.dice);
                    let mut lines = report.narrate(cat.cat().name());
                    lines.push(status_line(cat.cat()));
                    lines
                }
                other => return Err(other.unsupported("hunt")),
            },
            Action::Status => vec![status_line(self.pet.feline().cat())],
        };
        Ok(lines)
    }
}

fn status_line(cat: &Cat) -> String {
    format!(
        "{} has energy {} and hunger {}.",
        cat.name(),
        cat.energy(),
        cat.hunger()
    )
}
