use std::fmt;

/// Hunger tier that selects what a cat says.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Content,
    Satisfied,
    Hungry,
    Irritated,
}

impl Mood {
    pub fn from_hunger(hunger: i32) -> Self {
        if hunger < 20 {
            Mood::Content
        } else if hunger < 50 {
            Mood::Satisfied
        } else if hunger < 80 {
            Mood::Hungry
        } else {
            Mood::Irritated
        }
    }
}

/// Sound family of a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Voice {
    /// Purrs and meows.
    Meow,
    /// Growls and roars.
    Growl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vocalization {
    pub voice: Voice,
    pub mood: Mood,
}

impl Vocalization {
    pub fn new(voice: Voice, hunger: i32) -> Self {
        Self {
            voice,
            mood: Mood::from_hunger(hunger),
        }
    }

    pub fn sound(&self) -> &'static str {
        match (self.voice, self.mood) {
            (Voice::Meow, Mood::Content) => "Purr... Meow! \u{1f63b}",
            (Voice::Meow, Mood::Satisfied) => "Meow! \u{1f63a}",
            (Voice::Meow, Mood::Hungry) => "Meow... \u{1f63f}",
            (Voice::Meow, Mood::Irritated) => "MEOOOOOW!! \u{1f63e}",
            (Voice::Growl, Mood::Content) => "Rrrrr... \u{1f406}",
            (Voice::Growl, Mood::Satisfied) => "Grrr! \u{1f406}",
            (Voice::Growl, Mood::Hungry) => "GRRRRR... \u{1f405}",
            (Voice::Growl, Mood::Irritated) => "ROOOOAAAR!! \u{1f405}",
        }
    }
}

impl fmt::Display for Vocalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sound())
    }
}
