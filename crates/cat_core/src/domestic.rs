use tracing::info;

use crate::cat::{Cat, Feline};

/// A house pet that asks for attention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomesticCat {
    cat: Cat,
}

impl DomesticCat {
    pub fn new(cat: Cat) -> Self {
        Self { cat }
    }

    pub fn ask_for_affection(&self) -> String {
        let line = format!(
            "{} rubs against your legs, asking for some affection. \u{1f63d}",
            self.cat.name()
        );
        info!(target: "cat", "{line}");
        line
    }
}

impl Feline for DomesticCat {
    fn cat(&self) -> &Cat {
        &self.cat
    }

    fn cat_mut(&mut self) -> &mut Cat {
        &mut self.cat
    }
}
