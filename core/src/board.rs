use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// A titled column of clues.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    title: String,
    clues: Vec<Clue>,
}

impl Category {
    pub fn new(title: impl Into<String>, clues: Vec<Clue>) -> Self {
        Self {
            title: title.into(),
            clues,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }
}

/// All categories of one round, in the order they were fetched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    categories: Vec<Category>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, category: Category) {
        self.categories.push(category);
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Number of rows, the longest category decides
    pub fn rows(&self) -> usize {
        self.categories
            .iter()
            .map(|category| category.clues.len())
            .max()
            .unwrap_or(0)
    }

    /// Whether the board has the full `NUM_CATEGORIES` x `NUM_CLUES` shape
    pub fn is_complete(&self) -> bool {
        self.categories.len() == NUM_CATEGORIES
            && self
                .categories
                .iter()
                .all(|category| category.clues.len() == NUM_CLUES)
    }

    pub fn validate_coords(&self, coords: CellCoord) -> Result<CellCoord> {
        match self.categories.get(coords.category) {
            Some(category) if coords.clue < category.clues.len() => Ok(coords),
            _ => Err(TriviaError::InvalidCoords),
        }
    }

    pub fn clue_at(&self, coords: CellCoord) -> Result<&Clue> {
        let coords = self.validate_coords(coords)?;
        Ok(&self.categories[coords.category].clues[coords.clue])
    }

    /// Apply one click to the addressed clue, no other clue is touched
    pub fn reveal(&mut self, coords: CellCoord) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;
        let clue = &mut self.categories[coords.category].clues[coords.clue];
        let outcome = clue.reveal();
        log::debug!("Reveal at {}: {:?} now {:?}", coords, outcome, clue.showing());
        Ok(outcome)
    }
}
