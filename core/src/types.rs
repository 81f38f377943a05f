use core::fmt;
use core::time::Duration;
use serde::{Deserialize, Serialize};

/// Number of categories (board columns) in a round.
pub const NUM_CATEGORIES: usize = 6;

/// Number of clues per category (board rows) in a round.
pub const NUM_CLUES: usize = 5;

/// How many candidate categories are requested before sampling.
pub const CATEGORY_POOL_SIZE: usize = 100;

/// Cosmetic pause before a round starts fetching, keeps the spinner visible.
pub const ROUND_START_DELAY: Duration = Duration::from_millis(2000);

/// Glyph shown in a cell whose clue has not been revealed yet.
pub const PLACEHOLDER: &str = "?";

/// Identifier the quiz service uses for a category.
pub type CategoryId = u64;

/// Address of one clue on the board: column `category`, row `clue`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    pub category: usize,
    pub clue: usize,
}

impl CellCoord {
    pub const fn new(category: usize, clue: usize) -> Self {
        Self { category, clue }
    }
}

/// Formats as the table cell id, `"{category}-{clue}"`.
impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.category, self.clue)
    }
}

impl From<(usize, usize)> for CellCoord {
    fn from((category, clue): (usize, usize)) -> Self {
        Self::new(category, clue)
    }
}
