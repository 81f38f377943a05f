use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::PLACEHOLDER;

/// How much of a clue is currently visible.
///
/// Valid transitions:
/// - Hidden -> Question
/// - Question -> Answer
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Showing {
    /// Initial state, the cell shows the placeholder
    #[default]
    Hidden,
    /// The question text is shown
    Question,
    /// The answer text is shown, no further moves
    Answer,
}

impl Showing {
    /// Next state after a click, `None` when the state is terminal
    pub const fn next(self) -> Option<Self> {
        use Showing::*;
        match self {
            Hidden => Some(Question),
            Question => Some(Answer),
            Answer => None,
        }
    }

    pub const fn is_final(self) -> bool {
        matches!(self, Self::Answer)
    }
}

/// Outcome of clicking a clue
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    ShowQuestion,
    ShowAnswer,
}

impl RevealOutcome {
    /// Whether this outcome changed what the cell displays
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::ShowQuestion => true,
            Self::ShowAnswer => true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    question: String,
    answer: String,
    showing: Showing,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            showing: Showing::Hidden,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn showing(&self) -> Showing {
        self.showing
    }

    /// Text the cell displays in the current state
    pub fn display_text(&self) -> &str {
        match self.showing {
            Showing::Hidden => PLACEHOLDER,
            Showing::Question => &self.question,
            Showing::Answer => &self.answer,
        }
    }

    /// Advance one step along the reveal sequence
    pub fn reveal(&mut self) -> RevealOutcome {
        match self.showing {
            Showing::Hidden => {
                self.showing = Showing::Question;
                RevealOutcome::ShowQuestion
            }
            Showing::Question => {
                self.showing = Showing::Answer;
                RevealOutcome::ShowAnswer
            }
            Showing::Answer => RevealOutcome::NoChange,
        }
    }
}
