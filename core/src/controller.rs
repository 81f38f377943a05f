use crate::*;

/// Where the round lifecycle currently is.
///
/// Valid transitions:
/// - Idle -> Loading
/// - Loading -> Ready
/// - Ready -> Loading
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Nothing loaded yet
    #[default]
    Idle,
    /// A round is being fetched, the start control is locked
    Loading,
    /// A board is on display
    Ready,
}

impl Phase {
    pub const fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Caption of the start/restart control
    pub const fn start_label(self) -> &'static str {
        match self {
            Self::Idle => "Start",
            Self::Loading => "Loading...",
            Self::Ready => "Restart",
        }
    }
}

/// User input a board UI reports, whatever toolkit draws it.
pub trait BoardEvents {
    /// A body cell was clicked, returns whether the display changed
    fn on_cell_click(&mut self, coords: CellCoord) -> bool;

    /// The start/restart control was clicked, returns whether a round was started
    fn on_start_click(&mut self) -> bool;
}

/// Owns the board of the current round and the loading state around it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameController {
    phase: Phase,
    board: Board,
}

impl GameController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Enter loading and drop the previous board, refused while already loading
    pub fn begin_round(&mut self) -> bool {
        if self.phase.is_loading() {
            log::debug!("Round already loading, ignoring start");
            return false;
        }
        self.phase = Phase::Loading;
        self.board = Board::new();
        log::debug!("Round started");
        true
    }

    /// Install a freshly loaded board and leave loading
    pub fn finish_round(&mut self, board: Board) {
        if !self.phase.is_loading() {
            log::warn!("Finishing a round that was not loading ({:?})", self.phase);
        }
        if !board.is_complete() {
            log::warn!(
                "Board is not {}x{}, got {} categories",
                NUM_CATEGORIES,
                NUM_CLUES,
                board.categories().len()
            );
        }
        log::debug!("Round ready with {} categories", board.categories().len());
        self.board = board;
        self.phase = Phase::Ready;
    }

    /// Settle a round with the result of loading it, returns whether the display changed
    ///
    /// A failed load is only logged: the controller stays in `Loading` with an empty board and refuses restarts.
    pub fn complete_round(&mut self, loaded: Result<Board>) -> bool {
        match loaded {
            Ok(board) => {
                self.finish_round(board);
                true
            }
            Err(err) => {
                log::error!("Could not load round: {}", err);
                false
            }
        }
    }

    /// Clicks are only meaningful once a board is on display
    pub fn reveal(&mut self, coords: CellCoord) -> Result<RevealOutcome> {
        match self.phase {
            Phase::Ready => self.board.reveal(coords),
            Phase::Idle | Phase::Loading => Ok(RevealOutcome::NoChange),
        }
    }

    pub fn view(&self) -> BoardView {
        render_board(&self.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec;

    fn math_board() -> Board {
        let mut board = Board::new();
        board.push(Category::new("Math", vec![Clue::new("2+2", "4")]));
        board
    }

    #[test]
    fn lifecycle_labels_follow_phases() {
        let mut controller = GameController::new();
        assert_eq!(controller.phase(), Phase::Idle);
        assert_eq!(controller.phase().start_label(), "Start");

        assert!(controller.begin_round());
        assert_eq!(controller.phase().start_label(), "Loading...");

        controller.finish_round(math_board());
        assert_eq!(controller.phase(), Phase::Ready);
        assert_eq!(controller.phase().start_label(), "Restart");
    }

    #[test]
    fn begin_round_clears_board_and_refuses_reentry() {
        let mut controller = GameController::new();
        controller.begin_round();
        controller.finish_round(math_board());

        assert!(controller.begin_round());
        assert!(controller.board().is_empty());
        assert_eq!(controller.view(), BoardView::default());

        assert!(!controller.begin_round());
        assert_eq!(controller.phase(), Phase::Loading);
    }

    #[test]
    fn clicks_reveal_only_when_ready() {
        let mut controller = GameController::new();
        controller.begin_round();
        assert_eq!(
            controller.reveal(CellCoord::new(0, 0)),
            Ok(RevealOutcome::NoChange)
        );

        controller.finish_round(math_board());
        let cell = CellCoord::new(0, 0);

        assert_eq!(controller.reveal(cell), Ok(RevealOutcome::ShowQuestion));
        assert_eq!(controller.view().rows[0][0].text, "2+2");
        assert_eq!(controller.reveal(cell), Ok(RevealOutcome::ShowAnswer));
        assert_eq!(controller.view().rows[0][0].text, "4");
        assert_eq!(controller.reveal(cell), Ok(RevealOutcome::NoChange));
        assert_eq!(controller.view().rows[0][0].text, "4");
    }

    #[test]
    fn failed_round_stays_loading_with_empty_board() {
        let mut controller = GameController::new();
        controller.begin_round();
        controller.finish_round(math_board());
        controller.begin_round();

        let updated = controller.complete_round(Err(TriviaError::Network(String::from("timed out"))));

        assert!(!updated);
        assert_eq!(controller.phase(), Phase::Loading);
        assert_eq!(controller.view(), BoardView::default());
        assert!(!controller.begin_round());
        assert_eq!(
            controller.reveal(CellCoord::new(0, 0)),
            Ok(RevealOutcome::NoChange)
        );
    }

    #[test]
    fn loaded_round_becomes_ready() {
        let mut controller = GameController::new();
        controller.begin_round();

        assert!(controller.complete_round(Ok(math_board())));
        assert_eq!(controller.phase(), Phase::Ready);
        assert_eq!(controller.view().header, vec![String::from("Math")]);
        assert!(controller.begin_round());
    }

    #[test]
    fn incomplete_board_is_still_installed() {
        let mut controller = GameController::new();
        controller.begin_round();
        let board = math_board();
        assert!(!board.is_complete());

        controller.finish_round(board);

        assert_eq!(controller.phase(), Phase::Ready);
        assert_eq!(controller.board().categories().len(), 1);
    }
}
