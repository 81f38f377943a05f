use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::*;

/// One body cell as it should be displayed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellView {
    pub coords: CellCoord,
    pub showing: Showing,
    pub text: String,
}

/// Display model of a board: header titles and a row-major body grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardView {
    pub header: Vec<String>,
    pub rows: Vec<Vec<CellView>>,
}

/// Build the full display for `board`, replacing whatever was shown before.
///
/// Row `r` holds clue `r` of every category, left to right in category order. A category shorter than the longest one
/// leaves a placeholder in the rows it does not have.
pub fn render_board(board: &Board) -> BoardView {
    let header = board
        .categories()
        .iter()
        .map(|category| category.title().to_string())
        .collect();

    let rows = (0..board.rows())
        .map(|clue| {
            board
                .categories()
                .iter()
                .enumerate()
                .map(|(category_index, category)| {
                    let entry = category.clues().get(clue);
                    CellView {
                        coords: CellCoord::new(category_index, clue),
                        showing: entry.map_or(Showing::Hidden, Clue::showing),
                        text: entry
                            .map_or(PLACEHOLDER, |entry| entry.display_text())
                            .to_string(),
                    }
                })
                .collect()
        })
        .collect();

    BoardView { header, rows }
}
