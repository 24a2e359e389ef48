use super::board::{Board, COLS, ROWS};
use super::player::Player;

/// Pieces in a row needed to win.
pub const CONNECT: usize = 4;

/// The eight arms scanned from every occupied cell: right, left, up, down
/// and the four diagonals, as (row step, column step).
const DIRECTIONS: [(isize, isize); 8] = [
    (0, 1),
    (0, -1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// Does `player` have four in a row anywhere on `board`?
///
/// Every cell owned by `player` is tried as the start of a run in each of the
/// eight directions. A direction is only attempted when the run's far end
/// stays on the board, so no cell outside the grid is ever read.
pub fn has_four_in_a_row(player: Player, board: &Board) -> bool {
    let target = player.to_cell();

    for row in 0..ROWS {
        for col in 0..COLS {
            if board.cell(row, col) != target {
                continue;
            }
            if DIRECTIONS
                .iter()
                .any(|&(dr, dc)| run_from(board, row, col, dr, dc))
            {
                return true;
            }
        }
    }

    false
}

fn run_from(board: &Board, row: usize, col: usize, dr: isize, dc: isize) -> bool {
    let reach = (CONNECT - 1) as isize;
    let end_row = row as isize + dr * reach;
    let end_col = col as isize + dc * reach;
    if !(0..ROWS as isize).contains(&end_row) || !(0..COLS as isize).contains(&end_col) {
        return false;
    }

    let start = board.cell(row, col);
    (1..CONNECT as isize).all(|step| {
        let r = (row as isize + dr * step) as usize;
        let c = (col as isize + dc * step) as usize;
        board.cell(r, c) == start
    })
}
