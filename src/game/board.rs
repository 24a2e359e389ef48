use std::fmt;

use super::player::Player;
use crate::error::BoardError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

const HEADER: &str = "  0   1   2   3   4   5   6";
const DIVIDER: &str = "-----------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// The player owning this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Player::Red),
            Cell::Yellow => Some(Player::Yellow),
        }
    }

    fn marker(self) -> char {
        match self {
            Cell::Empty => '·',
            Cell::Red => 'X',
            Cell::Yellow => 'O',
        }
    }
}

/// An immutable 6x7 board. Row 0 is the top, row 5 is the bottom.
///
/// Moves never mutate a board; [`Board::make_play`] hands back a new value,
/// so boards can be shared freely between branches of a search tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
    empty_cells: usize,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
            empty_cells: ROWS * COLS,
        }
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        if row >= ROWS {
            return Err(BoardError::RowOutOfRange(row));
        }
        if col >= COLS {
            return Err(BoardError::ColumnOutOfRange(col));
        }
        Ok(self.cells[row][col])
    }

    /// Unchecked access for callers that already iterate inside the grid.
    pub(super) fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Number of cells still holding [`Cell::Empty`]
    pub fn empty_cell_count(&self) -> usize {
        self.empty_cells
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Columns that can still take a piece, in ascending order
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.empty_cells == 0
    }

    /// Drop a piece for `player` into `column`.
    ///
    /// Returns the resulting board and whether the move happened. A full
    /// column is not an error: the receiver comes back unchanged with
    /// `false`, and the caller decides whether to ask again.
    pub fn make_play(&self, player: Player, column: usize) -> Result<(Board, bool), BoardError> {
        if column >= COLS {
            return Err(BoardError::ColumnOutOfRange(column));
        }

        if self.is_column_full(column) {
            return Ok((*self, false));
        }

        let mut next = *self;
        // Lowest empty row; the top cell is known to be empty
        let row = (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][column] == Cell::Empty)
            .unwrap_or(0);
        next.cells[row][column] = player.to_cell();
        next.empty_cells -= 1;

        Ok((next, true))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{HEADER}")?;
        write!(f, "{DIVIDER}")?;
        for row in &self.cells {
            writeln!(f)?;
            for cell in row {
                write!(f, "| {} ", cell.marker())?;
            }
            writeln!(f, "|")?;
            write!(f, "{DIVIDER}")?;
        }
        Ok(())
    }
}
