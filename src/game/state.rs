use super::{has_four_in_a_row, Board, Player};
use crate::error::BoardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create a game on the empty board with `first` to move
    pub fn new(first: Player) -> Self {
        GameState {
            board: Board::new(),
            current_player: first,
            outcome: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Play `column` for the current player.
    ///
    /// `Ok(None)` means the column is full and nothing changed; the same
    /// player is still to move.
    pub fn play(&self, column: usize) -> Result<Option<GameState>, BoardError> {
        if self.is_terminal() {
            return Err(BoardError::GameOver);
        }

        let (board, placed) = self.board.make_play(self.current_player, column)?;
        if !placed {
            return Ok(None);
        }

        let outcome = if has_four_in_a_row(self.current_player, &board) {
            Some(GameOutcome::Winner(self.current_player))
        } else if board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        };

        Ok(Some(GameState {
            board,
            current_player: self.current_player.other(),
            outcome,
        }))
    }
}
