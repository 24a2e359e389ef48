use crate::error::EngineError;
use crate::game::{Board, Player};

/// Universal interface for automated opponents.
pub trait Agent {
    /// Select a column for `player` to play on `board`.
    fn select_action(&mut self, board: &Board, player: Player) -> Result<usize, EngineError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
