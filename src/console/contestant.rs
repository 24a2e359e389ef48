use super::device::Console;
use crate::ai::Agent;
use crate::error::GameError;
use crate::game::{Board, Player, COLS};

/// One side of the table: a person at the console or an automated agent.
pub enum Contestant {
    Human(Player),
    Computer {
        player: Player,
        agent: Box<dyn Agent>,
    },
}

impl Contestant {
    pub fn player(&self) -> Player {
        match self {
            Contestant::Human(player) => *player,
            Contestant::Computer { player, .. } => *player,
        }
    }

    pub fn is_computer(&self) -> bool {
        matches!(self, Contestant::Computer { .. })
    }

    /// Ask this contestant for a column. Full columns are the caller's
    /// problem; only out-of-range and unparsable input is handled here.
    pub fn request_move(
        &mut self,
        board: &Board,
        console: &mut dyn Console,
    ) -> Result<usize, GameError> {
        match self {
            Contestant::Human(player) => prompt_column(*player, console),
            Contestant::Computer { player, agent } => {
                let column = agent.select_action(board, *player)?;
                console.output(&format!("Player {player}'s turn. Hmmm...I'll play: {column}"))?;
                console.output("")?;
                Ok(column)
            }
        }
    }
}

/// Prompt until the user enters a number in `0..COLS`.
pub fn prompt_column(player: Player, console: &mut dyn Console) -> Result<usize, GameError> {
    loop {
        let input = console.request(&format!("Player {player}'s turn: "))?;
        console.output("")?;
        let input = input.trim();

        match input.parse::<i64>() {
            Ok(column) if (0..COLS as i64).contains(&column) => return Ok(column as usize),
            Ok(_) => console.output(&format!(
                "Column number must be within 0 and {}. Try again.",
                COLS - 1
            ))?,
            Err(_) => console.output(&format!("'{input}' is not a column number. Try again."))?,
        }
    }
}
