//! Core Connect Four game logic: the immutable board, player types, the
//! four-in-a-row detector, and turn bookkeeping for a running game.

mod board;
mod player;
mod state;
mod victory;

pub use board::{Board, Cell, COLS, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState};
pub use victory::{has_four_in_a_row, CONNECT};
