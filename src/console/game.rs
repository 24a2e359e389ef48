use log::info;

use super::contestant::Contestant;
use super::device::Console;
use crate::ai::{Agent, Computer};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::{GameOutcome, GameState};

/// Turn loop for one human against one computer opponent.
pub struct ConsoleGame<C> {
    state: GameState,
    human: Contestant,
    computer: Contestant,
    console: C,
}

impl<C: Console> ConsoleGame<C> {
    pub fn new(human: Contestant, computer: Contestant, computer_first: bool, console: C) -> Self {
        let first = if computer_first {
            computer.player()
        } else {
            human.player()
        };
        ConsoleGame {
            state: GameState::new(first),
            human,
            computer,
            console,
        }
    }

    /// Set up a game against the tree-search engine described by `config`.
    pub fn from_config(config: &GameConfig, console: C) -> Self {
        let agent: Box<dyn Agent> = match config.seed {
            Some(seed) => Box::new(Computer::seeded(config.difficulty, seed)),
            None => Box::new(Computer::new(config.difficulty)),
        };
        let computer = Contestant::Computer {
            player: config.computer_player,
            agent,
        };
        let human = Contestant::Human(config.computer_player.other());
        Self::new(human, computer, config.computer_first, console)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// Play until someone connects four or the board fills up.
    pub fn play(&mut self) -> Result<GameOutcome, GameError> {
        loop {
            self.render()?;

            let active = if self.state.current_player() == self.computer.player() {
                &mut self.computer
            } else {
                &mut self.human
            };
            let column = active.request_move(self.state.board(), &mut self.console)?;

            match self.state.play(column)? {
                Some(next) => self.state = next,
                None => {
                    self.console.output("Column is full. Try again.")?;
                    continue;
                }
            }

            if let Some(outcome) = self.state.outcome() {
                self.console.output(&self.state.board().to_string())?;
                self.console.output("")?;
                self.announce(outcome)?;
                return Ok(outcome);
            }
        }
    }

    fn render(&mut self) -> Result<(), GameError> {
        self.console.output("")?;
        self.console.output(&self.state.board().to_string())?;
        self.console.output("")?;
        Ok(())
    }

    fn announce(&mut self, outcome: GameOutcome) -> Result<(), GameError> {
        info!("game over: {outcome:?}");
        let human = self.human.player();
        let message = match outcome {
            GameOutcome::Winner(winner) if winner == self.computer.player() => {
                format!("I'm sorry player {human}. I won again...")
            }
            GameOutcome::Winner(_) => format!("Congratulations player {human}! You won!"),
            GameOutcome::Draw => "Draw! I didn't lose...again".to_string(),
        };
        self.console.accept(&message)?;
        Ok(())
    }
}
