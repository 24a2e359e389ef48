use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;

use console_connect_four::ai::Difficulty;
use console_connect_four::config::AppConfig;
use console_connect_four::console::{ConsoleGame, StdConsole};
use console_connect_four::game::Player;

/// Play Connect Four against the computer.
#[derive(Parser)]
#[command(name = "console_connect_four", about = "Play Connect Four against the computer")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Difficulty: easy, medium or hard
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Colour played by the computer: red or yellow
    #[arg(long)]
    computer_color: Option<Player>,

    /// Let the computer make the first move (`--computer-first false` to
    /// override the config file)
    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    computer_first: Option<bool>,

    /// Seed for the computer's tie-breaks
    #[arg(long)]
    seed: Option<u64>,

    /// Log level written to stderr
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

impl Cli {
    /// Replace config values with any flags given on the command line
    fn apply_overrides(&self, config: &mut AppConfig) {
        let game = &mut config.game;
        if let Some(difficulty) = self.difficulty {
            game.difficulty = difficulty;
        }
        if let Some(color) = self.computer_color {
            game.computer_player = color;
        }
        if let Some(computer_first) = self.computer_first {
            game.computer_first = computer_first;
        }
        if self.seed.is_some() {
            game.seed = self.seed;
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    simple_logger::SimpleLogger::new()
        .with_level(cli.log_level)
        .init()
        .context("initialising logger")?;

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    cli.apply_overrides(&mut app_config);

    log::info!(
        "starting game: difficulty {}, computer plays {}",
        app_config.game.difficulty,
        app_config.game.computer_player
    );

    let mut game = ConsoleGame::from_config(&app_config.game, StdConsole::stdio());
    game.play().context("playing game")?;
    Ok(())
}
