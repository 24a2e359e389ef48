use std::path::PathBuf;

/// Errors raised by board access and move application.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("row {0} is out of range (expected 0..6)")]
    RowOutOfRange(usize),

    #[error("column {0} is out of range (expected 0..7)")]
    ColumnOutOfRange(usize),

    #[error("the game is already over")]
    GameOver,
}

/// Errors raised by the move-selection engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("no legal columns left to play")]
    NoLegalMoves,

    #[error("unknown difficulty '{0}' (expected 'easy', 'medium' or 'hard')")]
    UnknownDifficulty(String),

    #[error("unknown player '{0}' (expected 'red' or 'yellow')")]
    UnknownPlayer(String),

    #[error("board error: {0}")]
    Board(#[from] BoardError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Errors that end a console game early.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("board error: {0}")]
    Board(#[from] BoardError),
}
