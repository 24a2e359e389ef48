//! # Console Connect Four
//!
//! Connect Four on a 6x7 board between a human at the terminal and a
//! computer opponent that searches every move sequence to a fixed depth.
//!
//! ## Modules
//!
//! - [`game`]: core game logic (immutable board, players, win detection)
//! - [`ai`]: difficulty tiers, search tree, tree-search engine
//! - [`console`]: text I/O, contestants, turn loop
//! - [`config`]: TOML configuration loading
//! - [`error`]: structured error types

pub mod ai;
pub mod config;
pub mod console;
pub mod error;
pub mod game;
