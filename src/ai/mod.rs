//! The automated opponent: difficulty tiers, the explicit search tree, and
//! the tree-search engine behind the [`Agent`] trait.

mod agent;
mod computer;
mod difficulty;
mod tree;

pub use agent::Agent;
pub use computer::Computer;
pub use difficulty::Difficulty;
pub use tree::{build_tree, Node};
