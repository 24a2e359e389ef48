use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::agent::Agent;
use super::difficulty::Difficulty;
use super::tree::{build_tree, Node};
use crate::error::EngineError;
use crate::game::{has_four_in_a_row, Board, Player};

/// Base of the reward for a forced win found `n` plies before the horizon.
const WIN_BASE: f64 = 10.0;
/// Base of the penalty for a loss. Steeper than wins so defence comes first.
const LOSS_BASE: f64 = 100.0;

/// Exhaustive fixed-depth tree search with a win/loss counting heuristic.
///
/// Every legal column is tried, the full tree below it is built to
/// `max_depth` plies, and each tree is scored by summing rewards for the
/// searching player's wins and penalties for the opponent's wins. Ties
/// between the best columns are broken uniformly at random.
pub struct Computer<R = StdRng> {
    max_depth: usize,
    rng: R,
}

impl Computer<StdRng> {
    /// Engine seeded from the operating system
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_rng(difficulty, StdRng::from_os_rng())
    }

    /// Engine with a reproducible tie-break sequence
    pub fn seeded(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_rng(difficulty, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Computer<R> {
    pub fn with_rng(difficulty: Difficulty, rng: R) -> Self {
        Computer {
            max_depth: difficulty.max_depth(),
            rng,
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Score every legal column for `player`, in ascending column order.
    pub fn candidate_scores(
        &self,
        board: &Board,
        player: Player,
    ) -> Result<Vec<(usize, f64)>, EngineError> {
        let columns = board.legal_columns();
        if columns.is_empty() {
            return Err(EngineError::NoLegalMoves);
        }

        let mut scores = Vec::with_capacity(columns.len());
        for column in columns {
            let (next, _) = board.make_play(player, column)?;
            let mut variant = Node::new(next);
            build_tree(player.other(), &mut variant, 0, self.max_depth)?;
            let score = self.score_node(&variant, player, 0);
            debug!(
                "column {column}: {} nodes, score {score}",
                variant.size()
            );
            scores.push((column, score));
        }

        Ok(scores)
    }

    /// Pick the best column for `player`, breaking ties at random.
    pub fn select_move(&mut self, board: &Board, player: Player) -> Result<usize, EngineError> {
        let scores = self.candidate_scores(board, player)?;

        let mut best = f64::NEG_INFINITY;
        let mut ties = Vec::new();
        for &(column, score) in &scores {
            if ties.is_empty() || score > best {
                ties.clear();
                ties.push(column);
                best = score;
            } else if score == best {
                ties.push(column);
            }
        }

        let column = ties[self.rng.random_range(0..ties.len())];
        info!(
            "{player} plays column {column} (score {best}, {} tied of {})",
            ties.len(),
            scores.len()
        );
        Ok(column)
    }

    fn score_node(&self, node: &Node, player: Player, depth: usize) -> f64 {
        let plies_left = (self.max_depth - depth) as i32;

        if has_four_in_a_row(player, node.board()) {
            if depth == 0 {
                f64::INFINITY
            } else {
                WIN_BASE.powi(plies_left)
            }
        } else if has_four_in_a_row(player.other(), node.board()) {
            -LOSS_BASE.powi(plies_left)
        } else {
            node.children()
                .iter()
                .map(|child| self.score_node(child, player, depth + 1))
                .sum()
        }
    }
}

impl<R: Rng> Agent for Computer<R> {
    fn select_action(&mut self, board: &Board, player: Player) -> Result<usize, EngineError> {
        self.select_move(board, player)
    }

    fn name(&self) -> &str {
        "Computer"
    }
}
