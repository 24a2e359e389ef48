use crate::error::BoardError;
use crate::game::{Board, Player};

/// One position in the search tree, owning the positions reachable from it.
#[derive(Debug, Clone)]
pub struct Node {
    board: Board,
    children: Vec<Node>,
}

impl Node {
    pub fn new(board: Board) -> Self {
        Node {
            board,
            children: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Children in ascending column order of the move that produced them
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Total number of nodes in this subtree, including `self`
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(Node::size).sum::<usize>()
    }

    /// Length of the longest path from `self` to a leaf
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.height() + 1)
            .max()
            .unwrap_or(0)
    }
}

/// Expand `node` with every legal move for `player`, alternating players on
/// each ply, until `depth` reaches `max_depth`.
///
/// Expansion does not stop at won positions; scoring decides which nodes
/// matter.
pub fn build_tree(
    player: Player,
    node: &mut Node,
    depth: usize,
    max_depth: usize,
) -> Result<(), BoardError> {
    if depth >= max_depth {
        return Ok(());
    }

    for column in node.board.legal_columns() {
        let (board, _) = node.board.make_play(player, column)?;
        let mut child = Node::new(board);
        build_tree(player.other(), &mut child, depth + 1, max_depth)?;
        node.children.push(child);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, COLS, ROWS};

    fn tree(board: Board, player: Player, max_depth: usize) -> Node {
        let mut root = Node::new(board);
        build_tree(player, &mut root, 0, max_depth).unwrap();
        root
    }

    #[test]
    fn depth_zero_builds_nothing() {
        let root = tree(Board::new(), Player::Red, 0);
        assert!(root.children().is_empty());
        assert_eq!(root.size(), 1);
    }

    #[test]
    fn empty_board_fans_out_by_seven() {
        let root = tree(Board::new(), Player::Red, 2);
        assert_eq!(root.children().len(), 7);
        assert_eq!(root.size(), 1 + 7 + 49);
        assert_eq!(root.height(), 2);
    }

    #[test]
    fn children_follow_column_order_and_alternate() {
        let root = tree(Board::new(), Player::Yellow, 2);
        for (col, child) in root.children().iter().enumerate() {
            assert_eq!(child.board().get(ROWS - 1, col), Ok(Cell::Yellow));
            for (reply, grandchild) in child.children().iter().enumerate() {
                let row = if reply == col { ROWS - 2 } else { ROWS - 1 };
                assert_eq!(grandchild.board().get(row, reply), Ok(Cell::Red));
            }
        }
    }

    #[test]
    fn full_columns_are_skipped() {
        let mut board = Board::new();
        for i in 0..ROWS {
            let player = if i % 2 == 0 { Player::Red } else { Player::Yellow };
            board = board.make_play(player, 3).unwrap().0;
        }
        let root = tree(board, Player::Red, 1);
        assert_eq!(root.children().len(), COLS - 1);
        assert!(root
            .children()
            .iter()
            .all(|child| child.board().get(0, 3) == board.get(0, 3)));
    }

    #[test]
    fn size_never_exceeds_branching_bound() {
        for max_depth in 0..4 {
            let root = tree(Board::new(), Player::Red, max_depth);
            let bound: usize = (0..=max_depth as u32).map(|k| COLS.pow(k)).sum();
            assert!(root.size() <= bound);
            assert!(root.height() <= max_depth);
        }
    }

    #[test]
    fn full_board_is_a_leaf() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board = board.make_play(Player::Red, col).unwrap().0;
            }
        }
        let root = tree(board, Player::Yellow, 3);
        assert_eq!(root.size(), 1);
    }
}
