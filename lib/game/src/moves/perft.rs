//! # perft.rs
//!
//! Counts leaf nodes of the move tree to check move generation.

use timed::timed;

use crate::moves::move_list::{generate_moves, make_move};
use crate::representations::{board::Board, moves::Move, piece::Color};

fn perft(board: &Board, color: Color, depth: u8, forced_captures: bool) -> u64 {
    if depth == 0 {
        return 1;
    }

    let possible_moves = generate_moves(board, color, forced_captures);

    if depth == 1 {
        return possible_moves.len() as u64;
    }

    let mut nodes = 0;

    for mv in possible_moves {
        let mut next = board.clone();
        make_move(&mut next, &mv);
        nodes += perft(&next, color.opponent(), depth - 1, forced_captures);
    }

    nodes
}

/// Leaf count at `depth` plies with `color` to move.
#[timed]
pub fn start_perft(
    board: &Board,
    color: Color,
    depth: u8,
    forced_captures: bool
) -> u64 {
    perft(board, color, depth, forced_captures)
}

/// Leaf counts below each root move, in generation order. Empty at depth
/// zero, where there are no root moves to split on.
pub fn perft_divide(
    board: &Board,
    color: Color,
    depth: u8,
    forced_captures: bool
) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    generate_moves(board, color, forced_captures)
        .into_iter()
        .map(|mv| {
            let mut next = board.clone();
            make_move(&mut next, &mv);
            let nodes = perft(&next, color.opponent(), depth - 1, forced_captures);
            (mv, nodes)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ntest::timeout;

    #[test]
    #[timeout(5000)]
    fn opening_perft_counts() {
        let board = Board::standard();

        assert_eq!(start_perft(&board, Color::White, 1, false), 7);
        assert_eq!(start_perft(&board, Color::White, 2, false), 49);
        assert_eq!(start_perft(&board, Color::White, 3, true), 302);
    }

    #[test]
    #[timeout(5000)]
    fn divide_sums_to_perft() {
        let board = Board::standard();
        let divided = perft_divide(&board, Color::White, 3, true);

        assert_eq!(divided.len(), 7);
        assert_eq!(divided.iter().map(|(_, n)| n).sum::<u64>(), 302);
    }

    #[test]
    fn divide_at_depth_zero_is_empty() {
        let board = Board::standard();

        assert!(perft_divide(&board, Color::White, 0, false).is_empty());
        assert!(perft_divide(&board, Color::Black, 0, true).is_empty());
    }

    #[test]
    fn empty_side_has_no_leaves() {
        let board = Board::new();
        assert_eq!(start_perft(&board, Color::Black, 2, false), 0);
        assert_eq!(start_perft(&board, Color::Black, 0, false), 1);
    }
}
