//! # move_list.rs
//!
//! Implements move generation and the board-level make-move primitive.
//!
//! This file enumerates every step and jump available to one side and
//! applies a classified move to a board: relocation, removal of the jumped
//! piece and crowning on the promotion rank. The state layer wraps the same
//! primitive with turn handling and presentation callbacks; search routines
//! and perft use it directly on cloned boards.

use crate::constants::NEIGHBOURS;
use crate::representations::{
    board::Board,
    moves::Move,
    piece::{Color, Piece},
};
use crate::rules::{legality::classify_move, promotion::check_promotion};

/// Legal moves of `piece` from its current square.
pub fn generate_piece_moves(board: &Board, piece: &Piece) -> Vec<Move> {
    let mut moves = Vec::new();

    for &(dx, dy) in NEIGHBOURS.iter() {
        if dx == 0 || dy == 0 {                                                 /* diagonals only                     */
            continue;
        }

        for distance in 1..=2 {
            let end = (
                piece.x as i8 + dx * distance,
                piece.y as i8 + dy * distance,
            );

            if let Ok(mv) = classify_move(board, piece, piece.square(), end) {
                moves.push(mv);
            }
        }
    }

    moves
}

/// Every legal move of `color`. With `forced_captures` set and a jump on the
/// board, only the jumps are returned.
pub fn generate_moves(
    board: &Board,
    color: Color,
    forced_captures: bool
) -> Vec<Move> {
    let mut moves: Vec<Move> = board
        .pieces_of(color)
        .flat_map(|piece| generate_piece_moves(board, piece))
        .collect();

    if forced_captures && moves.iter().any(Move::is_capture) {
        moves.retain(Move::is_capture);
    }

    moves
}

/// Result of [`make_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Applied {
    pub captured: Option<Piece>,
    pub promoted: bool,
}

/// Applies an already classified move to `board`.
pub fn make_move(board: &mut Board, mv: &Move) -> Applied {
    board.relocate(mv.start, mv.end);

    let captured = mv
        .captured_square()
        .and_then(|square| board.remove(square));

    let promoted = check_promotion(board, mv.end);

    Applied { captured, promoted }
}
