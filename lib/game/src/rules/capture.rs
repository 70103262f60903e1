//! # capture.rs
//!
//! Implements forced-capture detection.
//!
//! This file scans the neighbourhood of a piece for an opposing piece with an
//! empty landing square behind it. A piece for which such a jump exists is a
//! "forced" piece: under mandatory-capture rules its side must take a jump
//! before making any quiet move. Only offsets that the piece could legally
//! jump along are counted, so orthogonal neighbours and, for men, backward
//! diagonals never produce a forced capture.

use crate::constants::NEIGHBOURS;
use crate::representations::{
    board::Board,
    piece::{Color, Piece},
};

/// Whether `piece` has at least one capture available.
pub fn has_forced_capture(board: &Board, piece: &Piece) -> bool {
    NEIGHBOURS.iter().any(|&(dx, dy)| {
        if dx == 0 || dy == 0 || !piece.can_move_towards(dy) {
            return false;
        }

        let (x1, y1) = (piece.x as i8 + dx, piece.y as i8 + dy);
        let (x2, y2) = (x1 + dx, y1 + dy);

        if !Board::in_bounds(x2, y2) {
            return false;
        }

        match board.piece_at(x1, y1) {
            Some(neighbour) if neighbour.is_opponent_of(piece) => {
                board.piece_at(x2, y2).is_none()
            }
            _ => false,
        }
    })
}

/// Every piece on the board that can capture, in rank-major order.
pub fn list_forced_pieces(board: &Board) -> Vec<Piece> {
    board
        .pieces()
        .filter(|piece| has_forced_capture(board, piece))
        .copied()
        .collect()
}

/// The forced pieces of one side.
pub fn list_forced_pieces_for(board: &Board, color: Color) -> Vec<Piece> {
    board
        .pieces_of(color)
        .filter(|piece| has_forced_capture(board, piece))
        .copied()
        .collect()
}
