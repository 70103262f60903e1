//! # legality.rs
//!
//! Implements move classification against the current board.
//!
//! This file decides whether a piece may travel from one square to another.
//! A move is either a cancel (dropped back where it started), a diagonal step
//! of one square, or a diagonal jump of two squares over an opposing piece.
//! Men only move away from their own back rank; kings move in both
//! directions. Classification never mutates the board: a jump names the
//! square it would capture and leaves removal to the caller.

use crate::error::{MoveError, MoveResult};
use crate::representations::{
    board::Board,
    moves::{Move, MoveKind},
    piece::Piece,
};

/// Classifies the move of `piece` from `start` to `end`, or explains why it
/// is not allowed.
pub fn classify_move(
    board: &Board,
    piece: &Piece,
    start: (u8, u8),
    end: (i8, i8)
) -> MoveResult<Move> {
    if end == (start.0 as i8, start.1 as i8) {
        return Ok(Move { start, end: start, kind: MoveKind::Cancel });
    }

    if !Board::in_bounds(end.0, end.1) {
        return Err(MoveError::OutOfBounds { x: end.0, y: end.1 });
    }

    let end = (end.0 as u8, end.1 as u8);

    if !board.is_empty(end.0, end.1) {
        return Err(MoveError::OccupiedDestination { x: end.0, y: end.1 });
    }

    let dx = (end.0 as i8 - start.0 as i8).abs();
    let dy = end.1 as i8 - start.1 as i8;
    let illegal = MoveError::IllegalMove { start, end };

    if !piece.can_move_towards(dy) {
        return Err(illegal);
    }

    match (dx, dy.abs()) {
        (1, 1) => Ok(Move { start, end, kind: MoveKind::Step }),
        (2, 2) => {
            let captured = (                                                    /* deltas are even, midpoint is exact */
                (start.0 + end.0) / 2,
                (start.1 + end.1) / 2,
            );

            match board.piece_at(captured.0 as i8, captured.1 as i8) {
                Some(between) if between.is_opponent_of(piece) => {
                    Ok(Move { start, end, kind: MoveKind::Jump { captured } })
                }
                _ => Err(illegal),
            }
        }
        _ => Err(illegal),
    }
}

/// Boolean form of [`classify_move`].
pub fn is_legal_move(
    board: &Board,
    piece: &Piece,
    start: (u8, u8),
    end: (i8, i8)
) -> bool {
    classify_move(board, piece, start, end).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::representations::piece::Color;

    fn board_with(pieces: &[(i8, i8, Color, bool)]) -> Board {
        let mut board = Board::new();
        for &(x, y, color, king) in pieces {
            board.place(x, y, color, king).unwrap();
        }
        board
    }

    fn at(board: &Board, x: i8, y: i8) -> Piece {
        *board.piece_at(x, y).unwrap()
    }

    #[test]
    fn same_square_is_a_cancel() {
        let board = board_with(&[(3, 3, Color::White, false)]);
        let piece = at(&board, 3, 3);

        let mv = classify_move(&board, &piece, (3, 3), (3, 3)).unwrap();
        assert_eq!(mv.kind, MoveKind::Cancel);
    }

    #[test]
    fn white_man_steps_forward_only() {
        let board = board_with(&[(3, 3, Color::White, false)]);
        let piece = at(&board, 3, 3);

        assert!(is_legal_move(&board, &piece, (3, 3), (4, 4)));
        assert!(is_legal_move(&board, &piece, (3, 3), (2, 4)));
        assert!(!is_legal_move(&board, &piece, (3, 3), (4, 2)));
        assert!(!is_legal_move(&board, &piece, (3, 3), (3, 4)));
        assert!(!is_legal_move(&board, &piece, (3, 3), (5, 5)));
    }

    #[test]
    fn black_man_steps_towards_rank_zero() {
        let board = board_with(&[(4, 4, Color::Black, false)]);
        let piece = at(&board, 4, 4);

        assert!(is_legal_move(&board, &piece, (4, 4), (3, 3)));
        assert!(is_legal_move(&board, &piece, (4, 4), (5, 3)));
        assert!(!is_legal_move(&board, &piece, (4, 4), (5, 5)));
    }

    #[test]
    fn king_steps_both_ways() {
        let board = board_with(&[(4, 4, Color::Black, true)]);
        let piece = at(&board, 4, 4);

        assert!(is_legal_move(&board, &piece, (4, 4), (5, 5)));
        assert!(is_legal_move(&board, &piece, (4, 4), (3, 3)));
    }

    #[test]
    fn jump_names_the_captured_square() {
        let board = board_with(&[
            (3, 3, Color::White, false),
            (4, 4, Color::Black, false),
        ]);
        let piece = at(&board, 3, 3);

        let mv = classify_move(&board, &piece, (3, 3), (5, 5)).unwrap();
        assert_eq!(mv.kind, MoveKind::Jump { captured: (4, 4) });
        assert!(board.piece_at(4, 4).is_some(), "classification must not capture");
    }

    #[test]
    fn jump_over_friend_or_nothing_is_illegal() {
        let board = board_with(&[
            (3, 3, Color::White, false),
            (4, 4, Color::White, false),
        ]);
        let piece = at(&board, 3, 3);

        assert_eq!(
            classify_move(&board, &piece, (3, 3), (5, 5)),
            Err(MoveError::IllegalMove { start: (3, 3), end: (5, 5) })
        );
        assert!(!is_legal_move(&board, &piece, (3, 3), (1, 5)));
    }

    #[test]
    fn occupied_and_off_board_destinations() {
        let board = board_with(&[
            (0, 0, Color::White, false),
            (1, 1, Color::Black, false),
        ]);
        let piece = at(&board, 0, 0);

        assert_eq!(
            classify_move(&board, &piece, (0, 0), (1, 1)),
            Err(MoveError::OccupiedDestination { x: 1, y: 1 })
        );
        assert_eq!(
            classify_move(&board, &piece, (0, 0), (-1, 1)),
            Err(MoveError::OutOfBounds { x: -1, y: 1 })
        );
    }
}
