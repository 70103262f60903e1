//! # promotion.rs
//!
//! Crowns men that reach the far edge of the board.

use crate::representations::board::Board;

/// Crowns the piece standing on `end` when it is a man sitting on its
/// promotion rank. Returns true only for a fresh promotion; kings and men
/// elsewhere are left alone.
pub fn check_promotion(board: &mut Board, end: (u8, u8)) -> bool {
    let needs_king = match board.piece_at(end.0 as i8, end.1 as i8) {
        Some(piece) => !piece.king && end.1 == piece.color.promotion_rank(),
        None => false,
    };

    needs_king && board.crown(end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::representations::piece::Color;

    #[test]
    fn white_crowns_on_rank_seven_once() {
        let mut board = Board::new();
        board.place(2, 7, Color::White, false).unwrap();

        assert!(check_promotion(&mut board, (2, 7)));
        assert!(!check_promotion(&mut board, (2, 7)));
        assert!(board.piece_at(2, 7).unwrap().king);
    }

    #[test]
    fn black_crowns_on_rank_zero() {
        let mut board = Board::new();
        board.place(3, 0, Color::Black, false).unwrap();

        assert!(check_promotion(&mut board, (3, 0)));
    }

    #[test]
    fn home_rank_is_not_a_promotion() {
        let mut board = Board::new();
        board.place(0, 0, Color::White, false).unwrap();
        board.place(1, 7, Color::Black, false).unwrap();

        assert!(!check_promotion(&mut board, (0, 0)));
        assert!(!check_promotion(&mut board, (1, 7)));
        assert!(!check_promotion(&mut board, (4, 4)));
    }
}
