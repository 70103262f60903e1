//! # piece.rs
//!
//! Defines piece representation and properties.
//!
//! This file contains the `Color` of a side and the `Piece` struct. A piece
//! records where it stands, which side it belongs to and whether it has been
//! crowned. Each piece carries an id that stays fixed for its whole life so
//! that a presentation layer can keep its own visual handle per piece.

use std::fmt;

use crate::constants::*;

pub type PieceId = u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank direction a man of this color travels in.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    pub fn promotion_rank(self) -> u8 {
        match self {
            Color::White => WHITE_PROMOTION_RANK,
            Color::Black => BLACK_PROMOTION_RANK,
        }
    }

    pub fn home_ranks(self) -> [u8; 3] {
        match self {
            Color::White => WHITE_HOME_RANKS,
            Color::Black => BLACK_HOME_RANKS,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub id: PieceId,
    pub x: u8,
    pub y: u8,
    pub color: Color,
    pub king: bool,
}

impl Piece {
    pub fn new(id: PieceId, x: u8, y: u8, color: Color) -> Self {
        Self {
            id,
            x,
            y,
            color,
            king: false,
        }
    }

    #[inline(always)]
    pub fn square(&self) -> (u8, u8) {
        (self.x, self.y)
    }

    /// Whether this piece may travel `dy` ranks. Men only go forward, kings
    /// go either way.
    pub fn can_move_towards(&self, dy: i8) -> bool {
        self.king || dy.signum() == self.color.forward()
    }

    pub fn is_opponent_of(&self, other: &Piece) -> bool {
        self.color != other.color
    }

    /// Single-character symbol, uppercase for kings.
    pub fn symbol(&self) -> char {
        match (self.color, self.king) {
            (Color::White, false) => 'w',
            (Color::White, true) => 'W',
            (Color::Black, false) => 'b',
            (Color::Black, true) => 'B',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn men_only_move_forward() {
        let white = Piece::new(0, 3, 3, Color::White);
        let black = Piece::new(1, 4, 4, Color::Black);

        assert!(white.can_move_towards(1));
        assert!(!white.can_move_towards(-1));
        assert!(black.can_move_towards(-2));
        assert!(!black.can_move_towards(2));
    }

    #[test]
    fn kings_move_both_ways() {
        let mut black = Piece::new(1, 4, 4, Color::Black);
        black.king = true;

        assert!(black.can_move_towards(1));
        assert!(black.can_move_towards(-1));
        assert_eq!(black.symbol(), 'B');
    }

    #[test]
    fn promotion_ranks_are_opposite_edges() {
        assert_eq!(Color::White.promotion_rank(), 7);
        assert_eq!(Color::Black.promotion_rank(), 0);
        assert_eq!(Color::White.opponent(), Color::Black);
    }
}
