//! # board.rs
//!
//! Defines the checkers board and its occupancy operations.
//!
//! This file contains the implementation of a `Board` struct, which owns every
//! piece in play on a fixed 8x8 grid. It provides the standard opening setup,
//! bounds-checked lookups that accept raw pointer coordinates, and the low
//! level relocation and removal primitives the rules are built from. Nothing
//! outside the crate can move a piece without going through the rules.

use crate::constants::*;
use crate::error::{BoardError, BoardResult};
use crate::representations::piece::{Color, Piece, PieceId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; SQUARES],
    next_id: PieceId,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board.
    pub fn new() -> Board {
        Board {
            cells: [None; SQUARES],
            next_id: 0,
        }
    }

    /// A board holding the standard opening position.
    pub fn standard() -> Board {
        let mut board = Board::new();
        board.initialize();
        board
    }

    #[inline(always)]
    pub fn in_bounds(x: i8, y: i8) -> bool {
        x >= 0 && x < FILES as i8 && y >= 0 && y < RANKS as i8
    }

    #[inline(always)]
    fn square_to_index(x: u8, y: u8) -> usize {
        debug_assert!(x < FILES && y < RANKS, "Square ({x}, {y}) out of bounds.");
        y as usize * FILES as usize + x as usize
    }

    /// Clears the grid and lays out twelve men per side. Even ranks start on
    /// file 0, odd ranks on file 1.
    pub fn initialize(&mut self) {
        self.clear();

        for color in [Color::White, Color::Black] {
            for y in color.home_ranks() {
                let first = y % 2;
                for x in (first..FILES).step_by(2) {
                    self.spawn(x, y, color, false);
                }
            }
        }
    }

    pub fn clear(&mut self) {
        self.cells = [None; SQUARES];
        self.next_id = 0;
    }

    /// The piece at `(x, y)`, or `None` for an empty or off-board square.
    pub fn piece_at(&self, x: i8, y: i8) -> Option<&Piece> {
        if !Board::in_bounds(x, y) {
            return None;
        }

        self.cells[Board::square_to_index(x as u8, y as u8)].as_ref()
    }

    #[inline(always)]
    pub fn is_empty(&self, x: u8, y: u8) -> bool {
        self.cells[Board::square_to_index(x, y)].is_none()
    }

    /// Puts a new piece on an empty square, for custom positions.
    pub fn place(
        &mut self,
        x: i8,
        y: i8,
        color: Color,
        king: bool
    ) -> BoardResult<PieceId> {
        if !Board::in_bounds(x, y) {
            return Err(BoardError::OutOfBounds { x, y });
        }

        let (x, y) = (x as u8, y as u8);

        if !self.is_empty(x, y) {
            return Err(BoardError::Occupied { x, y });
        }

        if self.count(color) >= PIECES_PER_SIDE {
            return Err(BoardError::TooManyPieces { color });
        }

        Ok(self.spawn(x, y, color, king))
    }

    fn spawn(&mut self, x: u8, y: u8, color: Color, king: bool) -> PieceId {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);

        let mut piece = Piece::new(id, x, y, color);
        piece.king = king;
        self.cells[Board::square_to_index(x, y)] = Some(piece);

        id
    }

    /// Moves whatever stands on `from` to `to` and updates its coordinates.
    /// The caller is responsible for `to` being empty.
    pub(crate) fn relocate(&mut self, from: (u8, u8), to: (u8, u8)) {
        if from == to {
            return;
        }

        let index = Board::square_to_index(from.0, from.1);
        if let Some(mut piece) = self.cells[index].take() {
            debug_assert!(self.is_empty(to.0, to.1), "Relocating onto {to:?}");

            piece.x = to.0;
            piece.y = to.1;
            self.cells[Board::square_to_index(to.0, to.1)] = Some(piece);
        }
    }

    pub(crate) fn remove(&mut self, square: (u8, u8)) -> Option<Piece> {
        self.cells[Board::square_to_index(square.0, square.1)].take()
    }

    /// Crowns the piece on `square`. Returns true only when it was a man.
    pub(crate) fn crown(&mut self, square: (u8, u8)) -> bool {
        match self.cells[Board::square_to_index(square.0, square.1)].as_mut() {
            Some(piece) if !piece.king => {
                piece.king = true;
                true
            }
            _ => false,
        }
    }

    /// Pieces in rank-major order, starting from (0, 0).
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.cells.iter().flatten()
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |piece| piece.color == color)
    }

    pub fn count(&self, color: Color) -> usize {
        self.pieces_of(color).count()
    }

    pub fn find(&self, id: PieceId) -> Option<&Piece> {
        self.pieces().find(|piece| piece.id == id)
    }
}
