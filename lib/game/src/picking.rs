//! # picking.rs
//!
//! Maps pointer hits to board cells and turns drags into move intents.
//!
//! This file contains `BoardGeometry`, which converts a world-space hit point
//! on the board plane into grid coordinates and back, and `Drag`, which
//! follows a press/release gesture and produces the `(start, end)` intent the
//! state layer consumes. Nothing here knows about the rules: an off-board
//! release still yields an intent so that validation can reject it and the
//! piece can snap back.

use crate::representations::{board::Board, moves::MoveIntent};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    /// World position of the corner of cell (0, 0).
    pub origin: (f32, f32),
    pub cell_size: f32,
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self {
            origin: (-4.0, -4.0),
            cell_size: 1.0,
        }
    }
}

impl BoardGeometry {
    /// The cell under a hit point, or `None` when the pointer missed the
    /// board plane. The cell may lie outside the grid. A hit that does not
    /// resolve to a finite position counts as a miss.
    pub fn cell_at(&self, hit: Option<(f32, f32)>) -> Option<(i8, i8)> {
        let (hx, hz) = hit?;

        let x = ((hx - self.origin.0) / self.cell_size).floor();
        let y = ((hz - self.origin.1) / self.cell_size).floor();

        if !x.is_finite() || !y.is_finite() {
            return None;
        }

        Some((
            x.clamp(i8::MIN as f32, i8::MAX as f32) as i8,
            y.clamp(i8::MIN as f32, i8::MAX as f32) as i8,
        ))
    }

    /// World position of the centre of cell `(x, y)`.
    pub fn cell_centre(&self, x: u8, y: u8) -> (f32, f32) {
        let half = self.cell_size / 2.0;
        (
            self.origin.0 + x as f32 * self.cell_size + half,
            self.origin.1 + y as f32 * self.cell_size + half,
        )
    }
}

/// Press/release tracking for one pointer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Drag {
    start: Option<(i8, i8)>,
}

impl Drag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Picks up the piece under `cell`, if there is one. Returns whether a
    /// piece is now held.
    pub fn press(&mut self, board: &Board, cell: Option<(i8, i8)>) -> bool {
        self.start = cell.filter(|&(x, y)| board.piece_at(x, y).is_some());
        self.start.is_some()
    }

    pub fn holding(&self) -> Option<(i8, i8)> {
        self.start
    }

    /// Lets go. A release that missed the board is reported as an
    /// off-board end square.
    pub fn release(&mut self, cell: Option<(i8, i8)>) -> Option<MoveIntent> {
        let start = self.start.take()?;
        let end = cell.unwrap_or((-1, -1));

        Some(MoveIntent::new(start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::representations::piece::Color;

    #[test]
    fn hits_map_to_cells() {
        let geometry = BoardGeometry::default();

        assert_eq!(geometry.cell_at(Some((-3.5, -3.5))), Some((0, 0)));
        assert_eq!(geometry.cell_at(Some((3.9, 0.1))), Some((7, 4)));
        assert_eq!(geometry.cell_at(Some((-4.5, 0.0))), Some((-1, 4)));
        assert_eq!(geometry.cell_at(None), None);
    }

    #[test]
    fn non_finite_hits_are_misses() {
        let geometry = BoardGeometry::default();

        assert_eq!(geometry.cell_at(Some((f32::NAN, 0.5))), None);
        assert_eq!(geometry.cell_at(Some((0.5, f32::NAN))), None);
        assert_eq!(geometry.cell_at(Some((f32::INFINITY, 0.5))), None);
        assert_eq!(geometry.cell_at(Some((0.5, f32::NEG_INFINITY))), None);

        let mut board = Board::new();
        board.place(0, 0, Color::White, false).unwrap();
        let mut drag = Drag::new();

        assert!(!drag.press(&board, geometry.cell_at(Some((f32::NAN, f32::NAN)))));
    }

    #[test]
    fn centres_round_trip() {
        let geometry = BoardGeometry { origin: (0.0, 0.0), cell_size: 2.0 };

        let centre = geometry.cell_centre(3, 5);
        assert_eq!(centre, (7.0, 11.0));
        assert_eq!(geometry.cell_at(Some(centre)), Some((3, 5)));
    }

    #[test]
    fn drag_needs_a_piece_under_the_pointer() {
        let mut board = Board::new();
        board.place(2, 2, Color::White, false).unwrap();
        let mut drag = Drag::new();

        assert!(!drag.press(&board, Some((3, 3))));
        assert_eq!(drag.release(Some((4, 4))), None);

        assert!(drag.press(&board, Some((2, 2))));
        assert_eq!(
            drag.release(Some((3, 3))),
            Some(MoveIntent::new((2, 2), (3, 3)))
        );
        assert_eq!(drag.holding(), None);
    }

    #[test]
    fn release_off_board_is_an_off_board_intent() {
        let mut board = Board::new();
        board.place(2, 2, Color::White, false).unwrap();
        let mut drag = Drag::new();

        drag.press(&board, Some((2, 2)));
        assert_eq!(drag.release(None), Some(MoveIntent::new((2, 2), (-1, -1))));
    }
}
