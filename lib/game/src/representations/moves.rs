//! # moves.rs
//!
//! Defines move intents, classified moves and their outcomes.

use crate::representations::piece::Piece;

/// A raw `(start, end)` pair as delivered by the input layer. Coordinates
/// are signed so that off-board releases survive until validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveIntent {
    pub start: (i8, i8),
    pub end: (i8, i8),
}

impl MoveIntent {
    pub fn new(start: (i8, i8), end: (i8, i8)) -> Self {
        Self { start, end }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// Dropped back on the start square.
    Cancel,
    Step,
    Jump { captured: (u8, u8) },
}

/// A move that passed the geometry and occupancy checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub start: (u8, u8),
    pub end: (u8, u8),
    pub kind: MoveKind,
}

impl Move {
    pub fn is_capture(&self) -> bool {
        matches!(self.kind, MoveKind::Jump { .. })
    }

    pub fn captured_square(&self) -> Option<(u8, u8)> {
        match self.kind {
            MoveKind::Jump { captured } => Some(captured),
            _ => None,
        }
    }

    /// The same displacement run backwards. The captured square, if any, is
    /// kept so the reverse of a jump still names the cell jumped over.
    pub fn reversed(&self) -> Move {
        Move {
            start: self.end,
            end: self.start,
            kind: self.kind,
        }
    }
}

/// What an accepted move did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    pub cancelled: bool,
    pub captured: Option<Piece>,
    pub promoted: bool,
}

impl MoveOutcome {
    pub fn cancelled() -> Self {
        Self {
            cancelled: true,
            ..Self::default()
        }
    }
}
