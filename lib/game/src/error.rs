//! # error.rs
//!
//! Defines the error types of the rule engine.
//!
//! Move errors are always recovered by the engine itself: the piece snaps
//! back, the turn is kept, and the error is handed to the caller as a value.
//! Board errors only arise while building a custom position.

use thiserror::Error;

use crate::representations::piece::Color;

/// Reasons a submitted move intent is rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// A coordinate lies outside the 8x8 grid
    #[error("Square ({x}, {y}) is off the board")]
    OutOfBounds { x: i8, y: i8 },

    /// Nothing to move at the start square
    #[error("No piece at ({x}, {y})")]
    NoPiece { x: u8, y: u8 },

    /// The piece at the start square belongs to the side not on move
    #[error("Piece at ({x}, {y}) belongs to the side not on move")]
    NotYourTurn { x: u8, y: u8 },

    /// The destination already holds a piece
    #[error("Destination ({x}, {y}) is occupied")]
    OccupiedDestination { x: u8, y: u8 },

    /// The move breaks the step or jump geometry
    #[error("Illegal move from {start:?} to {end:?}")]
    IllegalMove { start: (u8, u8), end: (u8, u8) },

    /// A capture is available and captures are mandatory
    #[error("A capture is available and must be taken")]
    CaptureRequired,

    /// The game already has a winner
    #[error("The game is over")]
    GameOver,
}

/// Failures while placing pieces on a custom board
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("Square ({x}, {y}) is off the board")]
    OutOfBounds { x: i8, y: i8 },

    #[error("Square ({x}, {y}) is already occupied")]
    Occupied { x: u8, y: u8 },

    #[error("{color} already has the maximum number of pieces")]
    TooManyPieces { color: Color },
}

/// Result type alias for move submission
pub type MoveResult<T> = Result<T, MoveError>;

/// Result type alias for board setup
pub type BoardResult<T> = Result<T, BoardError>;
