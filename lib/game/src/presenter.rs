//! # presenter.rs
//!
//! Defines the capability a presentation layer hands to the engine.
//!
//! The engine tracks only logical positions. Whatever draws the pieces owns
//! the visuals and is told about every change through this trait: pieces
//! spawned at setup, moved after an accepted move, dropped back after a
//! rejected one, destroyed when captured and crowned when promoted. All
//! methods default to doing nothing so a presenter only implements what it
//! draws.

use crate::representations::piece::{Piece, PieceId};

pub trait Presenter {
    fn spawn(&mut self, _piece: &Piece) {}

    fn relocate(&mut self, _id: PieceId, _x: u8, _y: u8) {}

    /// Returns a dragged piece to the square it left.
    fn snap_back(&mut self, id: PieceId, x: u8, y: u8) {
        self.relocate(id, x, y);
    }

    fn destroy(&mut self, _id: PieceId) {}

    fn crown(&mut self, _id: PieceId) {}
}

/// A presenter with nothing to draw.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPresenter;

impl Presenter for NullPresenter {}
