//! # log_io.rs
//!
//! A presenter for headless front ends that reports every visual change
//! through `tracing` instead of drawing it.

use tracing::{debug, info};

use game::{
    presenter::Presenter,
    representations::piece::{Piece, PieceId},
};

use crate::move_io::format_square;

#[derive(Debug, Default, Clone, Copy)]
pub struct LogPresenter {
    pub events: usize,
}

impl Presenter for LogPresenter {
    fn spawn(&mut self, piece: &Piece) {
        self.events += 1;
        debug!(id = piece.id, square = %format_square(piece.square()), "spawn");
    }

    fn relocate(&mut self, id: PieceId, x: u8, y: u8) {
        self.events += 1;
        debug!(id, square = %format_square((x, y)), "relocate");
    }

    fn snap_back(&mut self, id: PieceId, x: u8, y: u8) {
        self.events += 1;
        debug!(id, square = %format_square((x, y)), "snap back");
    }

    fn destroy(&mut self, id: PieceId) {
        self.events += 1;
        info!(id, "piece captured");
    }

    fn crown(&mut self, id: PieceId) {
        self.events += 1;
        debug!(id, "crown");
    }
}
