//! # state.rs
//!
//! Defines game state representation and management.
//!
//! This file contains the `State` struct, which owns the board, tracks whose
//! turn it is and applies move intents submitted by the controlling actor. A
//! submitted move is classified, checked against the capture rule, applied,
//! and followed by promotion and turn alternation. A rejected move leaves the
//! board and the turn untouched and asks the presenter to drop the dragged
//! piece back on its start square.

use tracing::{debug, info};

use crate::{
    error::{MoveError, MoveResult},
    moves::move_list::generate_moves,
    presenter::{NullPresenter, Presenter},
    representations::{
        board::Board,
        moves::{Move, MoveIntent, MoveKind, MoveOutcome},
        piece::{Color, Piece},
    },
    rules::{
        capture::{list_forced_pieces, list_forced_pieces_for},
        legality::classify_move,
        promotion,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rules {
    /// Reject quiet moves while the side to move has a capture.
    pub forced_captures: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Color),
}

#[derive(Debug)]
pub struct State<P: Presenter = NullPresenter> {
    pub title: String,

    board: Board,
    playing: Color,
    rules: Rules,
    presenter: P,

    ply: u32,
}

impl State<NullPresenter> {
    /// An empty, headless game. Call [`State::initialize`] to set up.
    pub fn new(rules: Rules) -> Self {
        State::with_presenter(rules, NullPresenter)
    }
}

impl<P: Presenter> State<P> {
    pub fn with_presenter(rules: Rules, presenter: P) -> Self {
        State {
            title: String::new(),
            board: Board::new(),
            playing: Color::White,
            rules,
            presenter,
            ply: 0,
        }
    }

    /// Starts from a custom position, announcing every piece to the
    /// presenter.
    pub fn from_position(
        board: Board,
        playing: Color,
        rules: Rules,
        presenter: P
    ) -> Self {
        let mut state = State::with_presenter(rules, presenter);
        state.board = board;
        state.playing = playing;

        for piece in state.board.pieces() {
            state.presenter.spawn(piece);
        }

        state.start_turn();
        state
    }

    /// Clears the board and lays out the opening position, white to move.
    pub fn initialize(&mut self) {
        self.board.initialize();
        self.playing = Color::White;
        self.ply = 0;

        for piece in self.board.pieces() {
            self.presenter.spawn(piece);
        }

        self.start_turn();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn playing(&self) -> Color {
        self.playing
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    pub fn ply(&self) -> u32 {
        self.ply
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn piece_at(&self, x: i8, y: i8) -> Option<&Piece> {
        self.board.piece_at(x, y)
    }

    pub fn is_legal_move(&self, piece: &Piece, start: (u8, u8), end: (i8, i8)) -> bool {
        classify_move(&self.board, piece, start, end).is_ok()
    }

    pub fn submit(&mut self, intent: MoveIntent) -> MoveResult<MoveOutcome> {
        self.try_submit_move(intent.start, intent.end)
    }

    /// Validates and plays the piece on `start` to `end` for the side to
    /// move. The turn passes only when a real move was made.
    pub fn try_submit_move(
        &mut self,
        start: (i8, i8),
        end: (i8, i8)
    ) -> MoveResult<MoveOutcome> {
        if !Board::in_bounds(start.0, start.1) {
            return Err(MoveError::OutOfBounds { x: start.0, y: start.1 });
        }

        let piece = match self.board.piece_at(start.0, start.1) {
            Some(piece) => *piece,
            None => {
                return Err(MoveError::NoPiece {
                    x: start.0 as u8,
                    y: start.1 as u8,
                })
            }
        };

        if end == start {                                                       /* cancel holds for any piece, any time */
            self.presenter.snap_back(piece.id, piece.x, piece.y);
            return Ok(MoveOutcome::cancelled());
        }

        if let GameStatus::Won(_) = self.status() {
            self.presenter.snap_back(piece.id, piece.x, piece.y);
            return Err(MoveError::GameOver);
        }

        match self.validate(&piece, end) {
            Ok(mv) if mv.kind == MoveKind::Cancel => {
                self.presenter.snap_back(piece.id, piece.x, piece.y);
                Ok(MoveOutcome::cancelled())
            }
            Ok(mv) => {
                let captured = self.apply_move(&mv)?;
                let promoted = self.check_promotion(mv.end);

                debug!(?mv, "move accepted");
                self.end_turn();

                Ok(MoveOutcome {
                    cancelled: false,
                    captured,
                    promoted,
                })
            }
            Err(error) => {
                debug!(?start, ?end, %error, "move rejected, snapping back");
                self.presenter.snap_back(piece.id, piece.x, piece.y);
                Err(error)
            }
        }
    }

    fn validate(&self, piece: &Piece, end: (i8, i8)) -> MoveResult<Move> {
        if piece.color != self.playing {
            return Err(MoveError::NotYourTurn { x: piece.x, y: piece.y });
        }

        let mv = classify_move(&self.board, piece, piece.square(), end)?;

        if self.rules.forced_captures
            && mv.kind == MoveKind::Step
            && !list_forced_pieces_for(&self.board, self.playing).is_empty()
        {
            return Err(MoveError::CaptureRequired);
        }

        Ok(mv)
    }

    /// Relocates the moving piece and removes a jumped one. Promotion and
    /// turn handling are left to the caller. Only occupancy is checked: the
    /// start must hold a piece and the end must be an empty on-board square.
    pub fn apply_move(&mut self, mv: &Move) -> MoveResult<Option<Piece>> {
        let (sx, sy) = (mv.start.0 as i8, mv.start.1 as i8);
        let (ex, ey) = (mv.end.0 as i8, mv.end.1 as i8);

        if !Board::in_bounds(sx, sy) {
            return Err(MoveError::OutOfBounds { x: sx, y: sy });
        }

        if !Board::in_bounds(ex, ey) {
            return Err(MoveError::OutOfBounds { x: ex, y: ey });
        }

        let id = match self.board.piece_at(sx, sy) {
            Some(piece) => piece.id,
            None => return Err(MoveError::NoPiece { x: mv.start.0, y: mv.start.1 }),
        };

        if mv.start != mv.end && self.board.piece_at(ex, ey).is_some() {
            return Err(MoveError::OccupiedDestination { x: mv.end.0, y: mv.end.1 });
        }

        self.board.relocate(mv.start, mv.end);
        self.presenter.relocate(id, mv.end.0, mv.end.1);

        let captured = mv
            .captured_square()
            .filter(|&(cx, cy)| Board::in_bounds(cx as i8, cy as i8))
            .and_then(|square| self.board.remove(square));

        if let Some(captured) = captured {
            self.presenter.destroy(captured.id);
        }

        Ok(captured)
    }

    pub fn check_promotion(&mut self, end: (u8, u8)) -> bool {
        if !promotion::check_promotion(&mut self.board, end) {
            return false;
        }

        if let Some(piece) = self.board.piece_at(end.0 as i8, end.1 as i8) {
            info!(color = %piece.color, x = end.0, y = end.1, "piece crowned");
            self.presenter.crown(piece.id);
        }

        true
    }

    pub fn list_forced_pieces(&self) -> Vec<Piece> {
        list_forced_pieces(&self.board)
    }

    /// Legal moves for the side to move under the configured rules.
    pub fn legal_moves(&self) -> Vec<Move> {
        generate_moves(&self.board, self.playing, self.rules.forced_captures)
    }

    /// A side with no pieces or no legal move has lost.
    pub fn status(&self) -> GameStatus {
        if self.board.count(self.playing) == 0 || self.legal_moves().is_empty() {
            GameStatus::Won(self.playing.opponent())
        } else {
            GameStatus::InProgress
        }
    }

    fn end_turn(&mut self) {
        self.playing = self.playing.opponent();
        self.ply += 1;

        info!(ply = self.ply, playing = %self.playing, "turn passed");
        self.start_turn();
    }

    fn start_turn(&self) {
        if let GameStatus::Won(winner) = self.status() {
            info!(%winner, "game over");
            return;
        }

        let forced = list_forced_pieces_for(&self.board, self.playing);
        if !forced.is_empty() {
            info!(
                playing = %self.playing,
                pieces = ?forced.iter().map(Piece::square).collect::<Vec<_>>(),
                "forced pieces"
            );
        }
    }
}
