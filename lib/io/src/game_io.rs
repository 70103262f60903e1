//! # game_io.rs
//!
//! Implements game configuration parsing and game state formatting.
//!
//! This file contains functionality for reading `.ckr` configuration files,
//! parsing and writing the compact position notation, and formatting a game
//! state for display. The position notation lists ranks from 8 down to 1,
//! separated by `/`. Within a rank, `w` and `b` are men, `W` and `B` are
//! kings, and a digit counts empty cells. A trailing `w` or `b` names the
//! side to move.

use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use game::{
    constants::{FILES, RANKS},
    presenter::Presenter,
    representations::{
        board::Board,
        piece::Color,
        state::{GameStatus, Rules, State},
    },
};

use crate::{
    board_io::format_board,
    error::{ConfigError, ConfigResult},
    move_io::format_square,
};

lazy_static! {
    static ref POSITION: Regex = Regex::new(
        r"^(start|[wbWB1-8/]+)\s+([wb])$"
    ).unwrap();
}

pub const START_POSITION: &str =
    "1b1b1b1b/b1b1b1b1/1b1b1b1b/8/8/w1w1w1w1/1w1w1w1w/w1w1w1w1 w";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub title: String,
    pub rules: Rules,
    pub board: Board,
    pub playing: Color,
}

impl GameConfig {
    /// Builds a game state from this configuration.
    pub fn into_state<P: Presenter>(self, presenter: P) -> State<P> {
        let mut state = State::from_position(
            self.board,
            self.playing,
            self.rules,
            presenter
        );
        state.title = self.title;
        state
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            title: "Checkers".to_string(),
            rules: Rules::default(),
            board: Board::standard(),
            playing: Color::White,
        }
    }
}

/// Parses a game configuration file.
///
/// The configuration file must have the following format, ignoring blank
/// lines and lines starting with `;`:
/// - First line: the title of the game
/// - Second line: `forced_captures,<true|false>`
/// - Last line: a position followed by the side to move, or `start <side>`
///   for the opening position
pub fn parse_config_file(path: impl AsRef<Path>) -> ConfigResult<GameConfig> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;

    debug!(path = %path.display(), "parsing config");
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> ConfigResult<GameConfig> {
    let lines: Vec<(usize, &str)> = contents
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with(';'))
        .collect();

    if lines.len() != 3 {
        return Err(ConfigError::Format {
            line: lines.last().map_or(0, |(n, _)| *n),
            message: format!(
                "Expected title, rules and position lines, found {} lines",
                lines.len()
            ),
        });
    }

    let title = lines[0].1.to_string();
    let rules = parse_rules(lines[1].0, lines[1].1)?;
    let (board, playing) = parse_position(lines[2].0, lines[2].1)?;

    Ok(GameConfig {
        title,
        rules,
        board,
        playing,
    })
}

fn parse_rules(line: usize, text: &str) -> ConfigResult<Rules> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();

    match parts.as_slice() {
        ["forced_captures", value] => {
            let forced_captures = value.parse::<bool>().map_err(|_| {
                ConfigError::Format {
                    line,
                    message: format!("Invalid forced_captures value: {value}"),
                }
            })?;

            Ok(Rules { forced_captures })
        }
        _ => Err(ConfigError::Format {
            line,
            message: format!("Expected forced_captures,<true|false>, got {text}"),
        }),
    }
}

/// Parses `<position> <side>` into a board and the side to move.
pub fn parse_position(line: usize, text: &str) -> ConfigResult<(Board, Color)> {
    let format_error = |message: String| ConfigError::Format { line, message };

    let captures = POSITION
        .captures(text.trim())
        .ok_or_else(|| format_error(format!("Malformed position: {text}")))?;

    let playing = match &captures[2] {
        "w" => Color::White,
        _ => Color::Black,
    };

    if &captures[1] == "start" {
        return Ok((Board::standard(), playing));
    }

    let rows: Vec<&str> = captures[1].split('/').collect();
    if rows.len() != RANKS as usize {
        return Err(format_error(format!(
            "Expected {} ranks, found {}",
            RANKS,
            rows.len()
        )));
    }

    let mut board = Board::new();

    for (i, row) in rows.iter().enumerate() {
        let y = (RANKS as usize - 1 - i) as i8;
        let overflow = || format_error(format!(
            "Rank {} covers more than {} files",
            y + 1,
            FILES
        ));
        let mut x: usize = 0;

        for c in row.chars() {
            let (color, king) = match c {
                '1'..='8' => {
                    x += c as usize - '0' as usize;
                    if x > FILES as usize {
                        return Err(overflow());
                    }
                    continue;
                }
                'w' => (Color::White, false),
                'W' => (Color::White, true),
                'b' => (Color::Black, false),
                _ => (Color::Black, true),
            };

            if x >= FILES as usize {
                return Err(overflow());
            }

            board
                .place(x as i8, y, color, king)
                .map_err(|source| ConfigError::Board { line, source })?;
            x += 1;
        }

        if x != FILES as usize {
            return Err(format_error(format!(
                "Rank {} covers {} files instead of {}",
                y + 1,
                x,
                FILES
            )));
        }
    }

    Ok((board, playing))
}

/// Writes a board and side to move in position notation.
pub fn format_position(board: &Board, playing: Color) -> String {
    let mut rows = Vec::with_capacity(RANKS as usize);

    for y in (0..RANKS as i8).rev() {
        let mut row = String::new();
        let mut empty = 0;

        for x in 0..FILES as i8 {
            match board.piece_at(x, y) {
                Some(piece) => {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.symbol());
                }
                None => empty += 1,
            }
        }

        if empty > 0 {
            row.push_str(&empty.to_string());
        }

        rows.push(row);
    }

    let side = match playing {
        Color::White => 'w',
        Color::Black => 'b',
    };

    format!("{} {}", rows.join("/"), side)
}

pub fn format_game_state<P: Presenter>(state: &State<P>, verbose: bool) -> String {
    let mut result = String::new();

    if verbose && !state.title.is_empty() {
        result.push_str(&format!("{}\n", state.title));
    }

    result.push_str(&format_board(state.board()));

    if verbose {
        let board = state.board();

        result.push_str(
            &format!("\nPosition: {}\n", format_position(board, state.playing()))
        );
        result.push_str(&format!("Current move: {}\n", state.playing()));
        result.push_str(&format!("Ply: {}\n", state.ply()));
        result.push_str(&format!(
            "Pieces: White {} / Black {}\n",
            board.count(Color::White),
            board.count(Color::Black)
        ));
        result.push_str(&format!(
            "Forced captures: {}\n",
            if state.rules().forced_captures { "enforced" } else { "informational" }
        ));

        let forced: Vec<String> = state
            .list_forced_pieces()
            .iter()
            .filter(|piece| piece.color == state.playing())
            .map(|piece| format_square(piece.square()))
            .collect();

        result.push_str(&format!(
            "Forced pieces: {}\n",
            if forced.is_empty() { "-".to_string() } else { forced.join(" ") }
        ));
    }

    if let GameStatus::Won(winner) = state.status() {
        result.push_str(&format!("{} wins\n", winner));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use game::{error::BoardError, presenter::NullPresenter};
    use ntest::timeout;

    #[test]
    fn start_position_round_trips() {
        let (board, playing) = parse_position(1, START_POSITION).unwrap();

        assert_eq!(format_position(&board, playing), START_POSITION);
        assert_eq!(
            format_position(&Board::standard(), Color::White),
            START_POSITION
        );
    }

    #[test]
    fn start_keyword_is_the_opening() {
        let (board, playing) = parse_position(1, "start b").unwrap();

        assert_eq!(board, Board::standard());
        assert_eq!(playing, Color::Black);
    }

    #[test]
    #[timeout(1000)]
    fn config_with_comments_parses() {
        let config = parse_config(
            "; endgame drill\n\
             King Chase\n\
             \n\
             forced_captures,true\n\
             8/8/8/3B4/8/2w5/8/8 b\n"
        )
        .unwrap();

        assert_eq!(config.title, "King Chase");
        assert!(config.rules.forced_captures);
        assert_eq!(config.playing, Color::Black);
        assert!(config.board.piece_at(3, 4).unwrap().king);
        assert_eq!(config.board.piece_at(2, 2).unwrap().color, Color::White);

        let state = config.into_state(NullPresenter);
        assert_eq!(state.title, "King Chase");
        assert_eq!(state.playing(), Color::Black);
    }

    #[test]
    fn malformed_lines_report_their_number() {
        match parse_config("Title\nforced_captures,maybe\nstart w\n") {
            Err(ConfigError::Format { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected result {other:?}"),
        }

        match parse_config("Title\nforced_captures,false\n\n8/8/8/8/8/8/8/7 w\n") {
            Err(ConfigError::Format { line, .. }) => assert_eq!(line, 4),
            other => panic!("unexpected result {other:?}"),
        }

        match parse_config("Title\nstart w\n") {
            Err(ConfigError::Format { .. }) => {}
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn too_many_pieces_is_a_board_error() {
        let crowded = "wwwwwwww/wwwwwwww/8/8/8/8/8/8 w";

        match parse_position(3, crowded) {
            Err(ConfigError::Board { line, source }) => {
                assert_eq!(line, 3);
                assert_eq!(source, BoardError::TooManyPieces { color: Color::White });
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn overlong_ranks_are_format_errors() {
        for text in [
            "8888888888888888/8/8/8/8/8/8/8 w",
            "8w/8/8/8/8/8/8/8 b",
            "w7b/8/8/8/8/8/8/8 w",
        ] {
            match parse_position(1, text) {
                Err(ConfigError::Format { line, message }) => {
                    assert_eq!(line, 1, "{text}");
                    assert!(message.contains("Rank 8"), "{message}");
                }
                other => panic!("unexpected result for {text}: {other:?}"),
            }
        }
    }

    #[test]
    fn verbose_state_lists_side_and_counts() {
        let mut state = State::new(Rules::default());
        state.initialize();

        let text = format_game_state(&state, true);

        assert!(text.contains("Current move: White"));
        assert!(text.contains("Pieces: White 12 / Black 12"));
        assert!(text.contains("Forced pieces: -"));
        assert!(!text.contains("wins"));
    }
}
