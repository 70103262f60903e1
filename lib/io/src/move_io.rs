//! # move_io.rs
//!
//! Implements square and move notation.
//!
//! Squares are written as a file letter `a`-`h` followed by a rank digit
//! `1`-`8`, so `a1` is cell (0, 0). A move is two squares, optionally joined
//! by `-` for a step or `x` for a capture: `c3 d4`, `c3-d4`, `c3xe5`.

use lazy_static::lazy_static;
use regex::Regex;

use game::representations::moves::{Move, MoveIntent, MoveKind};

lazy_static! {
    static ref SQUARE: Regex = Regex::new(
        r"^([a-hA-H])([1-8])$"
    ).unwrap();
    static ref MOVE: Regex = Regex::new(
        r"^([a-hA-H][1-8])\s*[-x]?\s*([a-hA-H][1-8])$"
    ).unwrap();
}

pub fn parse_square(text: &str) -> Option<(i8, i8)> {
    let captures = SQUARE.captures(text.trim())?;

    let file = captures[1].to_ascii_lowercase().bytes().next()? - b'a';
    let rank = captures[2].bytes().next()? - b'1';

    Some((file as i8, rank as i8))
}

pub fn parse_move(text: &str) -> Option<MoveIntent> {
    let captures = MOVE.captures(text.trim())?;

    let start = parse_square(&captures[1])?;
    let end = parse_square(&captures[2])?;

    Some(MoveIntent::new(start, end))
}

pub fn format_square(square: (u8, u8)) -> String {
    format!("{}{}", (b'a' + square.0) as char, square.1 + 1)
}

pub fn format_move(mv: &Move) -> String {
    let separator = match mv.kind {
        MoveKind::Jump { .. } => 'x',
        _ => '-',
    };

    format!(
        "{}{}{}",
        format_square(mv.start),
        separator,
        format_square(mv.end)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squares_use_file_letters_and_rank_digits() {
        assert_eq!(parse_square("a1"), Some((0, 0)));
        assert_eq!(parse_square(" H8 "), Some((7, 7)));
        assert_eq!(parse_square("i1"), None);
        assert_eq!(parse_square("a9"), None);
        assert_eq!(format_square((2, 2)), "c3");
    }

    #[test]
    fn moves_accept_several_separators() {
        let expected = Some(MoveIntent::new((2, 2), (3, 3)));

        assert_eq!(parse_move("c3 d4"), expected);
        assert_eq!(parse_move("c3-d4"), expected);
        assert_eq!(parse_move("c3d4"), expected);
        assert_eq!(parse_move("c3xe5"), Some(MoveIntent::new((2, 2), (4, 4))));
        assert_eq!(parse_move("c3"), None);
        assert_eq!(parse_move("quit"), None);
    }

    #[test]
    fn captures_are_written_with_x() {
        let jump = Move {
            start: (2, 2),
            end: (4, 4),
            kind: MoveKind::Jump { captured: (3, 3) },
        };
        let step = Move { start: (2, 2), end: (3, 3), kind: MoveKind::Step };

        assert_eq!(format_move(&jump), "c3xe5");
        assert_eq!(format_move(&step), "c3-d4");
    }
}
