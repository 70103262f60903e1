//! # board_io.rs
//!
//! Implements board formatting and visualization functions.
//!
//! This file contains functionality for converting a board into a
//! human-readable ASCII art display with Unicode box-drawing characters. Men
//! are drawn as `w` and `b`, kings as `W` and `B`. Rank numbers run down the
//! left edge with rank 8 on top, file letters run along the bottom.

use game::{
    constants::{FILES, RANKS},
    representations::{board::Board, piece::Piece},
};

pub fn format_board(board: &Board) -> String {
    let files = FILES as usize;
    let mut result = String::new();

    result.push_str(
        &format!("   ╔{}╗\n", "═══╤".repeat(files - 1) + "═══")
    );

    for y in (0..RANKS).rev() {
        let cells: Vec<String> = (0..FILES)
            .map(|x| {
                board
                    .piece_at(x as i8, y as i8)
                    .map_or(' ', Piece::symbol)
                    .to_string()
            })
            .collect();

        result.push_str(
            &format!("{:02} ║ {} ║\n", y + 1, cells.join(" │ "))
        );

        if y > 0 {
            result.push_str(
                &format!("   ╟{}╢\n", "───┼".repeat(files - 1) + "───")
            );
        }
    }

    result.push_str(
        &format!("   ╚{}╝\n     ", "═══╧".repeat(files - 1) + "═══")
    );

    for col in 0..FILES {
        let file_label = ((b'A' + col) as char).to_string();
        result.push_str(&format!("{:3} ", file_label));
    }
    result.push('\n');

    result
}
