//! # constants.rs
//!
//! Defines board dimensions, setup rows and direction tables.
//!
//! This file contains constant definitions for the fixed 8x8 checkers board,
//! the rows each side starts on, the promotion ranks and the neighbour offsets
//! used when scanning for captures. These constants are used throughout the
//! codebase to keep the rules and the text output consistent.

pub const FILES: u8 = 8;
pub const RANKS: u8 = 8;
pub const SQUARES: usize = FILES as usize * RANKS as usize;

pub const PIECES_PER_SIDE: usize = 12;

pub const WHITE_HOME_RANKS: [u8; 3] = [0, 1, 2];
pub const BLACK_HOME_RANKS: [u8; 3] = [5, 6, 7];

pub const WHITE_PROMOTION_RANK: u8 = RANKS - 1;
pub const BLACK_PROMOTION_RANK: u8 = 0;

pub const NEIGHBOURS: [(i8, i8); 8] = [
    ( 0,  1),                                                                   /* n,ne,e,se,s,sw,w,nw                */
    ( 1,  1),
    ( 1,  0),
    ( 1, -1),
    ( 0, -1),
    (-1, -1),
    (-1,  0),
    (-1,  1)
];
