use crate::types::Color;

use derive_more::{Add, Neg};

/// Step between two squares, in rows and columns
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Add, Neg)]
pub struct Delta {
    pub rows: i8,
    pub cols: i8,
}

impl Delta {
    pub const fn new(rows: i8, cols: i8) -> Delta {
        Delta { rows, cols }
    }
}

pub const ORTHOGONAL: [Delta; 4] = [
    Delta::new(1, 0),
    Delta::new(-1, 0),
    Delta::new(0, 1),
    Delta::new(0, -1),
];

pub const DIAGONAL: [Delta; 4] = [
    Delta::new(1, 1),
    Delta::new(1, -1),
    Delta::new(-1, 1),
    Delta::new(-1, -1),
];

/// All eight neighbour directions, used by the king and the queen
pub const ADJACENT: [Delta; 8] = [
    Delta::new(1, 0),
    Delta::new(-1, 0),
    Delta::new(0, 1),
    Delta::new(0, -1),
    Delta::new(1, 1),
    Delta::new(1, -1),
    Delta::new(-1, 1),
    Delta::new(-1, -1),
];

pub const KNIGHT_JUMPS: [Delta; 8] = [
    Delta::new(1, 2),
    Delta::new(1, -2),
    Delta::new(-1, 2),
    Delta::new(-1, -2),
    Delta::new(2, 1),
    Delta::new(2, -1),
    Delta::new(-2, 1),
    Delta::new(-2, -1),
];

/// Longest possible slide on an 8x8 board
pub const MAX_SLIDE: usize = 7;

pub const fn back_row(c: Color) -> i8 {
    match c {
        Color::White => 1,
        Color::Black => 8,
    }
}

pub const fn pawn_row(c: Color) -> i8 {
    match c {
        Color::White => 2,
        Color::Black => 7,
    }
}

pub const fn promote_row(c: Color) -> i8 {
    back_row(c.inv())
}

pub const fn pawn_forward(c: Color) -> Delta {
    match c {
        Color::White => Delta::new(1, 0),
        Color::Black => Delta::new(-1, 0),
    }
}

pub const fn pawn_left(c: Color) -> Delta {
    match c {
        Color::White => Delta::new(1, -1),
        Color::Black => Delta::new(-1, -1),
    }
}

pub const fn pawn_right(c: Color) -> Delta {
    match c {
        Color::White => Delta::new(1, 1),
        Color::Black => Delta::new(-1, 1),
    }
}
