use crate::geometry::Delta;

use std::fmt::{self, Display};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PositionParseError {
    #[error("unexpected file char {0:?}")]
    UnexpectedFileChar(char),
    #[error("unexpected rank char {0:?}")]
    UnexpectedRankChar(char),
    #[error("invalid string length")]
    BadLength,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PieceParseError {
    #[error("unexpected piece char {0:?}")]
    UnexpectedChar(char),
    #[error("invalid string length")]
    BadLength,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("unexpected color char {0:?}")]
    UnexpectedChar(char),
    #[error("invalid string length")]
    BadLength,
}

/// Square on the board, addressed by 1-based `row` and `col`
///
/// Row 1 is White's back rank, column 1 is the a-file. A position is _valid_ iff both
/// coordinates lie in `1..=8`. Invalid positions can be built and inspected freely (they
/// appear naturally when stepping off the edge), but they never index a board.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: i8,
    col: i8,
}

impl Position {
    pub const fn new(row: i8, col: i8) -> Position {
        Position { row, col }
    }

    pub const fn row(&self) -> i8 {
        self.row
    }

    pub const fn col(&self) -> i8 {
        self.col
    }

    pub const fn is_valid(&self) -> bool {
        1 <= self.row && self.row <= 8 && 1 <= self.col && self.col <= 8
    }

    /// Returns the square index in `0..64`, row-major starting from a1
    ///
    /// # Panics
    ///
    /// Panics if the position is not valid.
    pub const fn index(&self) -> usize {
        assert!(self.is_valid(), "position is off the board");
        ((self.row - 1) as usize) * 8 + (self.col - 1) as usize
    }

    pub const fn try_index(&self) -> Option<usize> {
        if self.is_valid() {
            Some(self.index())
        } else {
            None
        }
    }

    pub const fn from_index(val: usize) -> Position {
        assert!(val < 64, "square index must be between 0 and 63");
        Position {
            row: (val / 8) as i8 + 1,
            col: (val % 8) as i8 + 1,
        }
    }

    /// Steps by `delta`, returning `None` if the result leaves the board
    pub fn try_shift(self, delta: Delta) -> Option<Position> {
        let res = Position {
            row: self.row.checked_add(delta.rows)?,
            col: self.col.checked_add(delta.cols)?,
        };
        res.is_valid().then_some(res)
    }

    /// Iterates over all 64 valid positions, a1 first, row by row
    pub fn iter() -> impl Iterator<Item = Self> {
        (0..64).map(Self::from_index)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "Position({})", self)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        if !self.is_valid() {
            return write!(f, "?{},{}", self.row, self.col);
        }
        write!(
            f,
            "{}{}",
            (b'a' + (self.col - 1) as u8) as char,
            (b'0' + self.row as u8) as char
        )
    }
}

impl FromStr for Position {
    type Err = PositionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (file_ch, rank_ch) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file, rank),
            _ => return Err(PositionParseError::BadLength),
        };
        let col = match file_ch {
            'a'..='h' => (u32::from(file_ch) - u32::from('a')) as i8 + 1,
            _ => return Err(PositionParseError::UnexpectedFileChar(file_ch)),
        };
        let row = match rank_ch {
            '1'..='8' => (u32::from(rank_ch) - u32::from('0')) as i8,
            _ => return Err(PositionParseError::UnexpectedRankChar(rank_ch)),
        };
        Ok(Position::new(row, col))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    pub const fn inv(&self) -> Color {
        match *self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn as_char(&self) -> char {
        match *self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    pub fn from_char(c: char) -> Option<Color> {
        match c {
            'w' => Some(Color::White),
            'b' => Some(Color::Black),
            _ => None,
        }
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        [Color::White, Color::Black].into_iter()
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match *self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Color::from_char(ch).ok_or(ColorParseError::UnexpectedChar(ch)),
            _ => Err(ColorParseError::BadLength),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PieceKind {
    King = 0,
    Queen = 1,
    Rook = 2,
    Bishop = 3,
    Knight = 4,
    Pawn = 5,
}

impl PieceKind {
    pub fn iter() -> impl Iterator<Item = Self> {
        [
            PieceKind::King,
            PieceKind::Queen,
            PieceKind::Rook,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Pawn,
        ]
        .into_iter()
    }

    /// Upper-case letter used in FEN and in the debug dump
    pub fn as_char(&self) -> char {
        match *self {
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
            PieceKind::Rook => 'R',
            PieceKind::Bishop => 'B',
            PieceKind::Knight => 'N',
            PieceKind::Pawn => 'P',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'K' => Some(PieceKind::King),
            'Q' => Some(PieceKind::Queen),
            'R' => Some(PieceKind::Rook),
            'B' => Some(PieceKind::Bishop),
            'N' => Some(PieceKind::Knight),
            'P' => Some(PieceKind::Pawn),
            _ => None,
        }
    }
}

/// Chess piece, i.e. a color together with a kind
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    color: Color,
    kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Piece {
        Piece { color, kind }
    }

    pub const fn color(&self) -> Color {
        self.color
    }

    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    /// FEN letter: upper case for White, lower case for Black
    pub fn as_char(&self) -> char {
        match self.color {
            Color::White => self.kind.as_char(),
            Color::Black => self.kind.as_char().to_ascii_lowercase(),
        }
    }

    pub fn as_utf8_char(&self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::King) => '♔',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::Black, PieceKind::King) => '♚',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Pawn) => '♟',
        }
    }

    /// Two-letter code such as `wK` or `bP`
    pub fn code(&self) -> [char; 2] {
        [self.color.as_char(), self.kind.as_char()]
    }

    pub fn from_char(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(color, PieceKind::from_char(c)?))
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Piece {
    type Err = PieceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Piece::from_char(ch).ok_or(PieceParseError::UnexpectedChar(ch)),
            _ => Err(PieceParseError::BadLength),
        }
    }
}
