//! Board and related things

use crate::bitboard::Bitboard;
use crate::error::InvariantError;
use crate::moves::Move;
use crate::types::{Color, Piece, PieceKind, Position};

use std::fmt::{self, Display};
use std::str::FromStr;

use thiserror::Error;

/// Error parsing the piece placement part of FEN
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum PlacementParseError {
    /// Row is too large
    #[error("too many items in row {0}")]
    RowOverflow(i8),
    /// Row is too small
    #[error("not enough items in row {0}")]
    RowUnderflow(i8),
    /// Too many rows
    #[error("too many rows")]
    Overflow,
    /// Not enough rows
    #[error("not enough rows")]
    Underflow,
    /// Unexpected character
    #[error("unexpected char {0:?}")]
    UnexpectedChar(char),
}

const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Chess board
///
/// The board is an 8x8 grid where every square is either empty or holds one [`Piece`]. It is
/// not validated: any arrangement of pieces can be stored, including ones without kings. The
/// rules themselves live in [`movegen`](crate::movegen), [`legal`](crate::legal) and
/// [`Game`](crate::Game).
///
/// Cloning a board produces a fully independent snapshot.
///
/// All the accessors take [`Position`]s and panic if the position is off the board, as indexing
/// a board with such a position is a bug in the caller.
///
/// # Example
///
/// ```
/// # use rookline::{Board, Color, Piece, PieceKind, Position};
/// #
/// let mut board = Board::empty();
/// board.put(Position::new(2, 2), Piece::new(Color::White, PieceKind::King));
/// board.put(Position::new(5, 4), Piece::new(Color::Black, PieceKind::King));
/// assert_eq!(board.to_string(), "8/8/8/3k4/8/8/1K6/8");
/// assert_eq!(board.king_pos(Color::Black), Some(Position::new(5, 4)));
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [Option<Piece>; 64],
}

impl Board {
    /// Returns a board without any pieces
    ///
    /// Does the same as [`Board::default()`], except that this function is `const`.
    #[inline]
    pub const fn empty() -> Board {
        Board { cells: [None; 64] }
    }

    /// Returns a board with the initial position
    pub fn initial() -> Board {
        let mut res = Board::empty();
        res.reset();
        res
    }

    /// Puts the pieces into the initial position, removing everything else
    pub fn reset(&mut self) {
        self.cells = [None; 64];
        for col in 1..=8 {
            self.put(Position::new(2, col), Piece::new(Color::White, PieceKind::Pawn));
            self.put(Position::new(7, col), Piece::new(Color::Black, PieceKind::Pawn));
        }
        for (color, row) in [(Color::White, 1), (Color::Black, 8)] {
            for (col, kind) in (1..=8).zip(BACK_ROW) {
                self.put(Position::new(row, col), Piece::new(color, kind));
            }
        }
    }

    /// Parses the piece placement part of FEN
    ///
    /// Does the same as [`Board::from_str`]. It is recommended to use this function instead of
    /// `from_str()` for better readability.
    #[inline]
    pub fn from_placement(s: &str) -> Result<Board, PlacementParseError> {
        Board::from_str(s)
    }

    /// Returns the contents of the square `pos`
    #[inline]
    pub fn get(&self, pos: Position) -> Option<Piece> {
        self.cells[pos.index()]
    }

    /// Puts `piece` to the square `pos`, replacing the previous occupant
    #[inline]
    pub fn put(&mut self, pos: Position, piece: Piece) {
        self.cells[pos.index()] = Some(piece);
    }

    /// Removes and returns the occupant of the square `pos`
    #[inline]
    pub fn take(&mut self, pos: Position) -> Option<Piece> {
        self.cells[pos.index()].take()
    }

    /// Makes the square `pos` empty
    #[inline]
    pub fn clear(&mut self, pos: Position) {
        self.cells[pos.index()] = None;
    }

    /// Returns the squares occupied by pieces of color `c`
    pub fn pieces_of(&self, c: Color) -> Bitboard {
        Position::iter()
            .filter(|&pos| self.get(pos).map(|p| p.color()) == Some(c))
            .collect()
    }

    /// Returns the total number of pieces on the board
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Returns the position of the king of color `c`
    ///
    /// If there are several such kings, the one on the lowest square is returned.
    pub fn king_pos(&self, c: Color) -> Option<Position> {
        let king = Piece::new(c, PieceKind::King);
        Position::iter().find(|&pos| self.get(pos) == Some(king))
    }

    /// Moves the piece from `mv.src()` to `mv.dst()`
    ///
    /// Whatever stood on the destination square is captured and returned. If the move carries a
    /// promotion, the moved piece is replaced by the promoted one of the same color. The move is
    /// not checked against the rules of chess.
    pub fn apply_move(&mut self, mv: Move) -> Result<Option<Piece>, InvariantError> {
        let piece = self
            .take(mv.src())
            .ok_or(InvariantError::EmptySource(mv.src()))?;
        let piece = match mv.promote() {
            Some(p) => Piece::new(piece.color(), p.into()),
            None => piece,
        };
        let captured = self.get(mv.dst());
        self.put(mv.dst(), piece);
        Ok(captured)
    }

    /// Wraps the board to allow pretty-printing with the given style `Style`
    ///
    /// The resulting wrapper implements [`fmt::Display`], so can be used with
    /// `write!()`, `println!()`, or `ToString::to_string`.
    ///
    /// # Example
    ///
    /// ```
    /// # use rookline::{Board, board::PrettyStyle};
    /// #
    /// let b = Board::initial();
    ///
    /// let res = r#"
    /// 8|bR|bN|bB|bQ|bK|bB|bN|bR|
    /// 7|bP|bP|bP|bP|bP|bP|bP|bP|
    /// 6|  |  |  |  |  |  |  |  |
    /// 5|  |  |  |  |  |  |  |  |
    /// 4|  |  |  |  |  |  |  |  |
    /// 3|  |  |  |  |  |  |  |  |
    /// 2|wP|wP|wP|wP|wP|wP|wP|wP|
    /// 1|wR|wN|wB|wQ|wK|wB|wN|wR|
    /// -+--+--+--+--+--+--+--+--+
    ///  |a |b |c |d |e |f |g |h |
    /// "#;
    /// assert_eq!(b.pretty(PrettyStyle::Ascii).to_string().trim(), res.trim());
    /// ```
    #[inline]
    pub fn pretty(&self, style: PrettyStyle) -> Pretty<'_> {
        Pretty { board: self, style }
    }
}

impl Default for Board {
    #[inline]
    fn default() -> Board {
        Board::empty()
    }
}

/// Style for [`Board::pretty()`]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PrettyStyle {
    /// Print pieces as two-letter codes and frames as ASCII characters
    Ascii,
    /// Print pieces and frames as fancy Unicode characters
    Utf8,
}

/// Wrapper to pretty-print the board
///
/// See docs for [`Board::pretty()`] for more details.
pub struct Pretty<'a> {
    board: &'a Board,
    style: PrettyStyle,
}

impl FromStr for Board {
    type Err = PlacementParseError;

    fn from_str(s: &str) -> Result<Board, Self::Err> {
        type Error = PlacementParseError;

        let mut res = Board::empty();
        let mut row = 8_i8;
        let mut col = 1_i8;
        for ch in s.chars() {
            match ch {
                '1'..='8' => {
                    let add = (u32::from(ch) - u32::from('0')) as i8;
                    if col + add > 9 {
                        return Err(Error::RowOverflow(row));
                    }
                    col += add;
                }
                '/' => {
                    if col <= 8 {
                        return Err(Error::RowUnderflow(row));
                    }
                    row -= 1;
                    col = 1;
                    if row < 1 {
                        return Err(Error::Overflow);
                    }
                }
                _ => {
                    if col > 8 {
                        return Err(Error::RowOverflow(row));
                    }
                    let piece = Piece::from_char(ch).ok_or(Error::UnexpectedChar(ch))?;
                    res.put(Position::new(row, col), piece);
                    col += 1;
                }
            };
        }

        if col <= 8 {
            return Err(Error::RowUnderflow(row));
        }
        if row > 1 {
            return Err(Error::Underflow);
        }

        Ok(res)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for row in (1..=8).rev() {
            if row != 8 {
                write!(f, "/")?;
            }
            let mut empty = 0;
            for col in 1..=8 {
                let piece = match self.get(Position::new(row, col)) {
                    Some(piece) => piece,
                    None => {
                        empty += 1;
                        continue;
                    }
                };
                if empty != 0 {
                    write!(f, "{}", empty)?;
                    empty = 0;
                }
                write!(f, "{}", piece)?;
            }
            if empty != 0 {
                write!(f, "{}", empty)?;
            }
        }
        Ok(())
    }
}

trait StyleTable {
    const HORZ_FRAME: char;
    const VERT_FRAME: char;
    const ANGLE_FRAME: char;

    fn cell(c: Option<Piece>) -> [char; 2];

    fn fmt(b: &Board, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for row in (1..=8).rev() {
            write!(f, "{}{}", row, Self::VERT_FRAME)?;
            for col in 1..=8 {
                let [c1, c2] = Self::cell(b.get(Position::new(row, col)));
                write!(f, "{}{}{}", c1, c2, Self::VERT_FRAME)?;
            }
            writeln!(f)?;
        }
        write!(f, "{}", Self::HORZ_FRAME)?;
        for _ in 1..=8 {
            write!(f, "{}{}{}", Self::ANGLE_FRAME, Self::HORZ_FRAME, Self::HORZ_FRAME)?;
        }
        writeln!(f, "{}", Self::ANGLE_FRAME)?;
        write!(f, " {}", Self::VERT_FRAME)?;
        for file in 'a'..='h' {
            write!(f, "{} {}", file, Self::VERT_FRAME)?;
        }
        writeln!(f)?;
        Ok(())
    }
}

struct AsciiStyleTable;
struct Utf8StyleTable;

impl StyleTable for AsciiStyleTable {
    const HORZ_FRAME: char = '-';
    const VERT_FRAME: char = '|';
    const ANGLE_FRAME: char = '+';

    fn cell(c: Option<Piece>) -> [char; 2] {
        c.map_or([' ', ' '], |p| p.code())
    }
}

impl StyleTable for Utf8StyleTable {
    const HORZ_FRAME: char = '─';
    const VERT_FRAME: char = '│';
    const ANGLE_FRAME: char = '┼';

    fn cell(c: Option<Piece>) -> [char; 2] {
        c.map_or([' ', ' '], |p| [p.as_utf8_char(), ' '])
    }
}

impl<'a> Display for Pretty<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self.style {
            PrettyStyle::Ascii => AsciiStyleTable::fmt(self.board, f),
            PrettyStyle::Utf8 => Utf8StyleTable::fmt(self.board, f),
        }
    }
}
