//! Moves and promotions

use crate::types::{PieceKind, Position, PositionParseError};

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Target piece for promotion
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PromoteKind {
    Queen = 1,
    Rook = 2,
    Bishop = 3,
    Knight = 4,
}

impl PromoteKind {
    /// All the promotion targets, in the order move generation emits them
    pub const ALL: [PromoteKind; 4] = [
        PromoteKind::Queen,
        PromoteKind::Rook,
        PromoteKind::Bishop,
        PromoteKind::Knight,
    ];

    pub fn as_char(&self) -> char {
        PieceKind::from(*self).as_char().to_ascii_lowercase()
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'q' => Some(PromoteKind::Queen),
            'r' => Some(PromoteKind::Rook),
            'b' => Some(PromoteKind::Bishop),
            'n' => Some(PromoteKind::Knight),
            _ => None,
        }
    }
}

impl From<PromoteKind> for PieceKind {
    #[inline]
    fn from(p: PromoteKind) -> Self {
        match p {
            PromoteKind::Queen => PieceKind::Queen,
            PromoteKind::Rook => PieceKind::Rook,
            PromoteKind::Bishop => PieceKind::Bishop,
            PromoteKind::Knight => PieceKind::Knight,
        }
    }
}

impl TryFrom<PieceKind> for PromoteKind {
    type Error = ();

    #[inline]
    fn try_from(p: PieceKind) -> Result<Self, Self::Error> {
        match p {
            PieceKind::Queen => Ok(PromoteKind::Queen),
            PieceKind::Rook => Ok(PromoteKind::Rook),
            PieceKind::Bishop => Ok(PromoteKind::Bishop),
            PieceKind::Knight => Ok(PromoteKind::Knight),
            PieceKind::King | PieceKind::Pawn => Err(()),
        }
    }
}

/// Chess move
///
/// A move is a plain value: source square, destination square and, for pawns reaching the last
/// rank, the promotion target. It carries no information about the position it is made in, so
/// two moves are equal iff all three parts are equal. Whether a move is pseudo-legal or legal is
/// decided by [`movegen`](crate::movegen) and [`legal`](crate::legal) against a concrete board.
///
/// # Example
///
/// ```
/// # use rookline::{Move, Position, PromoteKind};
/// #
/// let mv: Move = "e7e8q".parse().unwrap();
/// assert_eq!(mv.src(), Position::new(7, 5));
/// assert_eq!(mv.dst(), Position::new(8, 5));
/// assert_eq!(mv.promote(), Some(PromoteKind::Queen));
/// assert_eq!(mv.to_string(), "e7e8q");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Move {
    src: Position,
    dst: Position,
    promote: Option<PromoteKind>,
}

/// Error parsing [`Move`] from its UCI-style text form
#[derive(Debug, Copy, Clone, Error, Eq, PartialEq)]
pub enum MoveParseError {
    /// String is neither 4 nor 5 characters long
    #[error("bad string length")]
    BadLength,
    /// Source square cannot be parsed
    #[error("bad source: {0}")]
    BadSrc(PositionParseError),
    /// Destination square cannot be parsed
    #[error("bad destination: {0}")]
    BadDst(PositionParseError),
    /// Promotion letter is not one of `q`, `r`, `b`, `n`
    #[error("bad promote char {0:?}")]
    BadPromote(char),
}

impl Move {
    /// Creates a non-promoting move
    #[inline]
    pub const fn new(src: Position, dst: Position) -> Move {
        Move {
            src,
            dst,
            promote: None,
        }
    }

    /// Creates a pawn move promoting to `promote`
    #[inline]
    pub const fn with_promote(src: Position, dst: Position, promote: PromoteKind) -> Move {
        Move {
            src,
            dst,
            promote: Some(promote),
        }
    }

    #[inline]
    pub const fn src(&self) -> Position {
        self.src
    }

    #[inline]
    pub const fn dst(&self) -> Position {
        self.dst
    }

    #[inline]
    pub const fn promote(&self) -> Option<PromoteKind> {
        self.promote
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}{}", self.src, self.dst)?;
        if let Some(p) = self.promote {
            write!(f, "{}", p.as_char())?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Move, Self::Err> {
        if !matches!(s.len(), 4 | 5) || !s.is_ascii() {
            return Err(MoveParseError::BadLength);
        }
        let src = Position::from_str(&s[0..2]).map_err(MoveParseError::BadSrc)?;
        let dst = Position::from_str(&s[2..4]).map_err(MoveParseError::BadDst)?;
        let promote = match s[4..].chars().next() {
            Some(c) => Some(PromoteKind::from_char(c).ok_or(MoveParseError::BadPromote(c))?),
            None => None,
        };
        Ok(Move { src, dst, promote })
    }
}
