//! Errors reported by the rules engine

use crate::moves::Move;
use crate::types::{Color, Position};

use thiserror::Error;

/// The board is in a state the rules engine cannot reason about
///
/// These errors indicate a malformed board (typically one built by hand and installed with
/// [`Game::set_board()`](crate::Game::set_board)) rather than a mistake in play. Any answer about
/// check, checkmate or stalemate would be meaningless on such a board, so they are only ever
/// propagated, never recovered from.
#[derive(Debug, Copy, Clone, Error, Eq, PartialEq)]
pub enum InvariantError {
    /// Side has no king, though check detection needs one
    #[error("no king of color {0} on the board")]
    NoKing(Color),
    /// Move was applied from an empty square
    #[error("no piece to move at {0}")]
    EmptySource(Position),
}

/// Error returned by [`Game::make_move()`](crate::Game::make_move)
///
/// Both [`MoveError::NotLegal`] and [`MoveError::WrongTurn`] mean the move was rejected and the
/// game is left exactly as it was.
#[derive(Debug, Copy, Clone, Error, Eq, PartialEq)]
pub enum MoveError {
    /// Move is not among the legal moves from its source square
    #[error("move {0} is not legal")]
    NotLegal(Move),
    /// Move is legal for the piece, but the piece belongs to the side not on move
    #[error("move {0} is made out of turn")]
    WrongTurn(Move),
    /// Board is malformed
    #[error("malformed board: {0}")]
    Invariant(#[from] InvariantError),
}

impl MoveError {
    /// Returns the rejected move, if the error is a rejection rather than a malformed board
    pub fn illegal_move(&self) -> Option<Move> {
        match *self {
            MoveError::NotLegal(mv) | MoveError::WrongTurn(mv) => Some(mv),
            MoveError::Invariant(_) => None,
        }
    }
}
