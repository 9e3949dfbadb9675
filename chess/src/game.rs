//! Game state: the board together with the side to move

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::error::{InvariantError, MoveError};
use crate::legal;
use crate::movegen::{self, MoveList};
use crate::moves::Move;
use crate::types::{Color, Position};

use std::fmt;

use log::debug;

/// Final result of the game, derived from the position
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Side to move is in check and has no legal moves
    Checkmate { winner: Color },
    /// Side to move is not in check and has no legal moves
    Stalemate,
}

impl Outcome {
    pub fn winner(&self) -> Option<Color> {
        match *self {
            Outcome::Checkmate { winner } => Some(winner),
            Outcome::Stalemate => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match *self {
            Outcome::Checkmate { winner } => write!(f, "{} wins by checkmate", winner),
            Outcome::Stalemate => write!(f, "draw by stalemate"),
        }
    }
}

/// Chess game
///
/// Owns the [`Board`] and tracks whose turn it is. The turn alternates on every successful
/// [`Game::make_move()`] and changes in no other way, except through [`Game::set_turn()`].
/// Check, checkmate and stalemate are not stored, but computed from the current position each
/// time they are queried.
///
/// The board may be replaced wholesale with [`Game::set_board()`]. It is not validated, so
/// queries which need to locate a king return [`InvariantError`] if the king is missing.
///
/// # Example
///
/// ```
/// # use rookline::{Color, Game, Move, Outcome};
/// #
/// let mut game = Game::new();
/// for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
///     game.make_move(mv.parse().unwrap()).unwrap();
/// }
/// assert_eq!(game.turn(), Color::White);
/// assert!(game.is_in_check(Color::White).unwrap());
/// assert!(game.is_in_checkmate(Color::White).unwrap());
/// assert_eq!(
///     game.calc_outcome().unwrap(),
///     Some(Outcome::Checkmate { winner: Color::Black })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Game {
    board: Board,
    turn: Color,
}

impl Game {
    /// Creates a game in the initial position, with White to move
    pub fn new() -> Game {
        Game::from_board(Board::initial(), Color::White)
    }

    /// Creates a game from an arbitrary position
    pub fn from_board(board: Board, turn: Color) -> Game {
        Game { board, turn }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replaces the board, keeping the side to move
    pub fn set_board(&mut self, board: Board) {
        debug!("board replaced with {}", board);
        self.board = board;
    }

    /// Returns the side to move
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn set_turn(&mut self, turn: Color) {
        self.turn = turn;
    }

    fn toggle_turn(&mut self) {
        self.turn = self.turn.inv();
    }

    /// Returns legal moves of the piece on `pos`, regardless of whose turn it is
    ///
    /// Returns an empty list if `pos` is empty or off the board.
    pub fn legal_moves(&self, pos: Position) -> Result<MoveList, InvariantError> {
        legal::gen_from(&self.board, pos)
    }

    /// Returns legal moves of all the pieces of color `c`
    pub fn all_legal_moves(&self, c: Color) -> Result<Vec<Move>, InvariantError> {
        legal::gen_all(&self.board, c)
    }

    /// Makes the move `mv` and passes the turn to the other side
    ///
    /// The move must be legal for the piece on `mv.src()`, and this piece must belong to the side
    /// to move. Otherwise, an error is returned and the game is left unchanged.
    pub fn make_move(&mut self, mv: Move) -> Result<(), MoveError> {
        if !self.legal_moves(mv.src())?.contains(&mv) {
            debug!("move {} rejected: not legal", mv);
            return Err(MoveError::NotLegal(mv));
        }
        let color = self
            .board
            .get(mv.src())
            .map(|p| p.color())
            .ok_or(InvariantError::EmptySource(mv.src()))?;
        if color != self.turn {
            debug!("move {} rejected: {} to move", mv, self.turn);
            return Err(MoveError::WrongTurn(mv));
        }
        self.board.apply_move(mv)?;
        self.toggle_turn();
        debug!("move {} applied, {} to move", mv, self.turn);
        Ok(())
    }

    fn king_pos(&self, c: Color) -> Result<Position, InvariantError> {
        self.board.king_pos(c).ok_or(InvariantError::NoKing(c))
    }

    /// Returns `true` if the king of color `c` is attacked
    pub fn is_in_check(&self, c: Color) -> Result<bool, InvariantError> {
        Ok(movegen::is_attacked(&self.board, self.king_pos(c)?, c.inv()))
    }

    /// Returns the pieces which attack the king of color `c`
    pub fn checkers(&self, c: Color) -> Result<Bitboard, InvariantError> {
        Ok(movegen::attackers(&self.board, self.king_pos(c)?, c.inv()))
    }

    /// Returns `true` if side `c` has no legal moves
    ///
    /// This is also the case if `c` has no pieces at all.
    pub fn has_no_legal_moves(&self, c: Color) -> Result<bool, InvariantError> {
        Ok(!legal::has_legal_moves(&self.board, c)?)
    }

    pub fn is_in_checkmate(&self, c: Color) -> Result<bool, InvariantError> {
        Ok(self.has_no_legal_moves(c)? && self.is_in_check(c)?)
    }

    pub fn is_in_stalemate(&self, c: Color) -> Result<bool, InvariantError> {
        Ok(self.has_no_legal_moves(c)? && !self.is_in_check(c)?)
    }

    /// Calculates the outcome of the game for the side to move
    ///
    /// Returns `None` if the side to move still has legal moves.
    pub fn calc_outcome(&self) -> Result<Option<Outcome>, InvariantError> {
        if !self.has_no_legal_moves(self.turn)? {
            return Ok(None);
        }
        Ok(Some(match self.is_in_check(self.turn)? {
            true => Outcome::Checkmate {
                winner: self.turn.inv(),
            },
            false => Outcome::Stalemate,
        }))
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}
