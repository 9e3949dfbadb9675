//! # Rookline
//!
//! Chess rules engine on a plain 8x8 mailbox board: pseudo-legal move generation, a legality
//! filter which keeps the own king safe, and check, checkmate and stalemate detection.
//!
//! Castling and en passant are not supported.
//!
//! # Example
//!
//! ```
//! use rookline::{Color, Game, Position};
//!
//! let mut game = Game::new();
//! let moves = game.legal_moves(Position::new(2, 5)).unwrap();
//! assert_eq!(moves.len(), 2);
//!
//! game.make_move("e2e4".parse().unwrap()).unwrap();
//! assert_eq!(game.turn(), Color::Black);
//! assert!(!game.is_in_check(Color::Black).unwrap());
//! ```

pub mod board;
pub mod error;
pub mod game;
pub mod legal;
pub mod movegen;
pub mod moves;

pub use rookline_base::{bitboard, geometry, types};

pub use bitboard::Bitboard;
pub use board::Board;
pub use error::{InvariantError, MoveError};
pub use game::{Game, Outcome};
pub use movegen::MoveList;
pub use moves::{Move, PromoteKind};
pub use types::{Color, Piece, PieceKind, Position};
