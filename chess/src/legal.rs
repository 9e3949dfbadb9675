//! Legality filter
//!
//! A pseudo-legal move is legal if, after it is made, the king of the moving side is not
//! attacked. Each candidate is checked by making it on a scratch copy of the board, so the board
//! passed in is never modified.

use crate::board::Board;
use crate::error::InvariantError;
use crate::movegen::{self, MaybeMovePush, MovePush};
use crate::moves::Move;
use crate::types::{Color, Position};

use log::trace;

/// Checks whether `mv`, made by `side`, does not leave the king of `side` attacked
///
/// The move itself is not validated: it is simply applied to a copy of `b`. Returns an error if
/// the source square is empty, or if there is no king of color `side` after the move.
pub fn is_safe(b: &Board, mv: Move, side: Color) -> Result<bool, InvariantError> {
    let mut scratch = b.clone();
    scratch.apply_move(mv)?;
    #[cfg(feature = "selftest")]
    selftest::check_applied(b, &scratch, mv);
    let king = scratch.king_pos(side).ok_or(InvariantError::NoKing(side))?;
    Ok(!movegen::is_attacked(&scratch, king, side.inv()))
}

enum Stop<E> {
    Invariant(InvariantError),
    Inner(E),
}

struct LegalFilter<'a, P> {
    board: &'a Board,
    side: Color,
    inner: &'a mut P,
}

impl<'a, P: MaybeMovePush> MaybeMovePush for LegalFilter<'a, P> {
    type Err = Stop<P::Err>;

    fn push(&mut self, mv: Move) -> Result<(), Self::Err> {
        match is_safe(self.board, mv, self.side).map_err(Stop::Invariant)? {
            true => self.inner.push(mv).map_err(Stop::Inner),
            false => {
                trace!("move {} dropped: leaves the {} king attacked", mv, self.side);
                Ok(())
            }
        }
    }
}

fn do_gen<P: MaybeMovePush>(b: &Board, src: Position, dst: &mut P) -> Result<(), Stop<P::Err>> {
    let side = match src.is_valid().then(|| b.get(src)).flatten() {
        Some(piece) => piece.color(),
        None => return Ok(()),
    };
    let mut filter = LegalFilter {
        board: b,
        side,
        inner: dst,
    };
    movegen::gen_into(b, src, &mut filter)
}

/// Generates legal moves of the piece on `src` into `dst`
///
/// Nothing is generated if `src` is empty or off the board.
pub fn gen_into<P: MovePush>(b: &Board, src: Position, dst: &mut P) -> Result<(), InvariantError> {
    match do_gen(b, src, dst) {
        Ok(()) => Ok(()),
        Err(Stop::Invariant(e)) => Err(e),
        Err(Stop::Inner(e)) => match e {},
    }
}

/// Returns legal moves of the piece on `src`
pub fn gen_from(b: &Board, src: Position) -> Result<movegen::MoveList, InvariantError> {
    let mut res = movegen::MoveList::new();
    gen_into(b, src, &mut res)?;
    Ok(res)
}

/// Returns legal moves of all the pieces of color `side`
///
/// Moves are grouped by source square, in the order of [`Board::pieces_of()`].
pub fn gen_all(b: &Board, side: Color) -> Result<Vec<Move>, InvariantError> {
    let mut res = Vec::new();
    for src in b.pieces_of(side) {
        gen_into(b, src, &mut res)?;
    }
    Ok(res)
}

struct ErrOnFirst;

impl MaybeMovePush for ErrOnFirst {
    type Err = ();

    fn push(&mut self, _mv: Move) -> Result<(), ()> {
        Err(())
    }
}

/// Returns `true` if `side` has at least one legal move
///
/// Stops as soon as the first legal move is found.
pub fn has_legal_moves(b: &Board, side: Color) -> Result<bool, InvariantError> {
    for src in b.pieces_of(side) {
        match do_gen(b, src, &mut ErrOnFirst) {
            Ok(()) => {}
            Err(Stop::Inner(())) => return Ok(true),
            Err(Stop::Invariant(e)) => return Err(e),
        }
    }
    Ok(false)
}

#[cfg(feature = "selftest")]
mod selftest {
    use crate::board::Board;
    use crate::moves::Move;
    use crate::types::Color;

    pub fn check_applied(before: &Board, after: &Board, mv: Move) {
        let captured = before.get(mv.dst()).is_some();
        assert_eq!(
            after.count() + usize::from(captured),
            before.count(),
            "piece count mismatch after {}",
            mv
        );
        assert!(after.get(mv.src()).is_none());
        let mover = before.get(mv.src()).map(|p| p.color());
        assert_eq!(after.get(mv.dst()).map(|p| p.color()), mover);
        for c in Color::iter() {
            assert!(after.pieces_of(c).len() <= before.pieces_of(c).len());
        }
    }
}
