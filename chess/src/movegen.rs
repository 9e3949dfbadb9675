//! Pseudo-legal move generation and attack queries
//!
//! Moves generated here follow the movement rules of each piece and the occupancy of the board,
//! but do not take checks into account. See [`legal`](crate::legal) for the moves which do not
//! leave the own king attacked.

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::geometry::{self, Delta};
use crate::moves::{Move, PromoteKind};
use crate::types::{Color, Piece, PieceKind, Position};

use std::ops::{Deref, DerefMut};
use std::slice;

use arrayvec::ArrayVec;

/// Maximum number of pseudo-legal moves from a single square
///
/// The queen in the middle of an empty board has 27 moves, and a pawn on the seventh row may
/// have up to 12 (three destinations, four promotions each).
pub const MAX_MOVES_PER_SQUARE: usize = 32;

pub(crate) trait MaybeMovePush {
    type Err;

    fn push(&mut self, m: Move) -> Result<(), Self::Err>;
}

/// List of moves from a single square
#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct MoveList(ArrayVec<Move, MAX_MOVES_PER_SQUARE>);

impl Deref for MoveList {
    type Target = ArrayVec<Move, MAX_MOVES_PER_SQUARE>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for MoveList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a mut MoveList {
    type Item = &'a mut Move;
    type IntoIter = slice::IterMut<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter_mut()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = arrayvec::IntoIter<Move, MAX_MOVES_PER_SQUARE>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl MoveList {
    pub fn new() -> MoveList {
        MoveList(ArrayVec::new())
    }
}

/// Sink for generated moves
pub trait MovePush {
    fn push(&mut self, m: Move);
}

impl<const N: usize> MovePush for ArrayVec<Move, N> {
    fn push(&mut self, m: Move) {
        self.push(m);
    }
}

impl MovePush for MoveList {
    fn push(&mut self, m: Move) {
        self.0.push(m);
    }
}

impl MovePush for Vec<Move> {
    fn push(&mut self, m: Move) {
        self.push(m);
    }
}

impl<T: MovePush> MaybeMovePush for T {
    type Err = std::convert::Infallible;

    fn push(&mut self, m: Move) -> Result<(), Self::Err> {
        <Self as MovePush>::push(self, m);
        Ok(())
    }
}

struct MoveGen<'a, P> {
    board: &'a Board,
    src: Position,
    color: Color,
    dst: &'a mut P,
}

impl<'a, P: MaybeMovePush> MoveGen<'a, P> {
    fn can_land(&self, pos: Position) -> bool {
        self.board.get(pos).map_or(true, |p| p.color() != self.color)
    }

    fn add_move(&mut self, dst: Position) -> Result<(), P::Err> {
        self.dst.push(Move::new(self.src, dst))
    }

    fn add_pawn_move(&mut self, dst: Position) -> Result<(), P::Err> {
        if dst.row() != geometry::promote_row(self.color) {
            return self.add_move(dst);
        }
        for p in PromoteKind::ALL {
            self.dst.push(Move::with_promote(self.src, dst, p))?;
        }
        Ok(())
    }

    fn gen_steps(&mut self, deltas: &[Delta]) -> Result<(), P::Err> {
        for &d in deltas {
            if let Some(dst) = self.src.try_shift(d) {
                if self.can_land(dst) {
                    self.add_move(dst)?;
                }
            }
        }
        Ok(())
    }

    fn gen_slides(&mut self, deltas: &[Delta]) -> Result<(), P::Err> {
        for &d in deltas {
            let mut cur = self.src;
            for _ in 0..geometry::MAX_SLIDE {
                cur = match cur.try_shift(d) {
                    Some(pos) => pos,
                    None => break,
                };
                match self.board.get(cur) {
                    None => self.add_move(cur)?,
                    Some(p) if p.color() != self.color => {
                        self.add_move(cur)?;
                        break;
                    }
                    Some(_) => break,
                }
            }
        }
        Ok(())
    }

    fn gen_pawn(&mut self) -> Result<(), P::Err> {
        let fwd = geometry::pawn_forward(self.color);
        if let Some(dst) = self.src.try_shift(fwd) {
            if self.board.get(dst).is_none() {
                self.add_pawn_move(dst)?;
                if self.src.row() == geometry::pawn_row(self.color) {
                    if let Some(dst2) = dst.try_shift(fwd) {
                        if self.board.get(dst2).is_none() {
                            self.add_move(dst2)?;
                        }
                    }
                }
            }
        }
        for d in [
            geometry::pawn_left(self.color),
            geometry::pawn_right(self.color),
        ] {
            if let Some(dst) = self.src.try_shift(d) {
                if matches!(self.board.get(dst), Some(p) if p.color() != self.color) {
                    self.add_pawn_move(dst)?;
                }
            }
        }
        Ok(())
    }

    fn gen_piece(&mut self, kind: PieceKind) -> Result<(), P::Err> {
        match kind {
            PieceKind::King => self.gen_steps(&geometry::ADJACENT),
            PieceKind::Knight => self.gen_steps(&geometry::KNIGHT_JUMPS),
            PieceKind::Rook => self.gen_slides(&geometry::ORTHOGONAL),
            PieceKind::Bishop => self.gen_slides(&geometry::DIAGONAL),
            PieceKind::Queen => self.gen_slides(&geometry::ADJACENT),
            PieceKind::Pawn => self.gen_pawn(),
        }
    }
}

pub(crate) fn gen_into<P: MaybeMovePush>(
    b: &Board,
    src: Position,
    dst: &mut P,
) -> Result<(), P::Err> {
    if !src.is_valid() {
        return Ok(());
    }
    let piece = match b.get(src) {
        Some(piece) => piece,
        None => return Ok(()),
    };
    MoveGen {
        board: b,
        src,
        color: piece.color(),
        dst,
    }
    .gen_piece(piece.kind())
}

/// Generates pseudo-legal moves of the piece on `src` into `dst`
///
/// Nothing is generated if `src` is empty or off the board.
pub fn pseudo_legal_into<P: MovePush>(b: &Board, src: Position, dst: &mut P) {
    match gen_into(b, src, dst) {
        Ok(()) => {}
        Err(e) => match e {},
    }
}

/// Returns pseudo-legal moves of the piece on `src`
///
/// # Example
///
/// ```
/// # use rookline::{Board, movegen};
/// #
/// let b = Board::from_placement("8/8/8/8/8/8/8/R3K2k").unwrap();
/// let moves = movegen::pseudo_legal(&b, "a1".parse().unwrap());
/// assert_eq!(moves.len(), 10);
/// ```
pub fn pseudo_legal(b: &Board, src: Position) -> MoveList {
    let mut res = MoveList::new();
    pseudo_legal_into(b, src, &mut res);
    res
}

fn first_hit(b: &Board, from: Position, d: Delta) -> Option<(Position, Piece)> {
    let mut cur = from;
    for _ in 0..geometry::MAX_SLIDE {
        cur = cur.try_shift(d)?;
        if let Some(p) = b.get(cur) {
            return Some((cur, p));
        }
    }
    None
}

/// Returns the pieces of color `by` which could capture a piece of the opposite color on `target`
///
/// The contents of `target` itself are ignored, i.e. the result is the same as if `target` held
/// a piece of the opposite color. So, a pawn attacks the squares diagonally in front of it, but
/// not the square right in front of it.
pub fn attackers(b: &Board, target: Position, by: Color) -> Bitboard {
    let mut res = Bitboard::EMPTY;
    if !target.is_valid() {
        return res;
    }

    let mut add_near = |deltas: &[Delta], kind: PieceKind| {
        for &d in deltas {
            if let Some(pos) = target.try_shift(d) {
                if b.get(pos) == Some(Piece::new(by, kind)) {
                    res.set(pos);
                }
            }
        }
    };
    // Pawns are traced with the opposite color, as we move from the destination
    add_near(
        &[
            geometry::pawn_left(by.inv()),
            geometry::pawn_right(by.inv()),
        ],
        PieceKind::Pawn,
    );
    add_near(&geometry::KNIGHT_JUMPS, PieceKind::Knight);
    add_near(&geometry::ADJACENT, PieceKind::King);

    for (deltas, kind) in [
        (&geometry::ORTHOGONAL, PieceKind::Rook),
        (&geometry::DIAGONAL, PieceKind::Bishop),
    ] {
        for &d in deltas {
            if let Some((pos, p)) = first_hit(b, target, d) {
                if p.color() == by && (p.kind() == kind || p.kind() == PieceKind::Queen) {
                    res.set(pos);
                }
            }
        }
    }

    res
}

/// Returns `true` if any piece of color `by` could capture a piece of the opposite color
/// standing on `target`
///
/// See [`attackers()`] for details.
pub fn is_attacked(b: &Board, target: Position, by: Color) -> bool {
    attackers(b, target, by).is_nonempty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::str::FromStr;

    fn pos(s: &str) -> Position {
        Position::from_str(s).unwrap()
    }

    fn move_set(b: &Board, src: &str) -> BTreeSet<String> {
        pseudo_legal(b, pos(src))
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    fn str_set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_initial() {
        let b = Board::initial();
        assert_eq!(move_set(&b, "e2"), str_set(&["e2e3", "e2e4"]));
        assert_eq!(move_set(&b, "g1"), str_set(&["g1f3", "g1h3"]));
        assert_eq!(move_set(&b, "b8"), str_set(&["b8a6", "b8c6"]));
        assert_eq!(move_set(&b, "h7"), str_set(&["h7h6", "h7h5"]));
        assert!(move_set(&b, "a1").is_empty());
        assert!(move_set(&b, "d1").is_empty());
        assert!(move_set(&b, "e1").is_empty());
        assert!(move_set(&b, "e4").is_empty());
        assert!(pseudo_legal(&b, Position::new(9, 1)).is_empty());
    }

    #[test]
    fn test_rook_blocking() {
        let b = Board::from_placement("8/8/8/8/8/8/8/8").unwrap();
        assert!(move_set(&b, "a1").is_empty());

        // Own knight two squares to the right, enemy pawn five squares up
        let b = Board::from_placement("8/8/p7/8/8/8/8/R1N5").unwrap();
        assert_eq!(
            move_set(&b, "a1"),
            str_set(&["a1b1", "a1a2", "a1a3", "a1a4", "a1a5", "a1a6"])
        );
    }

    #[test]
    fn test_sliders() {
        let b = Board::from_placement("8/8/8/8/3Q4/8/8/8").unwrap();
        assert_eq!(pseudo_legal(&b, pos("d4")).len(), 27);

        let b = Board::from_placement("8/8/5p2/8/3B4/4P3/8/8").unwrap();
        assert_eq!(
            move_set(&b, "d4"),
            str_set(&["d4e5", "d4f6", "d4c5", "d4b6", "d4a7", "d4c3", "d4b2", "d4a1"])
        );

        let b = Board::from_placement("8/8/8/8/8/8/8/7r").unwrap();
        assert_eq!(pseudo_legal(&b, pos("h1")).len(), 14);
    }

    #[test]
    fn test_steps() {
        let b = Board::from_placement("8/8/8/8/8/8/1P6/K7").unwrap();
        assert_eq!(move_set(&b, "a1"), str_set(&["a1a2", "a1b1"]));

        let b = Board::from_placement("8/8/2p1P3/8/3N4/8/8/8").unwrap();
        assert_eq!(
            move_set(&b, "d4"),
            str_set(&["d4c6", "d4b5", "d4b3", "d4c2", "d4e2", "d4f3", "d4f5"])
        );

        let b = Board::from_placement("8/8/8/8/8/8/8/7n").unwrap();
        assert_eq!(move_set(&b, "h1"), str_set(&["h1g3", "h1f2"]));
    }

    #[test]
    fn test_pawns() {
        let b = Board::from_placement("8/8/8/8/8/2p5/1P6/8").unwrap();
        assert_eq!(move_set(&b, "b2"), str_set(&["b2b3", "b2b4", "b2c3"]));

        let b = Board::from_placement("8/8/8/8/1p6/8/1P6/8").unwrap();
        assert_eq!(move_set(&b, "b2"), str_set(&["b2b3"]));

        let b = Board::from_placement("8/8/8/8/8/1p6/1P6/8").unwrap();
        assert!(move_set(&b, "b2").is_empty());

        let b = Board::from_placement("8/8/8/8/8/8/1P6/8").unwrap();
        assert_eq!(move_set(&b, "b2"), str_set(&["b2b3", "b2b4"]));

        let b = Board::from_placement("8/8/8/8/8/1P6/8/8").unwrap();
        assert_eq!(move_set(&b, "b3"), str_set(&["b3b4"]));

        let b = Board::from_placement("8/p7/1P6/8/8/8/8/8").unwrap();
        assert_eq!(move_set(&b, "a7"), str_set(&["a7a6", "a7a5", "a7b6"]));

        // Own pieces are never captured
        let b = Board::from_placement("8/8/8/8/8/P1P5/1P6/8").unwrap();
        assert_eq!(move_set(&b, "b2"), str_set(&["b2b3", "b2b4"]));
    }

    #[test]
    fn test_promote() {
        let b = Board::from_placement("8/1P6/8/8/8/8/8/8").unwrap();
        assert_eq!(
            move_set(&b, "b7"),
            str_set(&["b7b8q", "b7b8r", "b7b8b", "b7b8n"])
        );

        let b = Board::from_placement("r1n5/1P6/8/8/8/8/8/8").unwrap();
        assert_eq!(pseudo_legal(&b, pos("b7")).len(), 12);

        let b = Board::from_placement("8/8/8/8/8/8/p7/1R6").unwrap();
        assert_eq!(
            move_set(&b, "a2"),
            str_set(&[
                "a2a1q", "a2a1r", "a2a1b", "a2a1n", "a2b1q", "a2b1r", "a2b1b", "a2b1n"
            ])
        );
    }

    #[test]
    fn test_attackers() {
        let b = Board::from_placement("3R3B/8/3R4/1NP1Q3/3p4/1NP5/5B2/3R1K1k").unwrap();
        let d4 = pos("d4");
        let expected = ["d6", "b5", "e5", "b3", "c3", "f2", "d1"]
            .into_iter()
            .map(pos)
            .collect::<Bitboard>();
        assert_eq!(attackers(&b, d4, Color::White), expected);
        assert!(is_attacked(&b, d4, Color::White));
        assert_eq!(attackers(&b, d4, Color::Black), Bitboard::EMPTY);
        assert!(!is_attacked(&b, d4, Color::Black));

        let b = Board::from_placement("8/8/8/2KPk3/8/8/8/8").unwrap();
        assert_eq!(
            attackers(&b, pos("d5"), Color::White),
            Bitboard::from_pos(pos("c5"))
        );
        assert_eq!(
            attackers(&b, pos("d5"), Color::Black),
            Bitboard::from_pos(pos("e5"))
        );
        assert!(!is_attacked(&b, Position::new(0, 3), Color::White));

        let b = Board::from_placement("8/8/8/8/8/8/3P4/8").unwrap();
        assert!(!is_attacked(&b, pos("d3"), Color::White));
        assert!(is_attacked(&b, pos("c3"), Color::White));
        assert!(is_attacked(&b, pos("e3"), Color::White));
        assert!(!is_attacked(&b, pos("e3"), Color::Black));
    }

    #[test]
    fn test_pawn_push_is_not_attack() {
        let b = Board::from_placement("8/8/8/8/8/8/3P4/8").unwrap();
        assert_eq!(move_set(&b, "d2"), str_set(&["d2d3", "d2d4"]));
        for dst in ["d3", "d4"] {
            assert!(!is_attacked(&b, pos(dst), Color::White));
        }
        // Diagonal squares count, even though they are empty and the pawn cannot move there now
        for dst in ["c3", "e3"] {
            assert!(!move_set(&b, "d2").contains(&format!("d2{}", dst)));
            assert!(is_attacked(&b, pos(dst), Color::White));
            assert_eq!(
                attackers(&b, pos(dst), Color::White),
                Bitboard::from_pos(pos("d2"))
            );
        }

        // With an enemy piece on the target, attacks and pseudo-legal captures agree
        let b = Board::from_placement("8/8/8/8/8/4n3/3P4/8").unwrap();
        assert!(move_set(&b, "d2").contains("d2e3"));
        assert!(is_attacked(&b, pos("e3"), Color::White));
    }

    #[test]
    fn test_attackers_match_movegen() {
        for placement in [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8",
            "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R",
            "1N5k/1P6/8/3q4/8/2B5/p7/1R2K3",
        ] {
            let b = Board::from_placement(placement).unwrap();
            for target in Position::iter() {
                for by in Color::iter() {
                    if b.get(target).map(|p| p.color()) != Some(by.inv()) {
                        continue;
                    }
                    let expected = b
                        .pieces_of(by)
                        .into_iter()
                        .filter(|&src| pseudo_legal(&b, src).iter().any(|mv| mv.dst() == target))
                        .collect::<Bitboard>();
                    assert_eq!(
                        attackers(&b, target, by),
                        expected,
                        "placement {}, target {}, by {}",
                        placement,
                        target,
                        by
                    );
                }
            }
        }
    }

    #[test]
    fn test_move_push() {
        let b = Board::initial();
        let mut v = Vec::new();
        pseudo_legal_into(&b, pos("b1"), &mut v);
        pseudo_legal_into(&b, pos("g1"), &mut v);
        assert_eq!(v.len(), 4);

        let mut av = ArrayVec::<Move, 8>::new();
        pseudo_legal_into(&b, pos("d2"), &mut av);
        assert_eq!(av.len(), 2);

        let list = pseudo_legal(&b, pos("a7"));
        assert_eq!(
            list.into_iter().collect::<Vec<_>>(),
            vec![
                Move::new(pos("a7"), pos("a6")),
                Move::new(pos("a7"), pos("a5"))
            ]
        );
    }
}
