//! Movement rules of each piece kind and the move validator built on top of
//! them.
//!
//! The rules are purely geometric: they do not look at the squares a sliding
//! piece passes through and know nothing about checks. Castling, en passant
//! and promotion are not supported. The only occupancy the rules consult is the
//! one pawns need: pushes require empty squares and diagonal steps require an
//! opponent piece to capture.

use crate::chess::board::Board;
use crate::chess::core::{Piece, PieceKind, Square};

impl Piece {
    /// Returns whether the piece may move to `target` on given board.
    ///
    /// ```
    /// use twochess::chess::board::Board;
    /// use twochess::chess::core::Square;
    ///
    /// let board = Board::starting();
    /// let knight = board.at(Square::try_from("g1").unwrap()).unwrap();
    /// assert!(knight.is_valid_move(Square::try_from("f3").unwrap(), &board));
    /// assert!(!knight.is_valid_move(Square::try_from("g3").unwrap(), &board));
    /// ```
    #[must_use]
    pub fn is_valid_move(&self, target: Square, board: &Board) -> bool {
        let (rows, cols) = self.square().delta(target);
        match self.kind {
            PieceKind::Pawn => self.is_valid_pawn_move(target, board),
            PieceKind::Knight => matches!((rows.abs(), cols.abs()), (2, 1) | (1, 2)),
            PieceKind::Bishop => diagonal(rows, cols),
            PieceKind::Rook => straight(rows, cols),
            PieceKind::Queen => straight(rows, cols) || diagonal(rows, cols),
            PieceKind::King => rows.abs() <= 1 && cols.abs() <= 1,
        }
    }

    fn is_valid_pawn_move(&self, target: Square, board: &Board) -> bool {
        let direction = self.owner.push_direction();
        let (rows, cols) = self.square().delta(target);
        match cols {
            0 if rows == direction => board.at(target).is_none(),
            0 if rows == 2 * direction && self.row() == self.owner.pawn_home_row() => {
                let Some(skipped) = self.square().offset(direction, 0) else {
                    return false;
                };
                board.at(skipped).is_none() && board.at(target).is_none()
            },
            -1 | 1 if rows == direction => board
                .at(target)
                .is_some_and(|victim| victim.owner != self.owner),
            _ => false,
        }
    }
}

const fn straight(rows: i16, cols: i16) -> bool {
    rows == 0 || cols == 0
}

const fn diagonal(rows: i16, cols: i16) -> bool {
    rows.abs() == cols.abs()
}

/// Decides whether `piece` may be moved to `target`. Only the movement rules
/// of the piece are checked: whose turn it is and whether `target` holds a
/// piece of the same owner is the caller's business.
#[must_use]
pub fn validate(piece: &Piece, target: Square, board: &Board) -> bool {
    piece.is_valid_move(target, board)
}

/// Lists the squares a click would move `piece` to: the ones [`validate`]
/// accepts, except for its own square and squares occupied by pieces of the
/// same owner (clicking those selects another piece instead).
#[must_use]
pub fn targets(piece: &Piece, board: &Board) -> Vec<Square> {
    Square::iter()
        .filter(|&square| square != piece.square())
        .filter(|&square| {
            board
                .at(square)
                .map_or(true, |occupant| occupant.owner != piece.owner)
        })
        .filter(|&square| validate(piece, square, board))
        .collect()
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::chess::core::Player;

    fn square(input: &str) -> Square {
        Square::try_from(input).unwrap()
    }

    /// Puts a single piece on an otherwise empty board.
    fn alone(kind: PieceKind, owner: Player, at: &str) -> (Piece, Board) {
        let mut board = Board::empty();
        board.put(kind, owner, square(at));
        let piece = *board.at(square(at)).unwrap();
        (piece, board)
    }

    fn valid_moves(piece: &Piece, board: &Board) -> Vec<String> {
        Square::iter()
            .filter(|&target| piece.is_valid_move(target, board))
            .map(|target| target.to_string())
            .sorted()
            .collect()
    }

    fn sorted_squares(squares: &[&str]) -> Vec<String> {
        squares
            .iter()
            .map(|s| (*s).to_string())
            .sorted()
            .collect()
    }

    #[test]
    fn rook() {
        let (rook, board) = alone(PieceKind::Rook, Player::White, "a8");
        assert!(rook.is_valid_move(Square::new(0, 7).unwrap(), &board));
        assert!(rook.is_valid_move(Square::new(7, 0).unwrap(), &board));
        assert!(!rook.is_valid_move(Square::new(1, 2).unwrap(), &board));
        assert_eq!(
            valid_moves(&rook, &board),
            sorted_squares(&[
                "a8", "b8", "c8", "d8", "e8", "f8", "g8", "h8", "a7", "a6", "a5", "a4", "a3", "a2",
                "a1",
            ])
        );
    }

    #[test]
    fn bishop() {
        let (bishop, board) = alone(PieceKind::Bishop, Player::Black, "d4");
        assert_eq!(
            valid_moves(&bishop, &board),
            sorted_squares(&[
                "d4", "a1", "b2", "c3", "e5", "f6", "g7", "h8", "a7", "b6", "c5", "e3", "f2", "g1",
            ])
        );
    }

    #[test]
    fn queen() {
        let (queen, board) = alone(PieceKind::Queen, Player::White, "d4");
        let (rook, _) = alone(PieceKind::Rook, Player::White, "d4");
        let (bishop, _) = alone(PieceKind::Bishop, Player::White, "d4");
        for target in Square::iter() {
            assert_eq!(
                queen.is_valid_move(target, &board),
                rook.is_valid_move(target, &board) || bishop.is_valid_move(target, &board),
                "{target}"
            );
        }
        assert_eq!(valid_moves(&queen, &board).len(), 28);
    }

    #[test]
    fn knight() {
        let (knight, board) = alone(PieceKind::Knight, Player::White, "d4");
        assert_eq!(
            valid_moves(&knight, &board),
            sorted_squares(&["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"])
        );
        let (knight, board) = alone(PieceKind::Knight, Player::Black, "a8");
        assert_eq!(valid_moves(&knight, &board), sorted_squares(&["b6", "c7"]));
    }

    #[test]
    fn king() {
        let (king, board) = alone(PieceKind::King, Player::Black, "e5");
        assert_eq!(
            valid_moves(&king, &board),
            sorted_squares(&["d4", "d5", "d6", "e4", "e5", "e6", "f4", "f5", "f6"])
        );
        let (king, board) = alone(PieceKind::King, Player::White, "h1");
        assert_eq!(
            valid_moves(&king, &board),
            sorted_squares(&["g1", "g2", "h1", "h2"])
        );
    }

    #[test]
    fn pawn_pushes() {
        let (pawn, board) = alone(PieceKind::Pawn, Player::White, "e2");
        assert_eq!(valid_moves(&pawn, &board), sorted_squares(&["e3", "e4"]));
        let (pawn, board) = alone(PieceKind::Pawn, Player::Black, "e7");
        assert_eq!(valid_moves(&pawn, &board), sorted_squares(&["e6", "e5"]));

        // Away from the home row there is no double push.
        let (pawn, board) = alone(PieceKind::Pawn, Player::White, "e4");
        assert_eq!(valid_moves(&pawn, &board), sorted_squares(&["e5"]));
        let (pawn, board) = alone(PieceKind::Pawn, Player::Black, "c5");
        assert_eq!(valid_moves(&pawn, &board), sorted_squares(&["c4"]));

        // Pawns never move backwards.
        let (pawn, board) = alone(PieceKind::Pawn, Player::White, "a1");
        assert_eq!(valid_moves(&pawn, &board), sorted_squares(&["a2"]));
        let (pawn, board) = alone(PieceKind::Pawn, Player::White, "a8");
        assert!(valid_moves(&pawn, &board).is_empty());
    }

    #[test]
    fn pawn_blocked() {
        let mut board = Board::try_from("8/8/8/8/8/4n3/4P3/8").unwrap();
        let pawn = *board.at(square("e2")).unwrap();
        // Occupied by an opponent directly ahead: neither push is possible.
        assert!(valid_moves(&pawn, &board).is_empty());

        // Friendly blocker ahead.
        let _ = board.clear(square("e3"));
        board.put(PieceKind::Knight, Player::White, square("e3"));
        assert!(valid_moves(&pawn, &board).is_empty());

        // Only the destination of the double push is occupied.
        let _ = board.clear(square("e3"));
        board.put(PieceKind::Bishop, Player::Black, square("e4"));
        assert_eq!(valid_moves(&pawn, &board), sorted_squares(&["e3"]));
    }

    #[test]
    fn pawn_captures() {
        let board = Board::try_from("8/8/8/8/8/3p1P2/4P3/8").unwrap();
        let pawn = *board.at(square("e2")).unwrap();
        // d3 holds an opponent, f3 holds a friend.
        assert_eq!(
            valid_moves(&pawn, &board),
            sorted_squares(&["d3", "e3", "e4"])
        );

        let black = *board.at(square("d3")).unwrap();
        assert!(black.is_valid_move(square("e2"), &board));
        assert!(black.is_valid_move(square("d2"), &board));
        assert!(!black.is_valid_move(square("c2"), &board));
        // Diagonal step backwards is never a capture.
        assert!(!pawn.is_valid_move(square("f1"), &board));
    }

    #[test]
    fn sliding_pieces_jump() {
        let board = Board::starting();
        let rook = *board.at(square("a1")).unwrap();
        let bishop = *board.at(square("c1")).unwrap();
        let queen = *board.at(square("d1")).unwrap();
        assert!(rook.is_valid_move(square("a5"), &board));
        assert!(rook.is_valid_move(square("a7"), &board));
        assert!(bishop.is_valid_move(square("h6"), &board));
        assert!(queen.is_valid_move(square("d8"), &board));
        assert!(queen.is_valid_move(square("h5"), &board));
    }

    #[test]
    fn validator_delegates() {
        let board = Board::starting();
        for piece in board.pieces() {
            for target in Square::iter() {
                assert_eq!(
                    validate(piece, target, &board),
                    piece.is_valid_move(target, &board)
                );
            }
        }
    }

    #[test]
    fn click_targets() {
        let board = Board::starting();
        let rook = *board.at(square("a1")).unwrap();
        assert_eq!(
            targets(&rook, &board)
                .iter()
                .map(Square::to_string)
                .sorted()
                .collect::<Vec<_>>(),
            sorted_squares(&["a3", "a4", "a5", "a6", "a7", "a8"])
        );
        let knight = *board.at(square("g8")).unwrap();
        assert_eq!(
            targets(&knight, &board),
            vec![square("f6"), square("h6")]
        );
        let king = *board.at(square("e1")).unwrap();
        assert!(targets(&king, &board).is_empty());
    }
}
