//! Material evaluation
//!
//! Evaluates the material balance of a position by counting piece values,
//! from the point of view of the side the agent plays.

use crate::constants::*;
use crate::types::*;

/// Fixed material value of a piece type
pub fn piece_value(kind: PieceKind) -> f64 {
    match kind {
        PieceKind::Pawn => PAWN_VALUE,
        PieceKind::Knight => KNIGHT_VALUE,
        PieceKind::Bishop => BISHOP_VALUE,
        PieceKind::Rook => ROOK_VALUE,
        PieceKind::Queen => QUEEN_VALUE,
        PieceKind::King => KING_VALUE,
    }
}

/// Evaluate material balance
///
/// Pieces of `tracked` count positive, the opponent's count negative.
pub fn evaluate_material<I>(pieces: I, tracked: Side) -> f64
where
    I: IntoIterator<Item = PlacedPiece>,
{
    let mut score = 0.0;

    for piece in pieces {
        let value = piece_value(piece.kind);
        if piece.side == tracked {
            score += value;
        } else {
            score -= value;
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn starting_pieces() -> Vec<PlacedPiece> {
        let mut pieces = Vec::new();
        for side in [Side::White, Side::Black] {
            pieces.extend(std::iter::repeat(PlacedPiece::new(side, PieceKind::Pawn)).take(8));
            for kind in [PieceKind::Knight, PieceKind::Bishop, PieceKind::Rook] {
                pieces.push(PlacedPiece::new(side, kind));
                pieces.push(PlacedPiece::new(side, kind));
            }
            pieces.push(PlacedPiece::new(side, PieceKind::Queen));
            pieces.push(PlacedPiece::new(side, PieceKind::King));
        }
        pieces
    }

    #[test]
    fn test_starting_position_material_balance() {
        let score = evaluate_material(starting_pieces(), Side::Black);
        assert_eq!(score, 0.0, "Starting position should have 0 material balance");
    }

    #[test]
    fn test_tracked_side_up_queen() {
        let pieces: Vec<_> = starting_pieces()
            .into_iter()
            .filter(|p| !(p.side == Side::White && p.kind == PieceKind::Queen))
            .collect();

        assert_eq!(evaluate_material(pieces.clone(), Side::Black), QUEEN_VALUE);
        assert_eq!(evaluate_material(pieces, Side::White), -QUEEN_VALUE);
    }

    #[test]
    fn test_piece_values() {
        assert_eq!(piece_value(PieceKind::Pawn), 10.0);
        assert_eq!(piece_value(PieceKind::Knight), 30.0);
        assert_eq!(piece_value(PieceKind::Bishop), 30.0);
        assert_eq!(piece_value(PieceKind::Rook), 50.0);
        assert_eq!(piece_value(PieceKind::Queen), 90.0);
        assert_eq!(piece_value(PieceKind::King), 900.0);
    }

    #[test]
    fn test_lone_king_counts_full_value() {
        //! The king is scored like any other piece
        let pieces = [PlacedPiece::new(Side::White, PieceKind::King)];
        assert_eq!(evaluate_material(pieces, Side::Black), -900.0);
    }

    #[test]
    fn test_empty_board_material() {
        let score = evaluate_material(Vec::new(), Side::White);
        assert_eq!(score, 0.0, "Empty board should have 0 material");
    }
}
