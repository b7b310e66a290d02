//! # Rules Engine Boundary
//!
//! The learned agent never generates or validates moves itself. Everything that
//! needs chess rules goes through the [`RulesEngine`] trait:
//!
//! - `parse` - FEN text to a position
//! - `legal_moves` - legal moves of the side to move, as UCI strings
//! - `apply` - the position after a move
//! - `successors` - every legal move with the position it leads to
//! - `pieces` - every occupied square, for material evaluation
//! - `status` - checkmate / stalemate detection when no move exists
//!
//! [`ShakmatyRules`] is the production implementation. Tests provide scripted
//! engines so that ranking can be checked against hand-picked scores.

use crate::error::{BrainError, BrainResult};
use crate::types::{GameStatus, MoveKey, PieceKind, PlacedPiece, Side};
use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, Color, Move, Position, Role};

/// Chess rules capability injected into the agent
pub trait RulesEngine: Send + Sync + 'static {
    /// Engine-specific position representation
    type Position: Clone + Send + Sync;

    /// Parse a FEN string into a position
    fn parse(&self, fen: &str) -> BrainResult<Self::Position>;

    /// Legal moves of the side to move, in the engine's enumeration order
    fn legal_moves(&self, position: &Self::Position) -> Vec<MoveKey>;

    /// Position after playing `mv`; fails if `mv` is not legal
    fn apply(&self, position: &Self::Position, mv: &str) -> BrainResult<Self::Position>;

    /// Every legal move paired with the position it leads to, in `legal_moves` order
    fn successors(&self, position: &Self::Position) -> BrainResult<Vec<(MoveKey, Self::Position)>> {
        self.legal_moves(position)
            .into_iter()
            .map(|mv| {
                let next = self.apply(position, &mv)?;
                Ok((mv, next))
            })
            .collect()
    }

    /// All pieces on the board
    fn pieces(&self, position: &Self::Position) -> Vec<PlacedPiece>;

    /// Game status of the side to move
    fn status(&self, position: &Self::Position) -> GameStatus;
}

/// Standard chess rules backed by `shakmaty`
#[derive(Debug, Clone, Copy, Default)]
pub struct ShakmatyRules;

impl ShakmatyRules {
    fn uci(mv: &Move) -> MoveKey {
        mv.to_uci(CastlingMode::Standard).to_string()
    }

    fn find_legal(position: &Chess, mv: &str) -> Option<Move> {
        position
            .legal_moves()
            .into_iter()
            .find(|candidate| Self::uci(candidate) == mv)
    }
}

impl RulesEngine for ShakmatyRules {
    type Position = Chess;

    fn parse(&self, fen: &str) -> BrainResult<Chess> {
        let invalid = |reason: String| BrainError::InvalidFen {
            fen: fen.to_string(),
            reason,
        };

        let setup: Fen = fen.trim().parse().map_err(|e| invalid(format!("{e}")))?;
        setup
            .into_position::<Chess>(CastlingMode::Standard)
            .map_err(|e| invalid(format!("{e}")))
    }

    fn legal_moves(&self, position: &Chess) -> Vec<MoveKey> {
        position.legal_moves().iter().map(Self::uci).collect()
    }

    fn apply(&self, position: &Chess, mv: &str) -> BrainResult<Chess> {
        let legal = Self::find_legal(position, mv).ok_or_else(|| BrainError::IllegalMove {
            mv: mv.to_string(),
        })?;

        let mut next = position.clone();
        next.play_unchecked(&legal);
        Ok(next)
    }

    fn successors(&self, position: &Chess) -> BrainResult<Vec<(MoveKey, Chess)>> {
        let successors = position
            .legal_moves()
            .iter()
            .map(|mv| {
                let mut next = position.clone();
                next.play_unchecked(mv);
                (Self::uci(mv), next)
            })
            .collect();
        Ok(successors)
    }

    fn pieces(&self, position: &Chess) -> Vec<PlacedPiece> {
        let board = position.board();
        board
            .occupied()
            .into_iter()
            .filter_map(|square| board.piece_at(square))
            .map(|piece| PlacedPiece::new(side_of(piece.color), kind_of(piece.role)))
            .collect()
    }

    fn status(&self, position: &Chess) -> GameStatus {
        if position.is_checkmate() {
            GameStatus::Checkmate
        } else if position.is_stalemate() {
            GameStatus::Stalemate
        } else if position.legal_moves().is_empty() {
            GameStatus::NoMoves
        } else {
            GameStatus::Ongoing
        }
    }
}

fn side_of(color: Color) -> Side {
    match color {
        Color::White => Side::White,
        Color::Black => Side::Black,
    }
}

fn kind_of(role: Role) -> PieceKind {
    match role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::evaluate_position;

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    const FOOLS_MATE_FEN: &str = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";
    const STALEMATE_FEN: &str = "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1";

    #[test]
    fn test_parse_and_count_start_moves() {
        let rules = ShakmatyRules;
        let pos = rules.parse(START_FEN).unwrap();
        let moves = rules.legal_moves(&pos);
        assert_eq!(moves.len(), 20);
        assert!(moves.contains(&"e2e4".to_string()));
        assert!(moves.contains(&"g1f3".to_string()));
        assert_eq!(rules.status(&pos), GameStatus::Ongoing);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = ShakmatyRules.parse("not a fen").unwrap_err();
        assert!(matches!(err, BrainError::InvalidFen { .. }));
    }

    #[test]
    fn test_parse_rejects_impossible_position() {
        //! Syntactically valid FEN without kings is not a legal chess setup
        let err = ShakmatyRules.parse("8/8/8/8/8/8/8/8 w - - 0 1").unwrap_err();
        assert!(matches!(err, BrainError::InvalidFen { .. }));
    }

    #[test]
    fn test_apply_changes_side_to_move() {
        let rules = ShakmatyRules;
        let pos = rules.parse(START_FEN).unwrap();
        let next = rules.apply(&pos, "e2e4").unwrap();
        assert_eq!(next.turn(), Color::Black);
        assert_eq!(rules.legal_moves(&next).len(), 20);
    }

    #[test]
    fn test_apply_rejects_illegal_move() {
        let rules = ShakmatyRules;
        let pos = rules.parse(START_FEN).unwrap();
        let err = rules.apply(&pos, "e2e5").unwrap_err();
        assert!(matches!(err, BrainError::IllegalMove { ref mv, .. } if mv == "e2e5"));
    }

    #[test]
    fn test_successors_follow_legal_move_order() {
        let rules = ShakmatyRules;
        let pos = rules.parse(START_FEN).unwrap();
        let successors = rules.successors(&pos).unwrap();

        let keys: Vec<MoveKey> = successors.iter().map(|(mv, _)| mv.clone()).collect();
        assert_eq!(keys, rules.legal_moves(&pos));
        assert_eq!(keys.len(), 20);

        for (mv, next) in &successors {
            let applied = rules.apply(&pos, mv).unwrap();
            assert_eq!(next.board(), applied.board(), "successor of {mv} differs from apply");
            assert_eq!(next.turn(), applied.turn());
        }
    }

    #[test]
    fn test_successors_of_capture_position() {
        let rules = ShakmatyRules;
        let pos = rules.parse("4k3/8/8/8/8/8/3q4/3Q3K b - - 0 1").unwrap();
        let successors = rules.successors(&pos).unwrap();

        let (_, after_capture) = successors
            .iter()
            .find(|(mv, _)| mv == "d2d1")
            .expect("queen capture should be legal");
        assert_eq!(evaluate_position(&rules, after_capture, Side::Black), 90.0);
    }

    #[test]
    fn test_successors_empty_when_mated() {
        let rules = ShakmatyRules;
        let mated = rules.parse(FOOLS_MATE_FEN).unwrap();
        assert!(rules.successors(&mated).unwrap().is_empty());
    }

    #[test]
    fn test_pieces_on_start_board() {
        let rules = ShakmatyRules;
        let pos = rules.parse(START_FEN).unwrap();
        let pieces = rules.pieces(&pos);
        assert_eq!(pieces.len(), 32);
        assert_eq!(evaluate_position(&rules, &pos, Side::Black), 0.0);
    }

    #[test]
    fn test_capture_changes_material() {
        let rules = ShakmatyRules;
        // Black queen on d2 can take the white queen on d1
        let pos = rules.parse("4k3/8/8/8/8/8/3q4/3Q3K b - - 0 1").unwrap();
        let after = rules.apply(&pos, "d2d1").unwrap();
        assert_eq!(evaluate_position(&rules, &after, Side::Black), 90.0);
    }

    #[test]
    fn test_status_checkmate_and_stalemate() {
        let rules = ShakmatyRules;
        let mated = rules.parse(FOOLS_MATE_FEN).unwrap();
        assert!(rules.legal_moves(&mated).is_empty());
        assert_eq!(rules.status(&mated), GameStatus::Checkmate);

        let stale = rules.parse(STALEMATE_FEN).unwrap();
        assert!(rules.legal_moves(&stale).is_empty());
        assert_eq!(rules.status(&stale), GameStatus::Stalemate);
    }
}
