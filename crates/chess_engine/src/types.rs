//! # Core Types
//!
//! Keys for the value table, sides, pieces and game status.
//!
//! Positions are identified by an opaque [`StateKey`] (the FEN string exactly as
//! the client sent it) and moves by an opaque [`MoveKey`] (UCI notation such as
//! `e2e4` or `e7e8q`). The learned table never looks inside either string.

use crate::error::BrainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque identifier of a board position
pub type StateKey = String;

/// Opaque identifier of a move from a given position
pub type MoveKey = String;

/// A side of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// Display name, as used in terminal results (`"White"` / `"Black"`)
    pub fn name(self) -> &'static str {
        match self {
            Side::White => "White",
            Side::Black => "Black",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Side {
    type Err = BrainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "white" | "w" => Ok(Side::White),
            "black" | "b" => Ok(Side::Black),
            other => Err(BrainError::InvalidSide(other.to_string())),
        }
    }
}

/// Piece type, independent of color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A piece standing on some square of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedPiece {
    pub side: Side,
    pub kind: PieceKind,
}

impl PlacedPiece {
    pub fn new(side: Side, kind: PieceKind) -> Self {
        Self { side, kind }
    }
}

/// Game status of a position as reported by the rules engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Side to move has at least one legal move
    Ongoing,
    Checkmate,
    Stalemate,
    /// No legal moves for any other reason (variant end, scripted engines)
    NoMoves,
}

impl GameStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
            GameStatus::NoMoves => "no_moves",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
