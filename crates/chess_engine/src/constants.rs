//! # Learned Engine Constants - Material Values & Terminal Rewards
//!
//! ## Material Valuation
//!
//! The material heuristic uses whole "points" scaled by ten rather than
//! centipawns, so that a single learned reward (±500) outweighs a few pawns of
//! material but never the king:
//!
//! - **Pawn**: 10
//! - **Knight**: 30
//! - **Bishop**: 30
//! - **Rook**: 50
//! - **Queen**: 90
//! - **King**: 900
//!
//! The king is counted like every other piece. Because both kings are always on
//! the board, their contributions cancel out in any legal position and only show
//! up when a scripted or illegal position is evaluated.
//!
//! ## Terminal Rewards
//!
//! Every move the agent played in a finished game receives the same flat
//! reward. `WIN_REWARD` and `LOSS_REWARD` are the defaults used by
//! [`crate::brain::RewardConfig`]; draws default to the loss reward.

/// Material value of a pawn
pub const PAWN_VALUE: f64 = 10.0;

/// Material value of a knight
pub const KNIGHT_VALUE: f64 = 30.0;

/// Material value of a bishop
pub const BISHOP_VALUE: f64 = 30.0;

/// Material value of a rook
pub const ROOK_VALUE: f64 = 50.0;

/// Material value of a queen
pub const QUEEN_VALUE: f64 = 90.0;

/// Material value of a king
pub const KING_VALUE: f64 = 900.0;

/// Reward applied to every recorded move after a won game
pub const WIN_REWARD: f64 = 500.0;

/// Reward applied to every recorded move after a lost game
pub const LOSS_REWARD: f64 = -500.0;

/// Default snapshot file name, relative to the working directory
pub const DEFAULT_BRAIN_FILE: &str = "qtable.json";
