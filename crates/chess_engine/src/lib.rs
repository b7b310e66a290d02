//! # Learned Chess Engine
//!
//! Picks moves for one side by adding a learned per-(position, move) value to
//! the material balance after the move, and learns from finished games by
//! crediting every move it played with a flat win/loss reward.
//!
//! ## Module Organization
//!
//! - `agent` - [`ChessAgent`], the shared service owning the table and its locks
//! - `brain` - Value table, move selection, terminal learning update
//! - `evaluation` - Material evaluation
//! - `rules` - [`RulesEngine`] boundary and the `shakmaty` implementation
//! - `persistence` - JSON snapshot load/save
//! - `constants`, `types`, `error` - Shared definitions
//!
//! ## Example
//!
//! ```rust,no_run
//! use chess_engine::{AgentConfig, ChessAgent, GameOutcome, ShakmatyRules};
//!
//! let agent = ChessAgent::load(ShakmatyRules, AgentConfig::default());
//! let reply = agent
//!     .choose_move("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1")
//!     .unwrap();
//! println!("playing {}", reply.mv);
//! agent.finish_game(GameOutcome::Win);
//! ```

pub mod agent;
pub mod brain;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod persistence;
pub mod rules;
pub mod types;

pub use agent::{AgentConfig, AgentStats, ChessAgent, MoveReply};
pub use brain::{GameOutcome, RewardConfig, Snapshot, TerminalReport, ValueStore};
pub use error::{BrainError, BrainResult};
pub use rules::{RulesEngine, ShakmatyRules};
pub use types::{GameStatus, MoveKey, PieceKind, PlacedPiece, Side, StateKey};
