//! Learned move selection
//!
//! ## Module Organization
//!
//! - `store` - Value table and game counter ([`ValueStore`], [`Snapshot`])
//! - `selector` - Ranking legal moves and recording the chosen one
//! - `learning` - Flat terminal reward over the moves of a finished game
//!
//! [`BrainState`] bundles the value store with the moves played in the game in
//! progress. It is the unit guarded by the agent's lock.

mod learning;
mod selector;
mod store;

pub use learning::{GameOutcome, RewardConfig, TerminalReport};
pub use selector::{rank_candidates, score_material, Candidate, MaterialScore, Selection};
pub use store::{Snapshot, ValueStore, ValueTable};

use crate::types::{MoveKey, StateKey};

/// Value store plus the moves played since the last terminal update
#[derive(Debug, Default)]
pub struct BrainState {
    pub store: ValueStore,
    /// (state, move) pairs played in the current game, oldest first
    pub pending: Vec<(StateKey, MoveKey)>,
}

impl BrainState {
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            store: ValueStore::from_snapshot(snapshot),
            pending: Vec::new(),
        }
    }
}
