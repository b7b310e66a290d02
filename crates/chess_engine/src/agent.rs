//! # Chess Agent - Shared Learning Service
//!
//! [`ChessAgent`] is constructed once per process and shared (behind an `Arc`)
//! by every request handler. It owns:
//!
//! - the rules engine used to parse positions and generate moves
//! - the [`BrainState`] (value table, game counter, pending moves) behind one
//!   `RwLock`
//! - a save lock serialising snapshot writes
//!
//! ## Locking
//!
//! Move selection and terminal updates take the state lock for writing, so two
//! games played at the same time interleave strictly one request at a time.
//! Material scores are computed before the lock is taken since they only
//! depend on the rules engine.
//!
//! Saving takes the save lock, copies the table under a read lock, releases
//! the read lock, and only then touches the disk. Holding the save lock across
//! the copy and the write keeps an older copy from overwriting a newer file.

use crate::brain::{
    score_material, BrainState, GameOutcome, RewardConfig, Selection, Snapshot, TerminalReport,
};
use crate::constants::DEFAULT_BRAIN_FILE;
use crate::error::{BrainError, BrainResult};
use crate::persistence;
use crate::rules::RulesEngine;
use crate::types::{GameStatus, MoveKey, Side, StateKey};
use parking_lot::{Mutex, RwLock};
use std::path::PathBuf;
use tracing::{info, warn};

/// Agent settings
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Side whose material counts positive and whose wins are rewarded
    pub tracked_side: Side,
    pub rewards: RewardConfig,
    /// Snapshot location
    pub brain_file: PathBuf,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            tracked_side: Side::Black,
            rewards: RewardConfig::default(),
            brain_file: PathBuf::from(DEFAULT_BRAIN_FILE),
        }
    }
}

/// Reply to a move request
#[derive(Debug, Clone, PartialEq)]
pub struct MoveReply {
    pub mv: MoveKey,
    pub score: f64,
    pub game_count: u64,
    pub brain_size: usize,
}

/// Point-in-time counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentStats {
    pub game_count: u64,
    pub brain_size: usize,
    pub pending_moves: usize,
}

/// Shared learning service
pub struct ChessAgent<R: RulesEngine> {
    rules: R,
    config: AgentConfig,
    state: RwLock<BrainState>,
    save_lock: Mutex<()>,
}

impl<R: RulesEngine> ChessAgent<R> {
    /// Agent with an empty value table
    pub fn new(rules: R, config: AgentConfig) -> Self {
        Self::with_state(rules, config, BrainState::default())
    }

    /// Agent restored from `config.brain_file`, or empty if it cannot be read
    pub fn load(rules: R, config: AgentConfig) -> Self {
        let snapshot = persistence::load_or_default(&config.brain_file);
        Self::with_state(rules, config, BrainState::from_snapshot(snapshot))
    }

    fn with_state(rules: R, config: AgentConfig, state: BrainState) -> Self {
        Self {
            rules,
            config,
            state: RwLock::new(state),
            save_lock: Mutex::new(()),
        }
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Choose a move for the position described by `fen` and record it
    ///
    /// The FEN string itself is the state key.
    pub fn choose_move(&self, fen: &str) -> BrainResult<MoveReply> {
        let position = self.rules.parse(fen)?;
        let scored = score_material(&self.rules, &position, self.config.tracked_side)?;
        if scored.is_empty() {
            let status = match self.rules.status(&position) {
                GameStatus::Ongoing => GameStatus::NoMoves,
                status => status,
            };
            return Err(BrainError::NoLegalMoves { status });
        }

        let mut state = self.state.write();
        let Selection { mv, score, .. } = state.select(fen, &scored)?;

        Ok(MoveReply {
            mv,
            score,
            game_count: state.store.game_count(),
            brain_size: state.store.state_count(),
        })
    }

    /// Apply the terminal reward for `outcome`, then save
    ///
    /// A failed save is logged and does not affect the returned report.
    pub fn finish_game(&self, outcome: GameOutcome) -> TerminalReport {
        let report = {
            let mut state = self.state.write();
            state.apply_terminal(outcome, &self.config.rewards)
        };

        if let Err(e) = self.save() {
            warn!("[AGENT] Failed to save after game #{}: {}", report.game_count, e);
        }

        report
    }

    /// Interpret a client result string and finish the game
    pub fn finish_game_with_result(&self, result: &str) -> TerminalReport {
        let outcome = GameOutcome::from_result(result, self.config.tracked_side);
        self.finish_game(outcome)
    }

    /// Write the current snapshot to `config.brain_file`
    pub fn save(&self) -> BrainResult<()> {
        let _guard = self.save_lock.lock();
        let snapshot = self.snapshot();
        persistence::write_snapshot(&self.config.brain_file, &snapshot)?;

        info!(
            "[AGENT] Saved {} positions ({} games) to {}",
            snapshot.q_table.len(),
            snapshot.game_count,
            self.config.brain_file.display()
        );
        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.read().store.snapshot()
    }

    pub fn stats(&self) -> AgentStats {
        let state = self.state.read();
        AgentStats {
            game_count: state.store.game_count(),
            brain_size: state.store.state_count(),
            pending_moves: state.pending.len(),
        }
    }

    /// Learned value of `mv` in `state`
    pub fn value(&self, state: &str, mv: &str) -> f64 {
        self.state.read().store.get(state, mv)
    }

    /// Moves recorded for the game in progress, oldest first
    pub fn pending_moves(&self) -> Vec<(StateKey, MoveKey)> {
        self.state.read().pending.clone()
    }
}
