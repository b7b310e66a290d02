//! Terminal learning update
//!
//! When a game ends, every (state, move) pair the agent played in that game
//! receives the same flat reward. There is no discounting and no per-ply
//! weighting: the first move of a game is credited exactly like the last.

use super::BrainState;
use crate::constants::{LOSS_REWARD, WIN_REWARD};
use crate::types::Side;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

/// Result of a finished game from the agent's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameOutcome {
    Win,
    Loss,
    Draw,
}

impl GameOutcome {
    /// Interpret a client-supplied result string
    ///
    /// The result names the winning side (`"Black"`, `"White"`); only the exact
    /// name of `tracked` is a win. `"Draw"`, `"draw"` and `"1/2-1/2"` are draws.
    /// Anything else, including `"black"` or `" Black"`, counts as a loss.
    pub fn from_result(result: &str, tracked: Side) -> Self {
        if result == tracked.name() {
            return GameOutcome::Win;
        }

        match result {
            "Draw" | "draw" | "1/2-1/2" => GameOutcome::Draw,
            _ => GameOutcome::Loss,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GameOutcome::Win => "win",
            GameOutcome::Loss => "loss",
            GameOutcome::Draw => "draw",
        })
    }
}

/// Flat reward per outcome
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RewardConfig {
    pub win: f64,
    pub loss: f64,
    pub draw: f64,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            win: WIN_REWARD,
            loss: LOSS_REWARD,
            draw: LOSS_REWARD,
        }
    }
}

impl RewardConfig {
    pub fn reward_for(&self, outcome: GameOutcome) -> f64 {
        match outcome {
            GameOutcome::Win => self.win,
            GameOutcome::Loss => self.loss,
            GameOutcome::Draw => self.draw,
        }
    }
}

/// Summary of one terminal update
#[derive(Debug, Clone, PartialEq)]
pub struct TerminalReport {
    pub outcome: GameOutcome,
    pub reward: f64,
    pub updated_pairs: usize,
    pub game_count: u64,
}

impl BrainState {
    /// Credit every pending move with the outcome's reward and close the game
    ///
    /// Drains the pending record and bumps the game counter. Must be called
    /// with the agent's state lock held for writing.
    pub fn apply_terminal(
        &mut self,
        outcome: GameOutcome,
        rewards: &RewardConfig,
    ) -> TerminalReport {
        let reward = rewards.reward_for(outcome);
        let pending = std::mem::take(&mut self.pending);

        for (state, mv) in &pending {
            self.store.accumulate(state, mv, reward);
        }
        let game_count = self.store.record_game();

        info!(
            "[BRAIN] Game #{} finished ({}), reward {:+} applied to {} moves",
            game_count,
            outcome,
            reward,
            pending.len()
        );

        TerminalReport {
            outcome,
            reward,
            updated_pairs: pending.len(),
            game_count,
        }
    }
}
