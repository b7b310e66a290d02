//! Move ranking and selection
//!
//! Each legal move is scored as
//!
//! ```text
//! learned value of (state, move) + material balance after the move
//! ```
//!
//! and the highest score wins. Equal scores are broken by the smallest UCI
//! string, so the choice never depends on the order in which the rules engine
//! enumerated the moves.
//!
//! Material scores are computed by [`score_material`] without touching the
//! value table; only [`BrainState::select`] needs the lock.

use super::{BrainState, ValueStore};
use crate::error::{BrainError, BrainResult};
use crate::evaluation::evaluate_position;
use crate::rules::RulesEngine;
use crate::types::{GameStatus, MoveKey, Side};
use std::cmp::Ordering;
use tracing::debug;

/// Material balance reached by each candidate move
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialScore {
    pub mv: MoveKey,
    pub material: f64,
}

/// A ranked move with both components of its score
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub mv: MoveKey,
    pub learned: f64,
    pub material: f64,
}

impl Candidate {
    pub fn score(&self) -> f64 {
        self.learned + self.material
    }
}

/// Outcome of a successful selection
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub mv: MoveKey,
    pub score: f64,
    pub candidates: usize,
}

/// Evaluate the position after every legal move
///
/// Empty when the side to move has no legal moves.
pub fn score_material<R: RulesEngine>(
    rules: &R,
    position: &R::Position,
    tracked: Side,
) -> BrainResult<Vec<MaterialScore>> {
    let scored = rules
        .successors(position)?
        .into_iter()
        .map(|(mv, next)| MaterialScore {
            material: evaluate_position(rules, &next, tracked),
            mv,
        })
        .collect();
    Ok(scored)
}

/// Best-first ordering: higher score, then smaller move key
fn compare_candidates(a: &Candidate, b: &Candidate) -> Ordering {
    b.score()
        .total_cmp(&a.score())
        .then_with(|| a.mv.cmp(&b.mv))
}

/// Combine learned values with material scores, best move first
pub fn rank_candidates(
    store: &ValueStore,
    state: &str,
    scored: &[MaterialScore],
) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = scored
        .iter()
        .map(|entry| Candidate {
            mv: entry.mv.clone(),
            learned: store.get(state, &entry.mv),
            material: entry.material,
        })
        .collect();

    candidates.sort_by(compare_candidates);
    candidates
}

impl BrainState {
    /// Pick the best move for `state` and record it for the next terminal update
    ///
    /// Must be called with the agent's state lock held for writing; the lookup
    /// and the append to the pending record happen as one step.
    pub fn select(&mut self, state: &str, scored: &[MaterialScore]) -> BrainResult<Selection> {
        let ranked = rank_candidates(&self.store, state, scored);
        let best = ranked.first().ok_or(BrainError::NoLegalMoves {
            status: GameStatus::NoMoves,
        })?;

        debug!(
            "[BRAIN] {} candidates, best {} (learned {:.1} + material {:.1})",
            ranked.len(),
            best.mv,
            best.learned,
            best.material
        );

        self.pending.push((state.to_string(), best.mv.clone()));

        Ok(Selection {
            mv: best.mv.clone(),
            score: best.score(),
            candidates: ranked.len(),
        })
    }
}
