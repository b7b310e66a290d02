//! Learned value table
//!
//! Two-level map `state -> move -> value` plus the completed-game counter.
//! Reads of missing entries return `0.0`; entries only come into existence
//! through [`ValueStore::accumulate`].

use crate::types::{MoveKey, StateKey};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Learned values, keyed by position then by move
pub type ValueTable = BTreeMap<StateKey, BTreeMap<MoveKey, f64>>;

/// Persisted form of the value store
///
/// Field names match the on-disk JSON object (`q_table`, `game_count`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub q_table: ValueTable,
    #[serde(default)]
    pub game_count: u64,
}

/// In-memory value table and game counter
#[derive(Debug, Clone, Default)]
pub struct ValueStore {
    table: ValueTable,
    game_count: u64,
}

impl ValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            table: snapshot.q_table,
            game_count: snapshot.game_count,
        }
    }

    /// Learned value of `mv` in `state`, or `0.0` if never written
    pub fn get(&self, state: &str, mv: &str) -> f64 {
        self.table
            .get(state)
            .and_then(|moves| moves.get(mv))
            .copied()
            .unwrap_or(0.0)
    }

    /// Add `delta` to the value of `mv` in `state`, creating the entry if needed
    pub fn accumulate(&mut self, state: &str, mv: &str, delta: f64) {
        let slot = self
            .table
            .entry(state.to_string())
            .or_default()
            .entry(mv.to_string())
            .or_insert(0.0);
        *slot += delta;
    }

    /// Count one completed game
    pub fn record_game(&mut self) -> u64 {
        self.game_count += 1;
        self.game_count
    }

    pub fn game_count(&self) -> u64 {
        self.game_count
    }

    /// Number of distinct positions with at least one learned value
    pub fn state_count(&self) -> usize {
        self.table.len()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            q_table: self.table.clone(),
            game_count: self.game_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_entries_read_as_zero() {
        let store = ValueStore::new();
        assert_eq!(store.get("S0", "e2e4"), 0.0);
        assert_eq!(store.state_count(), 0, "Reads must not create entries");
    }

    #[test]
    fn test_accumulate_creates_and_adds() {
        let mut store = ValueStore::new();
        store.accumulate("S0", "e2e4", 500.0);
        store.accumulate("S0", "e2e4", -200.0);
        store.accumulate("S0", "d2d4", 10.0);

        assert_eq!(store.get("S0", "e2e4"), 300.0);
        assert_eq!(store.get("S0", "d2d4"), 10.0);
        assert_eq!(store.get("S1", "e2e4"), 0.0);
        assert_eq!(store.state_count(), 1);
    }

    #[test]
    fn test_record_game_is_monotonic() {
        let mut store = ValueStore::new();
        assert_eq!(store.record_game(), 1);
        assert_eq!(store.record_game(), 2);
        assert_eq!(store.game_count(), 2);
    }

    #[test]
    fn test_snapshot_roundtrip_through_store() {
        let mut store = ValueStore::new();
        store.accumulate("S0", "e2e4", 500.0);
        store.record_game();

        let rebuilt = ValueStore::from_snapshot(store.snapshot());
        assert_eq!(rebuilt.snapshot(), store.snapshot());
    }

    #[test]
    fn test_snapshot_json_field_names() {
        let mut store = ValueStore::new();
        store.accumulate("S0", "e2e4", 1.5);

        let json = serde_json::to_value(store.snapshot()).unwrap();
        assert_eq!(json["q_table"]["S0"]["e2e4"], 1.5);
        assert_eq!(json["game_count"], 0);
    }

    #[test]
    fn test_snapshot_missing_fields_default() {
        let snapshot: Snapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.q_table.is_empty());
        assert_eq!(snapshot.game_count, 0);
    }
}
