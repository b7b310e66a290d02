//! Snapshot persistence
//!
//! The value table and game counter are stored as one pretty-printed JSON
//! object:
//!
//! ```json
//! {
//!   "q_table": { "<fen>": { "e2e4": 500.0 } },
//!   "game_count": 1
//! }
//! ```
//!
//! Loading is best-effort: a missing or unreadable file yields an empty store.
//! Saving writes a temporary file next to the target and renames it over the
//! old snapshot, so a crash mid-write never leaves a truncated file behind.

use crate::brain::Snapshot;
use crate::error::{BrainError, BrainResult};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{info, warn};

/// Read a snapshot; `Ok(None)` when the file does not exist
pub fn read_snapshot(path: &Path) -> BrainResult<Option<Snapshot>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(BrainError::io(path, e)),
    };

    Ok(Some(serde_json::from_slice(&bytes)?))
}

/// Load a snapshot, falling back to an empty one on any failure
pub fn load_or_default(path: &Path) -> Snapshot {
    match read_snapshot(path) {
        Ok(Some(snapshot)) => {
            info!(
                "[PERSIST] Loaded {} known positions after {} games from {}",
                snapshot.q_table.len(),
                snapshot.game_count,
                path.display()
            );
            snapshot
        }
        Ok(None) => {
            info!(
                "[PERSIST] No snapshot at {}, starting with an empty table",
                path.display()
            );
            Snapshot::default()
        }
        Err(e) => {
            warn!("[PERSIST] Ignoring unreadable snapshot: {}", e);
            Snapshot::default()
        }
    }
}

/// Encode a snapshot exactly as it is written to disk
pub fn encode_snapshot(snapshot: &Snapshot) -> BrainResult<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(snapshot)?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Atomically replace the snapshot at `path`
pub fn write_snapshot(path: &Path, snapshot: &Snapshot) -> BrainResult<()> {
    let bytes = encode_snapshot(snapshot)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| BrainError::io(dir, e))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| BrainError::io(dir, e))?;
    tmp.write_all(&bytes).map_err(|e| BrainError::io(tmp.path(), e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| BrainError::io(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| BrainError::io(path, e.error))?;

    Ok(())
}
