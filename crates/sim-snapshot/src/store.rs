//! File-backed snapshot persistence: snapshots are named
//! `snapshot_tick_<N>.json`, one file per tick, under a configured
//! directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::SnapshotResult;
use crate::snapshot::Snapshot;

/// Reads and writes snapshot files under `<log_directory>/<simulation_id>/`.
pub struct SnapshotStore {
    run_dir: PathBuf,
}

impl SnapshotStore {
    /// `log_directory` is `SimConfig::log_directory`; `simulation_id` is
    /// the run's id. The directory is created lazily, on first
    /// [`SnapshotStore::save`].
    pub fn new(log_directory: impl AsRef<Path>, simulation_id: &str) -> Self {
        Self {
            run_dir: log_directory.as_ref().join(simulation_id),
        }
    }

    /// The path a snapshot at `tick` would be written to or read from.
    pub fn path_for_tick(&self, tick_value: u64) -> PathBuf {
        self.run_dir.join(format!("snapshot_tick_{tick_value}.json"))
    }

    /// Serialize `snapshot` to its tick-named file, creating the run
    /// directory if needed.
    pub fn save(&self, snapshot: &Snapshot) -> SnapshotResult<PathBuf> {
        fs::create_dir_all(&self.run_dir)?;
        let path = self.path_for_tick(snapshot.tick.0);
        let body = snapshot.to_json_string()?;
        fs::write(&path, body)?;
        info!(path = %path.display(), tick = snapshot.tick.0, "wrote snapshot");
        Ok(path)
    }

    /// Load the snapshot at `tick_value`.
    pub fn load(&self, tick_value: u64) -> SnapshotResult<Snapshot> {
        self.load_file(&self.path_for_tick(tick_value))
    }

    /// Load a snapshot from an arbitrary path, bypassing the
    /// `<log_directory>/<simulation_id>/snapshot_tick_<N>.json` naming
    /// convention (useful for loading a snapshot captured under a
    /// different run id).
    pub fn load_file(&self, path: &Path) -> SnapshotResult<Snapshot> {
        debug!(path = %path.display(), "reading snapshot");
        let body = fs::read_to_string(path)?;
        Snapshot::from_json_str(&body)
    }

    pub fn run_dir(&self) -> &Path {
        &self.run_dir
    }
}
