use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use crate::error::{Error, Result};
use crate::model::WeightVector;

/// Stage id to weights, as persisted.
pub type WeightHistory = BTreeMap<String, WeightVector>;

pub const DEFAULT_HISTORY_FILE: &str = "weights_history.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    Uninitialized,
    Loaded,
    Updated,
}

/// Sole owner of the persisted weight history. The file is read and written
/// wholesale; `update` serializes read-modify-write cycles.
#[derive(Debug)]
pub struct WeightHistoryStore {
    path: PathBuf,
    state: Mutex<StoreState>,
    writer: Mutex<()>,
}

impl WeightHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            state: Mutex::new(StoreState::Uninitialized),
            writer: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn state(&self) -> StoreState {
        *lock(&self.state)
    }

    /// Reads the whole history. Missing, empty, corrupt or unreadable files
    /// yield an empty history; the failure is logged, never returned.
    pub fn load(&self) -> WeightHistory {
        let history = match self.read() {
            Ok(history) => history,
            Err(err) => {
                crate::warn!(path = %self.path.display(), "{err}; starting without history");
                WeightHistory::new()
            }
        };
        {
            let mut state = lock(&self.state);
            if *state == StoreState::Uninitialized {
                *state = StoreState::Loaded;
            }
        }
        crate::info!(
            path = %self.path.display(),
            stages = history.len(),
            "loaded weight history"
        );
        history
    }

    /// Replaces the persisted history with `history`. The previous file stays
    /// intact if anything fails.
    pub fn save(&self, history: &WeightHistory) -> Result<()> {
        let _guard = lock(&self.writer);
        self.write_atomic(history)?;
        self.set_state(StoreState::Updated);
        Ok(())
    }

    /// Load, set `stage` to `weights`, save, under one lock. A malformed file
    /// is replaced; a file that cannot be read aborts the update so its stages
    /// are not overwritten.
    pub fn update(&self, stage: &str, weights: &WeightVector) -> Result<WeightHistory> {
        let _guard = lock(&self.writer);
        let mut history = match self.read() {
            Ok(history) => history,
            Err(err @ Error::CorruptHistory { .. }) => {
                crate::warn!(path = %self.path.display(), "{err}; replacing it");
                WeightHistory::new()
            }
            Err(err) => return Err(err),
        };
        history.insert(stage.to_string(), weights.clone());
        self.write_atomic(&history)?;
        self.set_state(StoreState::Updated);
        crate::info!(stage, path = %self.path.display(), "persisted stage weights");
        Ok(history)
    }

    fn read(&self) -> Result<WeightHistory> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(WeightHistory::new()),
            Err(err) if err.kind() == ErrorKind::InvalidData => {
                return Err(self.corrupt(err.to_string()));
            }
            Err(err) => return Err(self.persistence(format!("cannot read history: {err}"))),
        };
        if content.trim().is_empty() {
            return Ok(WeightHistory::new());
        }
        let history: WeightHistory =
            serde_json::from_str(&content).map_err(|e| self.corrupt(e.to_string()))?;
        for (stage, weights) in &history {
            if let Some((attribute, w)) = weights.iter().find(|(_, w)| !w.is_finite()) {
                return Err(self.corrupt(format!("{stage}/{attribute} has weight {w}")));
            }
        }
        Ok(history)
    }

    fn write_atomic(&self, history: &WeightHistory) -> Result<()> {
        let tmp_path = tmp_path_for(&self.path);
        let result = self.write_tmp(&tmp_path, history).and_then(|()| {
            fs::rename(&tmp_path, &self.path).map_err(|e| self.persistence(e.to_string()))
        });
        if result.is_err() {
            let _ = fs::remove_file(&tmp_path);
        }
        result
    }

    fn write_tmp(&self, tmp_path: &Path, history: &WeightHistory) -> Result<()> {
        let bytes =
            serde_json::to_vec_pretty(history).map_err(|e| self.persistence(e.to_string()))?;
        let mut file = File::create(tmp_path).map_err(|e| self.persistence(e.to_string()))?;
        file.write_all(&bytes)
            .and_then(|()| file.sync_all())
            .map_err(|e| self.persistence(e.to_string()))
    }

    fn set_state(&self, state: StoreState) {
        *lock(&self.state) = state;
    }

    fn corrupt(&self, reason: String) -> Error {
        Error::CorruptHistory {
            path: self.path.clone(),
            reason,
        }
    }

    fn persistence(&self, reason: String) -> Error {
        Error::PersistenceError {
            path: self.path.clone(),
            reason,
        }
    }
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

// Poisoning is ignored: the file on disk is only ever replaced whole.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
#[path = "../../tests/src_inline/history/tests.rs"]
mod tests;
