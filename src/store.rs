//! Persistent player statistics.
//!
//! The game keeps exactly one record, so stores are plain load/save of a
//! single [`PlayerStats`] value.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::StoreError;

/// Balance a new player starts with.
pub const STARTING_BALANCE: usize = 1000;

/// The single persisted player record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Record id; always 1.
    pub id: u32,
    /// Current balance.
    pub balance: usize,
    /// Rounds won.
    pub total_wins: u32,
    /// Rounds lost.
    pub total_losses: u32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            id: 1,
            balance: STARTING_BALANCE,
            total_wins: 0,
            total_losses: 0,
        }
    }
}

/// Somewhere the player record lives between sessions.
pub trait StatsStore {
    /// Loads the record, creating and persisting a default one if none exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be read, decoded or created.
    fn load_or_create(&mut self) -> Result<PlayerStats, StoreError>;

    /// Overwrites the record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    fn save(&mut self, stats: &PlayerStats) -> Result<(), StoreError>;
}

/// Keeps the record as a JSON document in a flat file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by `path`. Nothing is touched until the first
    /// load or save.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the record file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_record(&self, stats: &PlayerStats) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        let mut file = fs::File::create(&tmp)?;
        serde_json::to_writer_pretty(&mut file, stats)?;
        file.write_all(b"\n")?;
        file.sync_all()?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl StatsStore for JsonFileStore {
    fn load_or_create(&mut self) -> Result<PlayerStats, StoreError> {
        match fs::read(&self.path) {
            Ok(bytes) => {
                let stats: PlayerStats = serde_json::from_slice(&bytes)?;
                info!(path = %self.path.display(), balance = stats.balance, "loaded stats");
                Ok(stats)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                let stats = PlayerStats::default();
                self.write_record(&stats)?;
                info!(path = %self.path.display(), balance = stats.balance, "created stats");
                Ok(stats)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn save(&mut self, stats: &PlayerStats) -> Result<(), StoreError> {
        self.write_record(stats)?;
        debug!(path = %self.path.display(), balance = stats.balance, "saved stats");
        Ok(())
    }
}

/// Keeps the record in memory only.
///
/// Useful for tests and throwaway sessions. [`MemoryStore::fail_saves`]
/// makes every later save fail so callers can exercise the error path.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    record: Option<PlayerStats>,
    fail_saves: bool,
    saves: usize,
}

impl MemoryStore {
    /// Creates an empty store; the first load creates the default record.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            record: None,
            fail_saves: false,
            saves: 0,
        }
    }

    /// Creates a store that already holds `stats`.
    #[must_use]
    pub const fn with_stats(stats: PlayerStats) -> Self {
        Self {
            record: Some(stats),
            fail_saves: false,
            saves: 0,
        }
    }

    /// Makes subsequent saves fail.
    pub const fn fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }

    /// The stored record, if any.
    #[must_use]
    pub const fn record(&self) -> Option<PlayerStats> {
        self.record
    }

    /// Number of successful saves.
    #[must_use]
    pub const fn saves(&self) -> usize {
        self.saves
    }
}

impl StatsStore for MemoryStore {
    fn load_or_create(&mut self) -> Result<PlayerStats, StoreError> {
        Ok(*self.record.get_or_insert_with(PlayerStats::default))
    }

    fn save(&mut self, stats: &PlayerStats) -> Result<(), StoreError> {
        if self.fail_saves {
            return Err(StoreError::Unavailable("saves disabled".to_owned()));
        }
        self.record = Some(*stats);
        self.saves += 1;
        Ok(())
    }
}
