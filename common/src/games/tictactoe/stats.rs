use serde::{Deserialize, Serialize};

use crate::config::{ConfigManager, Validate, YamlConfigSerializer};
use crate::log;
use crate::storage::{KeyValueStorage, StorageKeyContentProvider};
use super::types::{GameResult, Mark};

pub const STATS_STORAGE_KEY: &str = "xo-pro-stats";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    pub total_rounds: u64,
    pub wins_x: u64,
    pub wins_o: u64,
    pub draws: u64,
}

impl SessionStats {
    /// Counts a finished round. Returns `false` and changes nothing for a
    /// round still in progress.
    pub fn record(&mut self, result: &GameResult) -> bool {
        match result {
            GameResult::InProgress => return false,
            GameResult::Draw => self.draws += 1,
            GameResult::Won(line) => match line.mark {
                Mark::X => self.wins_x += 1,
                Mark::O => self.wins_o += 1,
                Mark::Empty => return false,
            },
        }
        self.total_rounds += 1;
        true
    }
}

impl Validate for SessionStats {
    fn validate(&self) -> Result<(), String> {
        let counted = self.wins_x + self.wins_o + self.draws;
        if counted != self.total_rounds {
            return Err(format!(
                "totalRounds ({}) does not match wins and draws ({})",
                self.total_rounds, counted
            ));
        }
        Ok(())
    }
}

/// Persists [`SessionStats`] under [`STATS_STORAGE_KEY`]. Storage problems are
/// logged and otherwise swallowed.
pub struct StatsStore<S: KeyValueStorage> {
    manager: ConfigManager<StorageKeyContentProvider<S>, SessionStats, YamlConfigSerializer>,
}

impl<S: KeyValueStorage> StatsStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            manager: ConfigManager::new(
                StorageKeyContentProvider::new(storage, STATS_STORAGE_KEY),
                YamlConfigSerializer::new(),
            ),
        }
    }

    pub fn load(&self) -> SessionStats {
        self.manager.get_config().unwrap_or_else(|e| {
            log!("Discarding stored stats: {}", e);
            SessionStats::default()
        })
    }

    pub fn persist(&self, stats: &SessionStats) {
        if let Err(e) = self.manager.set_config(stats) {
            log!("Failed to persist stats: {}", e);
        }
    }
}
