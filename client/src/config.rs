use std::time::Duration;

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::{GameMode, TicTacToeSessionSettings};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "xo_pro_client_config.yaml";
const MAX_BOT_DELAY_MS: u64 = 5000;

pub fn get_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub default_mode: GameMode,
    pub bot_delay_ms: u64,
    pub stats_dir: String,
}

impl Config {
    pub fn session_settings(&self) -> TicTacToeSessionSettings {
        TicTacToeSessionSettings {
            mode: self.default_mode,
            bot_delay: Duration::from_millis(self.bot_delay_ms),
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!("bot_delay_ms must not exceed {}", MAX_BOT_DELAY_MS));
        }
        if self.stats_dir.trim().is_empty() {
            return Err("stats_dir must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_mode: GameMode::TwoPlayers,
            bot_delay_ms: 220,
            stats_dir: "xo_pro_data".to_string(),
        }
    }
}
