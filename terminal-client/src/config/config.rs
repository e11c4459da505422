use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use snake_common::config::{ConfigLoader, FileConfigSource, Validate};

use super::{GameConfig, LeaderboardSeed, SpectatorConfig};

const CONFIG_FILE_NAME: &str = "snake_terminal_client_config.yaml";

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

/// Uses `path` when given, otherwise the config file next to the executable.
pub fn get_config_loader(path: Option<&Path>) -> ConfigLoader<FileConfigSource, Config> {
    match path {
        Some(path) => ConfigLoader::from_yaml_file(path),
        None => ConfigLoader::from_yaml_file(get_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub game: GameConfig,
    pub spectator: SpectatorConfig,
    #[serde(default = "LeaderboardSeed::defaults")]
    pub leaderboard: Vec<LeaderboardSeed>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.spectator.validate()?;
        self.spectator.validate_on_grid(&self.game.settings().grid)?;
        for seed in &self.leaderboard {
            seed.validate()?;
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            spectator: SpectatorConfig::default(),
            leaderboard: LeaderboardSeed::defaults(),
        }
    }
}
