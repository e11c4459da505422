use serde::{Deserialize, Serialize};
use snake_common::config::Validate;
use snake_common::defaults::{GRID_SIZE, INITIAL_SPEED_MS};
use snake_common::{GameMode, GameSettings, Grid};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub grid_size: i32,
    pub initial_speed_ms: u64,
    pub default_mode: GameMode,
}

impl GameConfig {
    /// Only meaningful once `validate` has passed.
    pub fn settings(&self) -> GameSettings {
        GameSettings {
            grid: Grid::new(self.grid_size),
            initial_speed_ms: self.initial_speed_ms,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.grid_size <= 0 {
            return Err("grid_size must be greater than 0".to_string());
        }
        self.settings().validate()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            initial_speed_ms: INITIAL_SPEED_MS,
            default_mode: GameMode::Walls,
        }
    }
}
