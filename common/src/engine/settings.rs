use std::time::Duration;

use crate::config::Validate;
use crate::defaults::{GRID_SIZE, INITIAL_SPEED_MS, MAX_GRID_SIZE, MAX_SPEED_MS, MIN_GRID_SIZE, MIN_SPEED_MS};
use super::grid::Grid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameSettings {
    pub grid: Grid,
    pub initial_speed_ms: u64,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            grid: Grid::new(GRID_SIZE),
            initial_speed_ms: INITIAL_SPEED_MS,
        }
    }
}

impl GameSettings {
    pub fn initial_tick_interval(&self) -> Duration {
        Duration::from_millis(self.initial_speed_ms)
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        let size = self.grid.size();
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
            return Err(format!(
                "Grid size must be between {} and {}",
                MIN_GRID_SIZE, MAX_GRID_SIZE
            ));
        }
        if !(MIN_SPEED_MS..=MAX_SPEED_MS).contains(&self.initial_speed_ms) {
            return Err(format!(
                "Initial speed must be between {}ms and {}ms",
                MIN_SPEED_MS, MAX_SPEED_MS
            ));
        }
        Ok(())
    }
}
