use std::time::Duration;

pub const GRID_SIZE: i32 = 20;
pub const MIN_GRID_SIZE: i32 = 10;
pub const MAX_GRID_SIZE: i32 = 100;

pub const INITIAL_SNAKE_LENGTH: usize = 3;

pub const INITIAL_SPEED_MS: u64 = 150;
pub const MIN_SPEED_MS: u64 = 50;
pub const MAX_SPEED_MS: u64 = 5000;
pub const SPEED_STEP_MS: u64 = 10;

pub const POINTS_PER_FOOD: u32 = 10;
/// Every time the score reaches a multiple of this, the tick interval shrinks by `SPEED_STEP_MS`.
pub const SPEED_UP_EVERY_POINTS: u32 = 50;

pub const SPECTATOR_TURN_PROBABILITY: f64 = 0.2;
pub const SPECTATOR_POLL_INTERVAL: Duration = Duration::from_millis(200);
