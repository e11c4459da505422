use std::time::Duration;

use crate::defaults::{MIN_SPEED_MS, POINTS_PER_FOOD, SPEED_STEP_MS, SPEED_UP_EVERY_POINTS};
use crate::random::RandomSource;
use super::food::spawn_food;
use super::grid::{Grid, Position};
use super::settings::GameSettings;
use super::snake::Snake;
use super::types::{DeathReason, Direction, GameMode, GameStatus};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub direction: Direction,
    pub score: u32,
    pub status: GameStatus,
    pub mode: GameMode,
    /// Tick interval in milliseconds. Only ever shrinks, never below `MIN_SPEED_MS`.
    pub speed_ms: u64,
    pub grid: Grid,
    pub death_reason: Option<DeathReason>,
}

impl GameState {
    /// Fresh idle state: canonical snake heading right, food on a free cell.
    pub fn new(settings: &GameSettings, mode: GameMode, rng: &mut impl RandomSource) -> Self {
        let grid = settings.grid;
        let snake = Snake::canonical(&grid);
        let food = spawn_food(&grid, &snake, rng).expect("a fresh board always has free cells");

        Self {
            snake,
            food,
            direction: Direction::Right,
            score: 0,
            status: GameStatus::Idle,
            mode,
            speed_ms: settings.initial_speed_ms,
            grid,
            death_reason: None,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.speed_ms)
    }

    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    /// Turning back onto the neck is ignored, as is any turn outside of play.
    pub fn change_direction(mut self, direction: Direction) -> Self {
        if !self.is_playing() || direction.is_opposite(self.direction) {
            return self;
        }
        self.direction = direction;
        self
    }

    /// One tick of movement. States that are not playing come back untouched.
    pub fn advance(mut self, rng: &mut impl RandomSource) -> Self {
        if !self.is_playing() {
            return self;
        }

        let candidate = self.snake.head().step(self.direction);
        let Some(next_head) = self.grid.resolve(candidate, self.mode) else {
            return self.end_run(DeathReason::WallCollision);
        };

        // Checked against the whole current body, tail included, even though the tail is about to move.
        if self.snake.contains(next_head) {
            return self.end_run(DeathReason::SelfCollision);
        }

        self.snake.push_head(next_head);

        if next_head == self.food {
            self.score += POINTS_PER_FOOD;
            if let Some(food) = spawn_food(&self.grid, &self.snake, rng) {
                self.food = food;
            }
            if self.score % SPEED_UP_EVERY_POINTS == 0 && self.speed_ms > MIN_SPEED_MS {
                self.speed_ms = self.speed_ms.saturating_sub(SPEED_STEP_MS).max(MIN_SPEED_MS);
            }
        } else {
            self.snake.pop_tail();
        }

        self
    }

    fn end_run(mut self, reason: DeathReason) -> Self {
        self.status = GameStatus::GameOver;
        self.death_reason = Some(reason);
        self
    }
}
