use std::collections::HashSet;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use snake_common::config::Validate;
use snake_common::defaults::SPECTATOR_POLL_INTERVAL;
use snake_common::{ActivePlayer, Direction, GameMode, GameStatus, Grid, PlayerId, Position, Snake};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SpectatorConfig {
    pub poll_interval_ms: u64,
    pub players: Vec<ActivePlayer>,
}

impl SpectatorConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Every seeded player must lie on `grid` as a connected body with its food on the board.
    pub fn validate_on_grid(&self, grid: &Grid) -> Result<(), String> {
        for player in &self.players {
            let segments: Vec<Position> = player.snake.segments().copied().collect();
            if let Some(outside) = segments.iter().find(|segment| !grid.contains(**segment)) {
                return Err(format!(
                    "player {} has a segment at ({}, {}) outside the {}x{} grid",
                    player.id, outside.x, outside.y, grid.size(), grid.size()
                ));
            }
            if segments
                .windows(2)
                .any(|pair| !are_adjacent(pair[0], pair[1], grid, player.mode))
            {
                return Err(format!("player {} has a snake with disconnected segments", player.id));
            }
            if !grid.contains(player.food) {
                return Err(format!(
                    "player {} has food at ({}, {}) outside the grid",
                    player.id, player.food.x, player.food.y
                ));
            }
        }
        Ok(())
    }
}

/// Neighbouring cells, counting the edge-to-edge step that pass-through allows.
fn are_adjacent(a: Position, b: Position, grid: &Grid, mode: GameMode) -> bool {
    let wraps = mode == GameMode::PassThrough;
    let one_step = |distance: i32| distance == 1 || (wraps && distance == grid.size() - 1);
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    (dx == 0 && one_step(dy)) || (dy == 0 && one_step(dx))
}

impl Validate for SpectatorConfig {
    fn validate(&self) -> Result<(), String> {
        if self.poll_interval_ms < 50 {
            return Err("poll_interval_ms must be at least 50".to_string());
        }
        if self.poll_interval_ms > 5000 {
            return Err("poll_interval_ms must not exceed 5000".to_string());
        }

        let mut seen = HashSet::new();
        for player in &self.players {
            if player.username.trim().is_empty() {
                return Err(format!("player {} has no username", player.id));
            }
            if !seen.insert(player.id.clone()) {
                return Err(format!("duplicate player id {}", player.id));
            }
        }
        Ok(())
    }
}

fn horizontal(head: Position, length: i32) -> Snake {
    Snake::new((0..length).map(|i| Position::new(head.x - i, head.y)))
}

fn vertical(head: Position, length: i32) -> Snake {
    Snake::new((0..length).map(|i| Position::new(head.x, head.y + i)))
}

impl Default for SpectatorConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: SPECTATOR_POLL_INTERVAL.as_millis() as u64,
            players: vec![
                ActivePlayer {
                    id: PlayerId::new("player-1"),
                    username: "LivePlayer42".to_string(),
                    score: 340,
                    mode: GameMode::Walls,
                    snake: horizontal(Position::new(10, 10), 3),
                    food: Position::new(15, 12),
                    direction: Direction::Right,
                    status: GameStatus::Playing,
                },
                ActivePlayer {
                    id: PlayerId::new("player-2"),
                    username: "StreamSnake".to_string(),
                    score: 520,
                    mode: GameMode::PassThrough,
                    snake: vertical(Position::new(5, 8), 3),
                    food: Position::new(12, 5),
                    direction: Direction::Up,
                    status: GameStatus::Playing,
                },
            ],
        }
    }
}
