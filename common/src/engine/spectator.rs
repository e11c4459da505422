use serde::{Deserialize, Serialize};

use crate::PlayerId;
use crate::defaults::{POINTS_PER_FOOD, SPECTATOR_TURN_PROBABILITY};
use crate::random::RandomSource;
use super::food::spawn_food;
use super::grid::{Grid, Position};
use super::snake::Snake;
use super::types::{Direction, GameMode, GameStatus};

/// Another player's game as seen from the watch view. It has no input channel
/// and steers itself through `simulate_step`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivePlayer {
    pub id: PlayerId,
    pub username: String,
    pub score: u32,
    pub mode: GameMode,
    pub snake: Snake,
    pub food: Position,
    pub direction: Direction,
    pub status: GameStatus,
}

impl ActivePlayer {
    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }
}

/// Advances a spectated player by one step.
///
/// Differs from `GameState::advance` on purpose: there is no self-collision check,
/// and in walls mode the off-board head is committed before the run is marked over.
pub fn simulate_step(mut player: ActivePlayer, grid: &Grid, rng: &mut impl RandomSource) -> ActivePlayer {
    if !player.is_playing() {
        return player;
    }

    if rng.chance(SPECTATOR_TURN_PROBABILITY) {
        let choices: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|direction| !direction.is_opposite(player.direction))
            .collect();
        player.direction = choices[rng.index_below(choices.len())];
    }

    let candidate = player.snake.head().step(player.direction);
    let head = match player.mode {
        GameMode::PassThrough => grid.wrap(candidate),
        GameMode::Walls => candidate,
    };

    player.snake.push_head(head);
    if head == player.food {
        player.score += POINTS_PER_FOOD;
        if let Some(food) = spawn_food(grid, &player.snake, rng) {
            player.food = food;
        }
    } else {
        player.snake.pop_tail();
    }

    if player.mode == GameMode::Walls && !grid.contains(head) {
        player.status = GameStatus::GameOver;
    }

    player
}
