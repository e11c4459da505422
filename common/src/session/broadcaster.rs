use std::future::Future;

use crate::engine::{ActivePlayer, DeathReason, GameMode, GameState};

/// What the surrounding application learns when a run ends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOverSummary {
    pub run_id: u64,
    pub score: u32,
    pub mode: GameMode,
    pub reason: Option<DeathReason>,
    pub length: usize,
}

impl GameOverSummary {
    pub fn from_state(run_id: u64, state: &GameState) -> Self {
        Self {
            run_id,
            score: state.score,
            mode: state.mode,
            reason: state.death_reason,
            length: state.snake.len(),
        }
    }
}

pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, state: GameState) -> impl Future<Output = ()> + Send;

    /// Called once per run, on the tick that ends it.
    fn broadcast_game_over(&self, summary: GameOverSummary) -> impl Future<Output = ()> + Send;
}

pub trait SpectatorBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_player(&self, player: ActivePlayer) -> impl Future<Output = ()> + Send;
}
