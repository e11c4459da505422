use std::sync::Arc;

use snake_common::leaderboard::{InMemoryLeaderboard, ScoreSubmitter, UserProfile};
use snake_common::session::{GameBroadcaster, GameOverSummary, SpectatorBroadcaster};
use snake_common::{ActivePlayer, GameState, Grid, log};

use crate::render::{render_game, render_player};

/// Prints every published state and hands finished runs to the leaderboard.
#[derive(Clone)]
pub struct ConsoleBroadcaster {
    submitter: Arc<ScoreSubmitter<InMemoryLeaderboard>>,
    user: Option<UserProfile>,
}

impl ConsoleBroadcaster {
    pub fn new(submitter: Arc<ScoreSubmitter<InMemoryLeaderboard>>, user: Option<UserProfile>) -> Self {
        Self { submitter, user }
    }
}

impl GameBroadcaster for ConsoleBroadcaster {
    async fn broadcast_state(&self, state: GameState) {
        println!("{}\n", render_game(&state));
    }

    async fn broadcast_game_over(&self, summary: GameOverSummary) {
        let reason = summary
            .reason
            .map(|reason| reason.to_string())
            .unwrap_or_else(|| "stopped".to_string());
        println!(
            "Game over: {}. Score {}, length {}. Press n to play again.",
            reason, summary.score, summary.length
        );

        match self.submitter.submit(&summary, self.user.as_ref()) {
            Ok(Some(entry)) => println!("New leaderboard entry at rank {}", entry.rank),
            Ok(None) => {}
            Err(e) => log!("Could not save score: {}", e),
        }
    }
}

#[derive(Clone)]
pub struct WatchPrinter {
    grid: Grid,
}

impl WatchPrinter {
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }
}

impl SpectatorBroadcaster for WatchPrinter {
    async fn broadcast_player(&self, player: ActivePlayer) {
        println!("{}\n", render_player(&player, &self.grid));
    }
}
