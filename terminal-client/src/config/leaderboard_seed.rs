use chrono::{DateTime, Local, TimeDelta};
use serde::{Deserialize, Serialize};
use snake_common::GameMode;
use snake_common::config::Validate;

/// A score already on the board when the client starts.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct LeaderboardSeed {
    pub username: String,
    pub score: u32,
    pub mode: GameMode,
    pub days_ago: u32,
}

impl LeaderboardSeed {
    fn new(username: &str, score: u32, mode: GameMode, days_ago: u32) -> Self {
        Self {
            username: username.to_string(),
            score,
            mode,
            days_ago,
        }
    }

    pub fn defaults() -> Vec<LeaderboardSeed> {
        vec![
            LeaderboardSeed::new("NeonViper", 1250, GameMode::Walls, 1),
            LeaderboardSeed::new("PixelMaster", 1180, GameMode::Walls, 2),
            LeaderboardSeed::new("RetroGamer", 1050, GameMode::PassThrough, 3),
            LeaderboardSeed::new("CyberSnake", 980, GameMode::Walls, 4),
            LeaderboardSeed::new("ArcadeKing", 920, GameMode::PassThrough, 5),
        ]
    }

    pub fn to_entry(&self, now: DateTime<Local>) -> (String, u32, GameMode, DateTime<Local>) {
        let date = now - TimeDelta::days(i64::from(self.days_ago));
        (self.username.clone(), self.score, self.mode, date)
    }
}

impl Validate for LeaderboardSeed {
    fn validate(&self) -> Result<(), String> {
        if self.username.trim().is_empty() {
            return Err("leaderboard seed username must not be empty".to_string());
        }
        if self.days_ago > 3650 {
            return Err(format!("leaderboard seed for {} is older than ten years", self.username));
        }
        Ok(())
    }
}
