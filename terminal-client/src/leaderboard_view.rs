use chrono::Local;
use snake_common::GameMode;
use snake_common::leaderboard::{InMemoryLeaderboard, LeaderboardStore};

use crate::config::LeaderboardSeed;
use crate::render::render_leaderboard;

pub fn build_leaderboard(seeds: &[LeaderboardSeed]) -> InMemoryLeaderboard {
    let now = Local::now();
    InMemoryLeaderboard::with_entries(seeds.iter().map(|seed| seed.to_entry(now)))
}

pub fn print_leaderboard(store: &impl LeaderboardStore, mode: Option<GameMode>) {
    match mode {
        Some(mode) => println!("Leaderboard ({})", mode),
        None => println!("Leaderboard"),
    }
    println!("{}", render_leaderboard(&store.entries(mode)));
}
