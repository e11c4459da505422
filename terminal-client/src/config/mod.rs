mod config;
mod game_config;
mod leaderboard_seed;
mod spectator_config;

pub use config::{get_config_loader, Config};
pub use game_config::GameConfig;
pub use leaderboard_seed::LeaderboardSeed;
pub use spectator_config::SpectatorConfig;
