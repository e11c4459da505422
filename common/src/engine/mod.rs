mod direction_buffer;
mod food;
mod game_state;
mod grid;
mod settings;
mod snake;
mod spectator;
mod types;

pub use direction_buffer::DirectionBuffer;
pub use food::spawn_food;
pub use game_state::GameState;
pub use grid::{Grid, Position};
pub use settings::GameSettings;
pub use snake::Snake;
pub use spectator::{ActivePlayer, simulate_step};
pub use types::{DeathReason, Direction, GameMode, GameStatus};
