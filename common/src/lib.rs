pub mod config;
pub mod defaults;
pub mod engine;
pub mod identifiers;
pub mod leaderboard;
pub mod logger;
pub mod players;
pub mod random;
pub mod session;

pub use engine::*;
pub use identifiers::*;
pub use random::{RandomSource, ScriptedRandom, SessionRng};
