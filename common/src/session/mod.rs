mod broadcaster;
mod controller;
mod spectator_poller;

pub use broadcaster::{GameBroadcaster, GameOverSummary, SpectatorBroadcaster};
pub use controller::GameController;
pub use spectator_poller::SpectatorPoller;
