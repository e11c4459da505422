use std::error::Error;
use std::sync::Arc;

use snake_common::leaderboard::{InMemoryLeaderboard, LeaderboardStore, ScoreSubmitter, UserProfile};
use snake_common::session::GameController;
use snake_common::{GameMode, GameSettings, SessionRng, log};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::console::ConsoleBroadcaster;
use crate::input::{PlayCommand, parse_command};
use crate::leaderboard_view::print_leaderboard;

const HELP: &str = "w/a/s/d or up/down/left/right to steer, p or space to pause, \
n to start, r to reset, mode walls|pass-through, l for the leaderboard, q to quit";

pub async fn run_play(
    settings: GameSettings,
    mode: GameMode,
    rng: SessionRng,
    leaderboard: InMemoryLeaderboard,
    user: Option<UserProfile>,
) -> Result<(), Box<dyn Error>> {
    let submitter = Arc::new(ScoreSubmitter::new(leaderboard));
    let broadcaster = ConsoleBroadcaster::new(submitter.clone(), user.clone());
    let mut controller = GameController::new(settings, mode, rng, broadcaster);

    println!("{}", HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                log!("Ignored input: {}", e);
                continue;
            }
        };

        match command {
            PlayCommand::Turn(direction) => controller.queue_direction(direction).await,
            PlayCommand::TogglePause => controller.toggle_pause().await,
            PlayCommand::Start => controller.start().await,
            PlayCommand::Reset => controller.reset().await,
            PlayCommand::SetMode(mode) => {
                if let Err(e) = controller.set_mode(mode).await {
                    println!("{}", e);
                }
            }
            PlayCommand::ShowLeaderboard => {
                print_leaderboard(submitter.store(), None);
                if let Some(user) = &user
                    && let Some(best) = submitter.store().high_score(&user.username)
                {
                    println!("Your best: {}", best);
                }
            }
            PlayCommand::Quit => break,
        }
    }

    let state = controller.state().await;
    log!("Leaving play with score {} ({})", state.score, state.status);
    Ok(())
}
