mod config;
mod console;
mod input;
mod leaderboard_view;
mod play;
mod render;
mod watch;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use snake_common::leaderboard::UserProfile;
use snake_common::players::ActivePlayerDirectory;
use snake_common::{GameMode, PlayerId, SessionRng, log, logger};

use config::get_config_loader;
use leaderboard_view::{build_leaderboard, print_leaderboard};

#[derive(Parser)]
#[command(name = "snake_terminal_client")]
struct Args {
    #[arg(long, global = true)]
    use_log_prefix: bool,

    /// Config file; defaults to the one next to the executable.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Fixed seed for food placement and spectator turns.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Signed-in username. Scores are only submitted when set.
    #[arg(long, global = true)]
    user: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    Play {
        #[arg(long)]
        mode: Option<GameMode>,
    },
    Watch {
        player_id: Option<String>,
    },
    Leaderboard {
        #[arg(long)]
        mode: Option<GameMode>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = get_config_loader(args.config.as_deref()).load()?;
    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed {}", rng.seed());

    let user = args.user.map(|username| UserProfile {
        id: PlayerId::new(username.to_lowercase()),
        username,
    });
    let leaderboard = build_leaderboard(&config.leaderboard);

    match args.command.unwrap_or(Command::Play { mode: None }) {
        Command::Play { mode } => {
            let mode = mode.unwrap_or(config.game.default_mode);
            play::run_play(config.game.settings(), mode, rng, leaderboard, user).await
        }
        Command::Watch { player_id } => {
            let directory = ActivePlayerDirectory::new(config.spectator.players.clone());
            watch::run_watch(
                directory,
                player_id.map(PlayerId::new),
                config.game.settings().grid,
                config.spectator.poll_interval(),
                rng,
            )
            .await
        }
        Command::Leaderboard { mode } => {
            print_leaderboard(&leaderboard, mode);
            Ok(())
        }
    }
}
