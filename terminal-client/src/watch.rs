use std::error::Error;
use std::time::Duration;

use snake_common::players::ActivePlayerDirectory;
use snake_common::session::SpectatorPoller;
use snake_common::{Grid, PlayerId, SessionRng, log};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::console::WatchPrinter;

fn print_players(directory: &ActivePlayerDirectory) {
    println!("Live players:");
    for player in directory.list() {
        println!("  {:<12} {:<16} {:>6}  {}", player.id, player.username, player.score, player.mode);
    }
}

/// Watches `initial` (or the first live player) until `q`. Typing another id switches subject.
pub async fn run_watch(
    directory: ActivePlayerDirectory,
    initial: Option<PlayerId>,
    grid: Grid,
    poll_interval: Duration,
    rng: SessionRng,
) -> Result<(), Box<dyn Error>> {
    if directory.is_empty() {
        println!("Nobody is playing right now");
        return Ok(());
    }

    let subject = match initial {
        Some(id) => directory.get(&id).ok_or_else(|| format!("No live player with id {}", id))?,
        None => directory
            .list()
            .into_iter()
            .find(|player| player.is_playing())
            .ok_or("No live player is still playing")?,
    };

    print_players(&directory);
    println!("Type a player id to switch, list to show players, q to stop watching");

    let mut poller = SpectatorPoller::new(grid, poll_interval, rng, WatchPrinter::new(grid));
    poller.watch(subject).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        match input {
            "" => continue,
            "q" | "quit" => break,
            "list" => print_players(&directory),
            id => {
                let Some(next) = directory.get(&PlayerId::new(id)) else {
                    log!("Ignored input: no live player with id {}", id);
                    continue;
                };
                if let Some(current) = poller.subject().await {
                    directory.upsert(current);
                }
                poller.watch(next).await;
            }
        }
    }

    if let Some(current) = poller.subject().await {
        directory.upsert(current);
    }
    poller.stop().await;
    Ok(())
}
