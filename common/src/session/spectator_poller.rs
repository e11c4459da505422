use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};

use crate::engine::{ActivePlayer, Grid, simulate_step};
use crate::log;
use crate::random::RandomSource;
use super::broadcaster::SpectatorBroadcaster;

struct WatchContext<R> {
    subject: Option<ActivePlayer>,
    rng: R,
    generation: u64,
}

/// Animates the player being watched at a fixed cadence, independent of that player's speed.
pub struct SpectatorPoller<B, R> {
    context: Arc<Mutex<WatchContext<R>>>,
    grid: Grid,
    poll_interval: Duration,
    broadcaster: B,
    poller: Option<JoinHandle<()>>,
}

impl<B, R> SpectatorPoller<B, R>
where
    B: SpectatorBroadcaster,
    R: RandomSource + Send + 'static,
{
    pub fn new(grid: Grid, poll_interval: Duration, rng: R, broadcaster: B) -> Self {
        Self {
            context: Arc::new(Mutex::new(WatchContext {
                subject: None,
                rng,
                generation: 0,
            })),
            grid,
            poll_interval,
            broadcaster,
            poller: None,
        }
    }

    pub async fn subject(&self) -> Option<ActivePlayer> {
        self.context.lock().await.subject.clone()
    }

    pub fn is_polling(&self) -> bool {
        self.poller.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Switches to a new subject, replacing any running poll timer.
    pub async fn watch(&mut self, player: ActivePlayer) {
        let generation = {
            let mut ctx = self.context.lock().await;
            log!("Watching {} ({}), score {}", player.username, player.id, player.score);
            ctx.subject = Some(player.clone());
            ctx.generation += 1;
            ctx.generation
        };

        self.cancel();
        self.poller = Some(tokio::spawn(run_poller(
            self.context.clone(),
            self.broadcaster.clone(),
            self.grid,
            self.poll_interval,
            generation,
        )));
        self.broadcaster.broadcast_player(player).await;
    }

    pub async fn stop(&mut self) {
        {
            let mut ctx = self.context.lock().await;
            ctx.subject = None;
            ctx.generation += 1;
        }
        self.cancel();
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.poller.take() {
            handle.abort();
        }
    }
}

impl<B, R> Drop for SpectatorPoller<B, R> {
    fn drop(&mut self) {
        if let Some(handle) = self.poller.take() {
            handle.abort();
        }
    }
}

async fn run_poller<B, R>(
    context: Arc<Mutex<WatchContext<R>>>,
    broadcaster: B,
    grid: Grid,
    poll_interval: Duration,
    generation: u64,
) where
    B: SpectatorBroadcaster,
    R: RandomSource + Send + 'static,
{
    let mut timer = interval_at(Instant::now() + poll_interval, poll_interval);

    loop {
        timer.tick().await;

        let player = {
            let mut ctx = context.lock().await;
            if ctx.generation != generation {
                return;
            }
            let WatchContext { subject, rng, .. } = &mut *ctx;
            let Some(current) = subject.take() else {
                return;
            };
            if !current.is_playing() {
                *subject = Some(current);
                continue;
            }

            let next = simulate_step(current, &grid, rng);
            if !next.is_playing() {
                log!("{} hit a wall at score {}", next.username, next.score);
            }
            *subject = Some(next.clone());
            next
        };

        broadcaster.broadcast_player(player).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlayerId;
    use crate::engine::{Direction, GameMode, GameStatus, Position, Snake};
    use crate::random::ScriptedRandom;

    #[derive(Clone, Default)]
    struct RecordingBroadcaster {
        players: Arc<std::sync::Mutex<Vec<ActivePlayer>>>,
    }

    impl RecordingBroadcaster {
        fn count(&self) -> usize {
            self.players.lock().unwrap().len()
        }
    }

    impl SpectatorBroadcaster for RecordingBroadcaster {
        async fn broadcast_player(&self, player: ActivePlayer) {
            self.players.lock().unwrap().push(player);
        }
    }

    fn active(id: &str, mode: GameMode, head: (i32, i32), direction: Direction) -> ActivePlayer {
        let (dx, dy) = direction.opposite().delta();
        ActivePlayer {
            id: PlayerId::new(id),
            username: id.to_uppercase(),
            score: 100,
            mode,
            snake: Snake::new((0..3).map(|i| Position::new(head.0 + dx * i, head.1 + dy * i))),
            food: Position::new(0, 19),
            direction,
            status: GameStatus::Playing,
        }
    }

    fn poller() -> (SpectatorPoller<RecordingBroadcaster, ScriptedRandom>, RecordingBroadcaster) {
        let broadcaster = RecordingBroadcaster::default();
        let poller = SpectatorPoller::new(
            Grid::default(),
            Duration::from_millis(200),
            ScriptedRandom::new(),
            broadcaster.clone(),
        );
        (poller, broadcaster)
    }

    async fn sleep_ms(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_steps_subject_at_fixed_cadence() {
        let (mut poller, broadcaster) = poller();
        poller.watch(active("a", GameMode::PassThrough, (10, 10), Direction::Right)).await;

        sleep_ms(610).await;
        let subject = poller.subject().await.unwrap();
        assert_eq!(subject.snake.head(), Position::new(13, 10));
        assert_eq!(broadcaster.count(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_switching_subject_replaces_timer() {
        let (mut poller, _) = poller();
        poller.watch(active("a", GameMode::PassThrough, (10, 10), Direction::Right)).await;
        sleep_ms(100).await;
        poller.watch(active("b", GameMode::PassThrough, (5, 5), Direction::Down)).await;

        sleep_ms(210).await;
        let subject = poller.subject().await.unwrap();
        assert_eq!(subject.id, PlayerId::new("b"));
        assert_eq!(subject.snake.head(), Position::new(5, 6));
    }

    #[tokio::test(start_paused = true)]
    async fn test_wall_contact_freezes_subject() {
        let (mut poller, broadcaster) = poller();
        poller.watch(active("w", GameMode::Walls, (19, 3), Direction::Right)).await;

        sleep_ms(210).await;
        let subject = poller.subject().await.unwrap();
        assert_eq!(subject.status, GameStatus::GameOver);
        assert_eq!(subject.snake.head(), Position::new(20, 3));
        let published = broadcaster.count();

        sleep_ms(2000).await;
        assert_eq!(poller.subject().await.unwrap(), subject);
        assert_eq!(broadcaster.count(), published);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_cancels_polling() {
        let (mut poller, _) = poller();
        poller.watch(active("a", GameMode::PassThrough, (10, 10), Direction::Right)).await;
        assert!(poller.is_polling());

        poller.stop().await;
        assert!(!poller.is_polling());
        assert!(poller.subject().await.is_none());
    }
}
