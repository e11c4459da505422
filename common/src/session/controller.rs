use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};

use crate::engine::{Direction, DirectionBuffer, GameMode, GameSettings, GameState, GameStatus};
use crate::log;
use crate::random::RandomSource;
use super::broadcaster::{GameBroadcaster, GameOverSummary};

struct TickContext<R> {
    state: GameState,
    input: DirectionBuffer,
    rng: R,
    /// Bumped by `start`; identifies a run in its game-over summary.
    run_id: u64,
    /// Bumped whenever the ticker is torn down. A ticker holding an older value stops.
    generation: u64,
}

/// Owns one game: its lifecycle operations and the single tick timer that drives it.
pub struct GameController<B, R> {
    context: Arc<Mutex<TickContext<R>>>,
    settings: GameSettings,
    broadcaster: B,
    ticker: Option<JoinHandle<()>>,
}

impl<B, R> GameController<B, R>
where
    B: GameBroadcaster,
    R: RandomSource + Send + 'static,
{
    pub fn new(settings: GameSettings, mode: GameMode, mut rng: R, broadcaster: B) -> Self {
        let state = GameState::new(&settings, mode, &mut rng);
        Self {
            context: Arc::new(Mutex::new(TickContext {
                state,
                input: DirectionBuffer::new(),
                rng,
                run_id: 0,
                generation: 0,
            })),
            settings,
            broadcaster,
            ticker: None,
        }
    }

    pub async fn state(&self) -> GameState {
        self.context.lock().await.state.clone()
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Accepted in any status; the buffer is drained by the ticker.
    pub async fn queue_direction(&self, direction: Direction) {
        self.context.lock().await.input.push(direction);
    }

    /// Begins a brand-new run from the canonical state, keeping the current mode.
    pub async fn start(&mut self) {
        let (state, generation) = {
            let mut ctx = self.context.lock().await;
            let mode = ctx.state.mode;
            let mut state = GameState::new(&self.settings, mode, &mut ctx.rng);
            state.status = GameStatus::Playing;

            ctx.state = state.clone();
            ctx.input.clear();
            ctx.run_id += 1;
            ctx.generation += 1;
            log!("Run {} started in {} mode at {}ms per tick", ctx.run_id, mode, state.speed_ms);
            (state, ctx.generation)
        };

        self.rearm(generation, true);
        self.broadcaster.broadcast_state(state).await;
    }

    /// Playing pauses, paused resumes at the current speed. Other statuses are left alone.
    pub async fn toggle_pause(&mut self) {
        let (state, generation) = {
            let mut ctx = self.context.lock().await;
            match ctx.state.status {
                GameStatus::Playing => {
                    ctx.state.status = GameStatus::Paused;
                    log!("Run {} paused at score {}", ctx.run_id, ctx.state.score);
                }
                GameStatus::Paused => {
                    ctx.state.status = GameStatus::Playing;
                    log!("Run {} resumed at {}ms per tick", ctx.run_id, ctx.state.speed_ms);
                }
                GameStatus::Idle | GameStatus::GameOver => return,
            }
            ctx.generation += 1;
            (ctx.state.clone(), ctx.generation)
        };

        self.rearm(generation, state.is_playing());
        self.broadcaster.broadcast_state(state).await;
    }

    /// Back to an idle canonical state in the current mode.
    pub async fn reset(&mut self) {
        let mode = self.context.lock().await.state.mode;
        self.replace_with_idle(mode).await;
    }

    /// Switches mode and resets. Refused while a run is being played.
    pub async fn set_mode(&mut self, mode: GameMode) -> Result<(), String> {
        if self.context.lock().await.state.is_playing() {
            return Err("Cannot change mode while a run is in progress".to_string());
        }
        self.replace_with_idle(mode).await;
        Ok(())
    }

    async fn replace_with_idle(&mut self, mode: GameMode) {
        let (state, generation) = {
            let mut ctx = self.context.lock().await;
            ctx.state = GameState::new(&self.settings, mode, &mut ctx.rng);
            ctx.input.clear();
            ctx.generation += 1;
            (ctx.state.clone(), ctx.generation)
        };

        self.rearm(generation, false);
        self.broadcaster.broadcast_state(state).await;
    }

    /// Tears down any existing ticker, then arms a fresh one if the game is playing.
    fn rearm(&mut self, generation: u64, playing: bool) {
        if let Some(handle) = self.ticker.take() {
            handle.abort();
        }
        if playing {
            self.ticker = Some(tokio::spawn(run_ticker(
                self.context.clone(),
                self.broadcaster.clone(),
                generation,
            )));
        }
    }

    #[cfg(test)]
    async fn replace_state(&mut self, state: GameState) {
        let playing = state.is_playing();
        let generation = {
            let mut ctx = self.context.lock().await;
            ctx.state = state;
            ctx.generation += 1;
            ctx.generation
        };
        self.rearm(generation, playing);
    }
}

impl<B, R> Drop for GameController<B, R> {
    fn drop(&mut self) {
        if let Some(handle) = self.ticker.take() {
            handle.abort();
        }
    }
}

async fn run_ticker<B, R>(context: Arc<Mutex<TickContext<R>>>, broadcaster: B, generation: u64)
where
    B: GameBroadcaster,
    R: RandomSource + Send + 'static,
{
    let mut period = context.lock().await.state.tick_interval();
    let mut timer = interval_at(Instant::now() + period, period);

    loop {
        timer.tick().await;

        let (state, game_over) = {
            let mut ctx = context.lock().await;
            if ctx.generation != generation || !ctx.state.is_playing() {
                return;
            }
            let run_id = ctx.run_id;
            let TickContext { state, input, rng, .. } = &mut *ctx;

            let previous_score = state.score;
            let previous_speed = state.speed_ms;
            let next = input.apply_next(state.clone()).advance(rng);

            if next.score > previous_score {
                log!("Run {} ate food, score {} length {}", run_id, next.score, next.snake.len());
            }
            if next.speed_ms != previous_speed {
                log!("Run {} sped up to {}ms per tick", run_id, next.speed_ms);
            }

            let game_over = (next.status == GameStatus::GameOver).then(|| {
                log!(
                    "Run {} over: {} with score {}",
                    run_id,
                    next.death_reason.map(|r| r.to_string()).unwrap_or_else(|| "ended".to_string()),
                    next.score
                );
                GameOverSummary::from_state(run_id, &next)
            });

            *state = next.clone();
            (next, game_over)
        };

        if let Some(summary) = game_over {
            // Outlives this task: a restart aborts the ticker, never the final publication.
            tokio::spawn(async move {
                broadcaster.broadcast_state(state).await;
                broadcaster.broadcast_game_over(summary).await;
            });
            return;
        }

        let next_period = state.tick_interval();
        broadcaster.broadcast_state(state).await;

        if next_period != period {
            period = next_period;
            timer = interval_at(Instant::now() + period, period);
        }
    }
}
