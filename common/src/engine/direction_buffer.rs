use std::collections::VecDeque;

use super::game_state::GameState;
use super::types::Direction;

/// Direction commands waiting for the next tick, oldest first.
#[derive(Clone, Debug, Default)]
pub struct DirectionBuffer {
    pending: VecDeque<Direction>,
}

impl DirectionBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, direction: Direction) {
        self.pending.push_back(direction);
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Dequeues until a command that is not a reversal of `current` turns up.
    /// Reversals are dropped on the way; anything after the returned command stays queued.
    pub fn next_valid(&mut self, current: Direction) -> Option<Direction> {
        while let Some(direction) = self.pending.pop_front() {
            if !direction.is_opposite(current) {
                return Some(direction);
            }
        }
        None
    }

    /// Applies at most one queued turn to a playing state.
    pub fn apply_next(&mut self, state: GameState) -> GameState {
        if !state.is_playing() {
            return state;
        }
        match self.next_valid(state.direction) {
            Some(direction) => state.change_direction(direction),
            None => state,
        }
    }
}
