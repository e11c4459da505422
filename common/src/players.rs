use std::sync::{Mutex, MutexGuard};

use crate::PlayerId;
use crate::engine::ActivePlayer;

/// Players currently available to watch. Constructed per session; nothing is shared globally.
#[derive(Default)]
pub struct ActivePlayerDirectory {
    players: Mutex<Vec<ActivePlayer>>,
}

impl ActivePlayerDirectory {
    pub fn new(players: impl IntoIterator<Item = ActivePlayer>) -> Self {
        Self {
            players: Mutex::new(players.into_iter().collect()),
        }
    }

    fn players(&self) -> MutexGuard<'_, Vec<ActivePlayer>> {
        self.players.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn list(&self) -> Vec<ActivePlayer> {
        self.players().clone()
    }

    pub fn get(&self, id: &PlayerId) -> Option<ActivePlayer> {
        self.players().iter().find(|p| &p.id == id).cloned()
    }

    /// Replaces the player with the same id, or appends a new one.
    pub fn upsert(&self, player: ActivePlayer) {
        let mut players = self.players();
        match players.iter_mut().find(|p| p.id == player.id) {
            Some(existing) => *existing = player,
            None => players.push(player),
        }
    }

    pub fn remove(&self, id: &PlayerId) -> Option<ActivePlayer> {
        let mut players = self.players();
        let index = players.iter().position(|p| &p.id == id)?;
        Some(players.remove(index))
    }

    pub fn len(&self) -> usize {
        self.players().len()
    }

    pub fn is_empty(&self) -> bool {
        self.players().is_empty()
    }
}
